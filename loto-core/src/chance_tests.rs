use crate::chance::{shuffle_prefix, RandomSource, ScriptedSource, SeededSource};

#[test]
fn seeded_source_is_reproducible() {
    let mut a = SeededSource::seed_from_u64(42);
    let mut b = SeededSource::seed_from_u64(42);
    for _ in 0..100 {
        assert_eq!(a.pick(90), b.pick(90));
    }
}

#[test]
fn pick_respects_bound() {
    let mut src = SeededSource::seed_from_u64(7);
    for _ in 0..1000 {
        assert!(src.pick(13) < 13);
    }
    assert_eq!(src.pick(1), 0);
}

#[test]
fn shuffle_is_a_permutation() {
    let mut items: Vec<u8> = (1..=90).collect();
    let mut src = SeededSource::seed_from_u64(3);
    shuffle_prefix(&mut items, 90, &mut src);

    let mut sorted = items.clone();
    sorted.sort();
    assert_eq!(sorted, (1..=90).collect::<Vec<u8>>());
}

#[test]
fn shuffle_leaves_suffix_untouched() {
    let mut items: Vec<u8> = (1..=90).collect();
    let mut src = SeededSource::seed_from_u64(3);
    shuffle_prefix(&mut items, 15, &mut src);

    assert_eq!(&items[15..], &(16..=90).collect::<Vec<u8>>()[..]);

    let mut prefix: Vec<u8> = items[..15].to_vec();
    prefix.sort();
    assert_eq!(prefix, (1..=15).collect::<Vec<u8>>());
}

#[test]
fn shuffle_of_empty_prefix_is_a_no_op() {
    let mut items = vec![1, 2, 3];
    let mut src = SeededSource::seed_from_u64(0);
    shuffle_prefix(&mut items, 0, &mut src);
    assert_eq!(items, vec![1, 2, 3]);
}

#[test]
fn scripted_source_drives_exact_swaps() {
    // i=0 swaps with 0, i=1 swaps with 0, i=2 swaps with itself.
    let mut items = vec![1, 2, 3];
    let mut src = ScriptedSource::new([0, 0, 2]);
    shuffle_prefix(&mut items, 3, &mut src);
    assert_eq!(items, vec![2, 1, 3]);
}

#[test]
#[should_panic(expected = "scripted source exhausted")]
fn scripted_source_panics_when_exhausted() {
    let mut src = ScriptedSource::new([1]);
    src.pick(10);
    src.pick(10);
}
