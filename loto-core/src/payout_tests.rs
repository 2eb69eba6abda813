use crate::payout::FundAllocator;

#[test]
fn round_two_pays_five_million_each() {
    let mut alloc = FundAllocator::new(10_000_000);
    assert_eq!(alloc.allocate(1, 1), 5_000_000);
    assert_eq!(alloc.fund(), 5_000_000);
    assert!(!alloc.is_ruined());
}

#[test]
fn round_two_clips_to_the_fund_and_ruins() {
    let mut alloc = FundAllocator::new(3_000_000);
    assert_eq!(alloc.allocate(1, 1), 3_000_000);
    assert_eq!(alloc.fund(), 0);
    assert!(alloc.is_ruined());
}

#[test]
fn round_one_splits_the_total() {
    let mut alloc = FundAllocator::new(600_000);
    assert_eq!(alloc.allocate(0, 4), 125_000);
    assert_eq!(alloc.fund(), 100_000);
    assert!(!alloc.is_ruined());
}

#[test]
fn total_tier_debits_the_full_schedule_despite_rounding() {
    let mut alloc = FundAllocator::new(1_000_000);
    assert_eq!(alloc.allocate(0, 3), 166_666);
    // The whole 500_000 leaves the fund even though only 499_998 is paid.
    assert_eq!(alloc.fund(), 500_000);
    assert!(!alloc.is_ruined());
}

#[test]
fn total_tier_ruin_splits_what_is_left() {
    let mut alloc = FundAllocator::new(400_000);
    assert_eq!(alloc.allocate(0, 4), 100_000);
    assert_eq!(alloc.fund(), 0);
    assert!(alloc.is_ruined());
}

#[test]
fn per_winner_tier_ruin_splits_what_is_left() {
    let mut alloc = FundAllocator::new(7_000);
    // Round 8 schedules 10_000 each; 7_000 / 3 = 2_333.
    assert_eq!(alloc.allocate(7, 3), 2_333);
    assert_eq!(alloc.fund(), 1);
    assert!(alloc.is_ruined());
}

#[test]
fn ruin_with_more_winners_than_fund_pays_nothing() {
    let mut alloc = FundAllocator::new(2);
    assert_eq!(alloc.allocate(1, 3), 0);
    assert_eq!(alloc.fund(), 2);
    assert!(alloc.is_ruined());
}

#[test]
fn schedule_tiers_match_the_policy_table() {
    let mut alloc = FundAllocator::new(100_000_000);
    assert_eq!(alloc.allocate(2, 1), 1_000_000);
    assert_eq!(alloc.allocate(5, 1), 1_000_000);
    assert_eq!(alloc.allocate(6, 2), 250_000);
    assert_eq!(alloc.allocate(7, 1), 10_000);
    assert_eq!(alloc.allocate(11, 1), 10_000);
    assert_eq!(alloc.allocate(12, 1), 5_000);
    assert_eq!(alloc.allocate(15, 1), 1_000);
    assert_eq!(alloc.allocate(18, 1), 500);
    assert_eq!(alloc.allocate(21, 1), 300);
    assert_eq!(alloc.allocate(24, 1), 200);
    assert_eq!(alloc.allocate(27, 1), 100);
    assert_eq!(alloc.allocate(40, 2), 100);
    assert!(!alloc.is_ruined());
}
