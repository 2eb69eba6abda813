//! loto: CLI binary for the ninety-ball lottery simulator.
//!
//! Subcommands:
//! - run

use std::env;
use std::process;

use loto_session::{
    by_prize, edition_events, EditionPlan, EventLog, ScenarioConfig, SearchFilter, SearchScope,
    Session, SummaryEventV1,
};

fn print_help() {
    eprintln!(
        r#"loto - ninety-ball lottery simulator

USAGE:
    loto <COMMAND> [OPTIONS]

COMMANDS:
    run                 Run a lottery scenario end to end

OPTIONS:
    -h, --help          Print this help message
    -V, --version       Print version

Run `loto run --help` for scenario options.
"#
    );
}

fn print_version() {
    println!("loto {}", env!("CARGO_PKG_VERSION"));
}

fn cmd_run(args: &[String]) {
    let mut config_path: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut tickets: usize = 10_000;
    let mut sell: f64 = 100.0;
    let mut jackpot_contribution: u64 = 0;
    let mut editions: usize = 1;
    let mut carry_balance = false;
    let mut simulate_jackpot = false;
    let mut log_path: Option<String> = None;
    let mut top: usize = 10;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"loto run

USAGE:
    loto run [--config scenario.yaml] [OPTIONS]

OPTIONS:
    --config PATH         Scenario YAML; inline edition options are ignored
    --seed S              RNG seed (default: OS entropy; overrides the scenario's)
    --tickets N           Tickets per edition (default: 10000)
    --sell PCT            Share of tickets to sell, in percent (default: 100)
    --jackpot-fund N      Jackpot contribution per edition (default: 0)
    --editions N          Number of editions to run (default: 1)
    --carry-balance       Roll leftover prize funds into the jackpot fund
    --simulate-jackpot    Rig each draw for a ball-fifteen jackpot
    --log PATH            Append NDJSON round/summary events to PATH
    --top N               Winners to list per session (default: 10)
"#
                );
                return;
            }
            "--config" => {
                config_path = Some(args.get(i + 1).cloned().unwrap_or_default());
                i += 2;
            }
            "--seed" => {
                seed = Some(parse_value(args, i, "--seed"));
                i += 2;
            }
            "--tickets" => {
                tickets = parse_value(args, i, "--tickets");
                i += 2;
            }
            "--sell" => {
                sell = parse_value(args, i, "--sell");
                i += 2;
            }
            "--jackpot-fund" => {
                jackpot_contribution = parse_value(args, i, "--jackpot-fund");
                i += 2;
            }
            "--editions" => {
                editions = parse_value(args, i, "--editions");
                i += 2;
            }
            "--carry-balance" => {
                carry_balance = true;
                i += 1;
            }
            "--simulate-jackpot" => {
                simulate_jackpot = true;
                i += 1;
            }
            "--log" => {
                log_path = Some(args.get(i + 1).cloned().unwrap_or_default());
                i += 2;
            }
            "--top" => {
                top = parse_value(args, i, "--top");
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `loto run`: {}", other);
                eprintln!("Run `loto run --help` for usage.");
                process::exit(1);
            }
        }
    }

    let scenario = match &config_path {
        Some(path) => ScenarioConfig::load(path).unwrap_or_else(|e| {
            eprintln!("Failed to load scenario: {e}");
            process::exit(1);
        }),
        None => ScenarioConfig {
            seed,
            editions: (0..editions)
                .map(|_| EditionPlan {
                    tickets,
                    sell_percentage: sell,
                    jackpot_contribution,
                    carry_balance,
                    simulate_jackpot,
                })
                .collect(),
        },
    };

    let mut session = match seed.or(scenario.seed) {
        Some(s) => Session::with_seed(s),
        None => Session::from_entropy(),
    };
    let mut log = log_path.map(|p| {
        EventLog::open_append(&p).unwrap_or_else(|e| {
            eprintln!("Failed to open event log: {e}");
            process::exit(1);
        })
    });

    for plan in &scenario.editions {
        let id = session
            .add_edition(
                plan.tickets,
                plan.jackpot_contribution,
                plan.carry_balance,
                plan.simulate_jackpot,
            )
            .unwrap_or_else(|e| {
                eprintln!("Failed to add edition: {e}");
                process::exit(1);
            });
        let sale = session.sell(plan.sell_percentage).unwrap_or_else(|e| {
            eprintln!("Failed to sell edition {id}: {e}");
            process::exit(1);
        });
        let summary = session.play().unwrap_or_else(|e| {
            eprintln!("Failed to play edition {id}: {e}");
            process::exit(1);
        });

        let edition = session.edition(id).unwrap_or_else(|e| {
            eprintln!("{e}");
            process::exit(1);
        });

        println!();
        println!(
            "Edition {}: {} tickets printed, {} sold, fund {}",
            id,
            edition.ticket_count(),
            sale.sold,
            sale.fund
        );
        if let Some(j) = edition.jackpot_round() {
            println!(
                "  JACKPOT at ball 15: tickets {:?} win {} each",
                j.winners, j.prize
            );
        }
        for (n, round) in edition.rounds().iter().enumerate() {
            if round.missed_numbers {
                println!("  Missed numbers: {} balls closed nothing", round.balls.len());
            } else {
                println!(
                    "  Round {}: {} balls, {} winner(s), prize {}",
                    n + 1,
                    round.balls.len(),
                    round.winners.len(),
                    round.prize
                );
            }
        }
        println!(
            "  Summary: {} participated, {} won, fund balance {}",
            summary.participated, summary.winners, summary.fund_balance
        );

        if let Some(log) = log.as_mut() {
            let result = edition_events(edition)
                .iter()
                .try_for_each(|e| log.write_event(e))
                .and_then(|()| log.write_event(&SummaryEventV1::new(id, &summary)))
                .and_then(|()| log.flush());
            if let Err(e) = result {
                eprintln!("Failed to write event log: {e}");
                process::exit(1);
            }
        }
    }

    print_leaderboard(&session, top);
}

fn print_leaderboard(session: &Session, top: usize) {
    let jackpots = session
        .search(SearchScope::All, SearchFilter::JackpotOnly)
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            process::exit(1);
        });
    let mut hits = session
        .search(
            SearchScope::All,
            SearchFilter::PrizeRange {
                min: 1,
                max: u64::MAX,
            },
        )
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            process::exit(1);
        });
    hits.sort_by(by_prize);

    println!();
    println!("Top winners:");
    for t in jackpots.iter().chain(hits.iter()).take(top) {
        println!("  ticket {:6}  prize {}", t.id(), t.prize());
    }
    if jackpots.is_empty() && hits.is_empty() {
        println!("  (none)");
    }
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    args.get(i + 1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            eprintln!("Invalid or missing value for {flag}");
            process::exit(1);
        })
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help();
        process::exit(0);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            print_help();
        }
        "-V" | "--version" => {
            print_version();
        }
        "run" => {
            cmd_run(&args[2..]);
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_help();
            process::exit(1);
        }
    }
}
