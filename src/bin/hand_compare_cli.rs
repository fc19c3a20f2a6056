// src/bin/hand_compare_cli.rs
//
// Использование:
//   hand_compare_cli "Ah Kh Qh Jh Th" "9c 9d 9h 9s 2c" [--json]
//
// POKER_ALLOW_DUPLICATES=1 разрешает одинаковые карты в двух руках.
// Уровень логов — через RUST_LOG (env_logger).

use std::process::ExitCode;

use poker_hand_eval::api::{compare_hand_strings, CompareResultDto, HandViewDto, Winner};
use poker_hand_eval::infra::EvalConfig;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let hands: Vec<&String> = args.iter().filter(|a| *a != "--json").collect();

    let [left, right] = hands.as_slice() else {
        eprintln!("usage: hand_compare_cli \"<hand A>\" \"<hand B>\" [--json]");
        eprintln!("  пример: hand_compare_cli \"Ah Kh Qh Jh Th\" \"9c 9d 9h 9s 2c\"");
        return ExitCode::from(2);
    };

    let config = match EvalConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("[CLI] {err}");
            return ExitCode::from(1);
        }
    };
    let mut allocator = config.build_allocator();

    let outcome = match compare_hand_strings(left, right, &mut allocator) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("[CLI] {err}");
            return ExitCode::from(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(s) => println!("{s}"),
            Err(err) => {
                eprintln!("[CLI] {err}");
                return ExitCode::from(1);
            }
        }
    } else {
        print_outcome(&outcome);
    }

    ExitCode::SUCCESS
}

fn print_hand(title: &str, hand: &HandViewDto) {
    println!(
        "{title:<6} {:<26} {:<16} {:<36} key={}",
        hand.label,
        hand.category.to_string(),
        hand.description,
        hand.key
    );
}

fn print_outcome(outcome: &CompareResultDto) {
    print_hand("left", &outcome.left);
    print_hand("right", &outcome.right);
    let verdict = match outcome.winner {
        Winner::Left => "left wins",
        Winner::Right => "right wins",
        Winner::Tie => "tie",
    };
    println!("result {:+} ({verdict})", outcome.result);
}
