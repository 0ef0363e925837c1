// Command-line driver for the taivutin morphology engine.
//
// A thin shell around `taivutin_core::inflect` — all morphology lives in
// the core crate; this binary only parses arguments and renders output.
//
// Usage:
//   taivutin <word> [OPTIONS]
//     --category <CAT>   verb, noun, or adjective (default: noun)
//     --json             Print the paradigm as a JSON array

use taivutin_core::{InflectedForm, WordCategory, inflect};

struct CliArgs {
    word: String,
    category: WordCategory,
    json: bool,
}

fn main() {
    let args = parse_args();
    let paradigm = inflect(&args.word, args.category);

    // An unclassifiable verb leaves only the perusmuoto clitic entry.
    if args.category == WordCategory::Verb && paradigm.len() == 1 {
        eprintln!(
            "'{}' does not look like a verb in dictionary form",
            args.word
        );
    }

    if args.json {
        print_json(&paradigm);
    } else {
        for entry in &paradigm {
            println!("{}: {}", entry.label, entry.form);
        }
    }
}

fn print_json(paradigm: &[InflectedForm]) {
    match serde_json::to_string_pretty(paradigm) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            eprintln!("Failed to render JSON: {e}");
            std::process::exit(1);
        }
    }
}

/// Parse command-line arguments. Uses simple `std::env::args()` matching —
/// no clap dependency.
fn parse_args() -> CliArgs {
    let argv: Vec<String> = std::env::args().collect();
    let mut word: Option<String> = None;
    let mut category = WordCategory::Noun;
    let mut json = false;
    let mut i = 1;

    while i < argv.len() {
        match argv[i].as_str() {
            "--category" => {
                i += 1;
                category = argv
                    .get(i)
                    .map(String::as_str)
                    .and_then(WordCategory::parse)
                    .unwrap_or_else(|| {
                        eprintln!("--category must be one of: verb, noun, adjective");
                        std::process::exit(1);
                    });
            }
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if word.is_none() && !other.starts_with("--") => {
                word = Some(other.to_string());
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let Some(word) = word else {
        print_usage();
        std::process::exit(1);
    };
    CliArgs {
        word,
        category,
        json,
    }
}

fn print_usage() {
    eprintln!("Usage: taivutin <word> [--category verb|noun|adjective] [--json]");
}
