use clap::Parser;
use serde_json::json;
use std::error::Error;
use std::io::Read;
use std::process;

use ordex::{
    contains_rotated, count_occurrences, find_minimum, find_peak, find_single, floor_ceil,
    occurrences, search_rotated, single_by_xor,
};

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{} {}", paint("error:", RED), e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let values = if cli.stdin {
        read_stdin_values()?
    } else {
        cli.command.values().to_vec()
    };

    let output = match &cli.command {
        Commands::FloorCeil { target, .. } => {
            let bounds = floor_ceil(&values, target);
            if cli.json {
                json!({ "op": "floor-ceil", "target": target, "floor": bounds.floor, "ceil": bounds.ceil })
                    .to_string()
            } else {
                format!(
                    "floor: {}\nceil:  {}",
                    show_value(bounds.floor),
                    show_value(bounds.ceil)
                )
            }
        }
        Commands::Occurrences { target, .. } => {
            let span = occurrences(&values, target);
            if cli.json {
                json!({
                    "op": "occurrences",
                    "target": target,
                    "first": span.map(|s| s.first),
                    "last": span.map(|s| s.last),
                    "count": span.map_or(0, |s| s.count()),
                })
                .to_string()
            } else {
                match span {
                    Some(span) => format!(
                        "first: {}  last: {}  count: {}",
                        paint(&span.first.to_string(), GREEN),
                        paint(&span.last.to_string(), GREEN),
                        span.count()
                    ),
                    None => paint("not found", DIM),
                }
            }
        }
        Commands::Count { target, .. } => {
            let count = count_occurrences(&values, target);
            if cli.json {
                json!({ "op": "count", "target": target, "count": count }).to_string()
            } else {
                format!("count: {}", count)
            }
        }
        Commands::Minimum { .. } => {
            let pivot = find_minimum(&values)?;
            if cli.json {
                json!({ "op": "minimum", "value": pivot.value, "rotation": pivot.rotation })
                    .to_string()
            } else {
                format!(
                    "minimum: {} (rotation count {})",
                    paint(&pivot.value.to_string(), GREEN),
                    pivot.rotation
                )
            }
        }
        Commands::Search { target, .. } => {
            let index = search_rotated(&values, target);
            if cli.json {
                json!({ "op": "search", "target": target, "index": index }).to_string()
            } else {
                match index {
                    Some(index) => format!("index: {}", paint(&index.to_string(), GREEN)),
                    None => paint("not found", DIM),
                }
            }
        }
        Commands::SearchAny { target, .. } => {
            let present = contains_rotated(&values, target);
            if cli.json {
                json!({ "op": "search-any", "target": target, "present": present }).to_string()
            } else if present {
                paint("present", GREEN)
            } else {
                paint("absent", DIM)
            }
        }
        Commands::Single { unsorted, .. } => {
            let single = if *unsorted {
                single_by_xor(&values)?
            } else {
                find_single(&values)?
            };
            if cli.json {
                json!({ "op": "single", "value": single }).to_string()
            } else {
                format!("single: {}", paint(&single.to_string(), GREEN))
            }
        }
        Commands::Peak { .. } => {
            let index = find_peak(&values)?;
            if cli.json {
                json!({ "op": "peak", "index": index, "value": values[index] }).to_string()
            } else {
                format!(
                    "peak: index {} (value {})",
                    paint(&index.to_string(), GREEN),
                    values[index]
                )
            }
        }
    };

    println!("{}", output);
    Ok(())
}

/// Read a JSON array of integers from stdin (for piping arrays too long
/// to pass inline).
fn read_stdin_values() -> Result<Vec<i64>, Box<dyn Error>> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    Ok(serde_json::from_str(&raw)?)
}

fn show_value(value: Option<i64>) -> String {
    match value {
        Some(v) => paint(&v.to_string(), GREEN),
        None => paint("none", DIM),
    }
}

const GREEN: &str = "32";
const DIM: &str = "2";
const RED: &str = "31";

/// ANSI-paint `text` when stdout is a terminal, pass it through when
/// piped.
fn paint(text: &str, code: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}
