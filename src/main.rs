use crate::reassign::reassign_fleet;
use crate::store::Store;
use crate::store::memory::MemoryStore;
use crate::time::{Date, DateRange};
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::Arc;
use tabled::settings::Style;
use tracing_subscriber::EnvFilter;

mod flight;
mod plane;
mod reassign;
mod store;
mod time;

#[derive(Parser)]
struct Args {
    /// Path to the JSON scenario file
    #[arg(short, long, value_name = "FILE", default_value = "data/default.json")]
    scenario: PathBuf,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

fn paginate(content: String) {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())
        .expect("Failed to spawn pager");

    let mut stdin = pager.stdin.take().expect("Failed to open stdin for pager");

    if let Err(e) = stdin.write_all(content.as_bytes()) {
        // Broken pipe is common if the user quits the pager early
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            eprintln!("Error writing to pager: {}", e);
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn print_table<T: tabled::Tabled>(rows: Vec<T>) {
    if rows.is_empty() {
        println!("Nothing to show.");
        return;
    }
    let count = rows.len();
    let mut table = tabled::Table::new(rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if count > 20 {
        paginate(table.to_string());
    } else {
        println!("{}", table);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    println!("Dispatch online. Loaded fleet from {}", args.scenario.display());

    let mut store = MemoryStore::load_from_file(args.scenario.to_str().unwrap())?;

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "ls".to_string(),
            "demand".to_string(),
            "reassign".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => {
                        let sub = parts.get(1).map(|s| *s).unwrap_or("flights");
                        match sub {
                            "p" | "planes" => {
                                print_table(store.planes().into_iter().cloned().collect());
                            }
                            _ => {
                                print_table(store.flights.clone());
                            }
                        }
                    },
                    "demand" => {
                        if let Some(fid) = parts.get(1) {
                            match store.bookings_by_class(&Arc::from(*fid)) {
                                Ok(demand) if demand.is_empty() => {
                                    println!("No bookings for flight {}.", fid)
                                }
                                Ok(demand) => {
                                    let mut rows: Vec<_> = demand.into_iter().collect();
                                    rows.sort();
                                    for (class, count) in rows {
                                        println!("{:<12} {}", class, count);
                                    }
                                }
                                Err(e) => println!("{}", e.to_string().red()),
                            }
                        } else {
                            println!("Usage: demand <flight_id>");
                        }
                    },
                    "reassign" => {
                        if let (Some(tail), Some(from), Some(to)) = (parts.get(1), parts.get(2), parts.get(3)) {
                            let from_day = from.parse::<u64>().unwrap_or(0);
                            let to_day = to.parse::<u64>().unwrap_or(0);
                            let range = DateRange::new(Date::from_day(from_day), Date::from_day(to_day));
                            match reassign_fleet(&mut store, &Arc::from(*tail), range) {
                                Ok(report) => {
                                    for (fid, new_tail) in &report.reassigned {
                                        println!("{} {} -> {}", "moved".green(), fid, new_tail);
                                    }
                                    if report.unresolved.is_empty() {
                                        println!("{}", "All affected flights reassigned.".green());
                                    } else {
                                        let ids: Vec<&str> = report.unresolved.iter().map(|f| f.as_ref()).collect();
                                        println!("{} {}", "No replacement for:".yellow(), ids.join(", "));
                                    }
                                }
                                Err(e) => {
                                    println!("{} {}", "Batch aborted, nothing changed:".red(), e);
                                }
                            }
                        } else {
                            println!("Usage: reassign <tail_number> <from_day> <to_day>");
                        }
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls [flights|planes]       - List flights (default) or the fleet");
                        println!("  demand <id>               - Show booking counts per seat class for flight <id>");
                        println!("  reassign <tail> <d> <d>   - Move flights off plane <tail> for days <d>..<d> (1-based, inclusive)");
                        println!("  help / ?                  - Show this help menu");
                        println!("  exit / quit               - Exit the console\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
