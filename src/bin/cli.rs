use chrono::{Local, NaiveDate};
use meeting_tool::{MeetingLocale, MeetingSchedule, OverrideTable, localized_next_meeting};
use std::fs;
use std::io::{self, Write};

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  next [YYYY-MM-DD] [page_path]      Next meeting date, localized for the page\n  month <YYYY> <MM>                  The rule's meeting dates in that month\n  rule show                          Show the recurring rule\n  overrides show                     Show the override window table\n  overrides set <json_path>          Load override table from JSON file\n  overrides save <json_path>         Save current override table to JSON file\n  quit|exit                          Exit"
    );
}

fn print_rule(schedule: &MeetingSchedule) {
    let rule = schedule.rule();
    let occurrences = rule
        .occurrences()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    println!("Weekday     : {}", rule.weekday());
    println!("Occurrences : {}", occurrences);
}

fn print_overrides(schedule: &MeetingSchedule) {
    let overrides = schedule.overrides();
    if overrides.is_empty() {
        println!("No override windows.");
        return;
    }
    println!("Override windows:");
    for window in overrides.windows() {
        println!(
            "  {} to {} fixed at {}",
            window.starts, window.ends, window.meeting
        );
    }
}

fn main() {
    let mut schedule = MeetingSchedule::default();

    println!("Meeting Tool (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => {
                print_help();
            }
            "quit" | "exit" => break,
            "next" => {
                let today = match parts.next() {
                    Some(date_s) => match NaiveDate::parse_from_str(date_s, "%Y-%m-%d") {
                        Ok(d) => d,
                        Err(_) => {
                            println!("Invalid date (YYYY-MM-DD)");
                            continue;
                        }
                    },
                    None => Local::now().date_naive(),
                };
                let page = parts.next().unwrap_or("");
                match localized_next_meeting(&schedule, today, page) {
                    Ok(formatted) => {
                        let locale = MeetingLocale::from_page_path(page);
                        println!("Next meeting ({}): {}", locale.tag(), formatted);
                    }
                    Err(e) => println!("Error resolving next meeting: {}", e),
                }
            }
            "month" => {
                let year_s = parts.next();
                let month_s = parts.next();
                match (year_s, month_s) {
                    (Some(year_s), Some(month_s)) => {
                        let year: i32 = match year_s.parse() {
                            Ok(v) => v,
                            Err(_) => {
                                println!("Invalid year");
                                continue;
                            }
                        };
                        let month: u32 = match month_s.parse() {
                            Ok(v) => v,
                            Err(_) => {
                                println!("Invalid month");
                                continue;
                            }
                        };
                        match schedule.meetings_in_month(year, month) {
                            Ok(dates) => {
                                println!("Meetings in {:04}-{:02}:", year, month);
                                for date in dates {
                                    println!("  {}", date);
                                }
                            }
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                    _ => println!("Usage: month <YYYY> <MM>"),
                }
            }
            "rule" => match parts.next() {
                Some("show") | None => print_rule(&schedule),
                Some(other) => {
                    println!("Unknown rule command '{}'.", other);
                    println!("Usage: rule show");
                }
            },
            "overrides" => match parts.next() {
                Some("show") | None => print_overrides(&schedule),
                Some("set") => {
                    let path = parts.next();
                    match path {
                        Some(path) => match fs::read_to_string(path) {
                            Ok(contents) => {
                                match serde_json::from_str::<OverrideTable>(&contents) {
                                    Ok(overrides) => {
                                        schedule.set_overrides(overrides);
                                        println!("Overrides updated from {}.", path);
                                        print_overrides(&schedule);
                                    }
                                    Err(e) => println!("Invalid overrides JSON: {}", e),
                                }
                            }
                            Err(e) => println!("Error reading {}: {}", path, e),
                        },
                        None => println!("Usage: overrides set <json_path>"),
                    }
                }
                Some("save") => {
                    let path = parts.next();
                    match path {
                        Some(path) => {
                            match serde_json::to_string_pretty(schedule.overrides()) {
                                Ok(json) => match fs::write(path, json) {
                                    Ok(_) => println!("Overrides saved to {}.", path),
                                    Err(e) => println!("Error writing {}: {}", path, e),
                                },
                                Err(e) => println!("Error serializing overrides: {}", e),
                            }
                        }
                        None => println!("Usage: overrides save <json_path>"),
                    }
                }
                Some(other) => {
                    println!("Unknown overrides command '{}'.", other);
                    println!("Usage: overrides show|set <json_path>|save <json_path>");
                }
            },
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}
