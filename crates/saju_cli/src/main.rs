//! `saju`: derive sexagenary Four Pillars from the command line.

mod config;
mod error;

use clap::{Parser, Subcommand};
use saju_core::{
    ChatPrompt, CivilDateTime, SEXAGENARY_CYCLE, SajuError, day_pillar, four_pillars, hour_branch,
    month_branch, year_pillar,
};
use serde_json::json;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "saju", about = "Sexagenary Four Pillars CLI")]
struct Cli {
    /// Output format (overrides SAJU_FORMAT)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four Pillars for a birth date-time
    Pillars {
        /// Birth date-time (YYYY-MM-DD HH:MM)
        birth: String,
    },
    /// Year pillar for a Gregorian year
    Year {
        /// Gregorian year (astronomical numbering)
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },
    /// Month branch for a calendar month
    Month {
        /// Month (1-12)
        month: u32,
    },
    /// Day pillar for a calendar date
    Day {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Hour branch for a clock hour
    Hour {
        /// Hour (0-23)
        hour: u32,
    },
    /// List the 60-entry sexagenary cycle
    Cycle,
    /// Chat prompt asking about a birth date-time
    Prompt {
        /// Birth date-time (YYYY-MM-DD HH:MM)
        birth: String,
        /// Question for the interpreter
        #[arg(long)]
        question: String,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands, format: OutputFormat, config: &CliConfig) -> Result<String, CliError> {
    let json_mode = format == OutputFormat::Json;
    let out = match command {
        Commands::Pillars { birth } => {
            let pillars = four_pillars(&birth)?;
            if json_mode {
                serde_json::to_string_pretty(&pillars)?
            } else {
                pillars.render()
            }
        }

        Commands::Year { year } => {
            let g = year_pillar(year);
            if json_mode {
                serde_json::to_string_pretty(&json!({
                    "year": year,
                    "year_pillar": g,
                    "order": g.order(),
                }))?
            } else {
                format!("{year}: {g} (#{} in 60-year cycle)", g.order())
            }
        }

        Commands::Month { month } => {
            let b = month_branch(month)?;
            if json_mode {
                serde_json::to_string_pretty(&json!({ "month": month, "month_branch": b }))?
            } else {
                format!("Month {month}: {b} ({})", b.name())
            }
        }

        Commands::Day { date } => {
            let dt = CivilDateTime::parse(&format!("{date} 00:00"))
                .map_err(SajuError::from)?;
            let g = day_pillar(dt.date());
            if json_mode {
                serde_json::to_string_pretty(&json!({
                    "date": date,
                    "day_pillar": g,
                    "order": g.order(),
                }))?
            } else {
                format!("{date}: {g} (#{} in 60-day cycle)", g.order())
            }
        }

        Commands::Hour { hour } => {
            let b = hour_branch(hour)?;
            if json_mode {
                serde_json::to_string_pretty(&json!({ "hour": hour, "hour_branch": b }))?
            } else {
                format!("{hour:02}h: {b} ({})", b.name())
            }
        }

        Commands::Cycle => {
            if json_mode {
                serde_json::to_string_pretty(&SEXAGENARY_CYCLE[..])?
            } else {
                SEXAGENARY_CYCLE
                    .iter()
                    .map(|g| {
                        format!("{:2}  {g}  {}-{}", g.order(), g.stem().name(), g.branch().name())
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }

        Commands::Prompt { birth, question } => {
            let pillars = four_pillars(&birth)?;
            let prompt = ChatPrompt::new(&config.prompt, &pillars, &question)?;
            if json_mode {
                serde_json::to_string_pretty(&json!({ "messages": prompt.messages() }))?
            } else {
                prompt.to_string()
            }
        }
    };
    Ok(out)
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let config = CliConfig::from_env(cli.format).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    debug!(format = ?config.format, "configuration loaded");

    match run(cli.command, config.format, &config) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig::from_lookup(|_| None, None).unwrap()
    }

    fn text(command: Commands) -> String {
        run(command, OutputFormat::Text, &config()).unwrap()
    }

    fn json(command: Commands) -> serde_json::Value {
        let out = run(command, OutputFormat::Json, &config()).unwrap();
        serde_json::from_str(&out).unwrap()
    }

    #[test]
    fn pillars_text() {
        let out = text(Commands::Pillars {
            birth: "1990-05-15 14:30".into(),
        });
        assert_eq!(out, "- 년주: 경오\n- 월지: 오\n- 일주: 경오\n- 시지: 미");
    }

    #[test]
    fn pillars_json() {
        let v = json(Commands::Pillars {
            birth: "1990-05-15 14:30".into(),
        });
        assert_eq!(v["year_pillar"], "경오");
        assert_eq!(v["hour_branch"], "미");
    }

    #[test]
    fn year_before_anchor() {
        assert_eq!(
            text(Commands::Year { year: 1983 }),
            "1983: 계해 (#60 in 60-year cycle)"
        );
    }

    #[test]
    fn month_and_hour() {
        assert_eq!(text(Commands::Month { month: 12 }), "Month 12: 축 (Chuk)");
        assert_eq!(text(Commands::Hour { hour: 23 }), "23h: 자 (Ja)");
    }

    #[test]
    fn day_json() {
        let v = json(Commands::Day {
            date: "1900-01-01".into(),
        });
        assert_eq!(v["day_pillar"], "갑자");
        assert_eq!(v["order"], 1);
    }

    #[test]
    fn cycle_lists_sixty() {
        let out = text(Commands::Cycle);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 60);
        assert_eq!(lines[0], " 1  갑자  Gap-Ja");
        assert_eq!(lines[59], "60  계해  Gye-Hae");
        assert_eq!(json(Commands::Cycle).as_array().unwrap().len(), 60);
    }

    #[test]
    fn prompt_json_messages() {
        let v = json(Commands::Prompt {
            birth: "1990-05-15 14:30".into(),
            question: "성격은?".into(),
        });
        assert_eq!(v["messages"][0]["role"], "system");
        assert_eq!(v["messages"][1]["role"], "user");
        assert!(v["messages"][1]["content"].as_str().unwrap().ends_with("성격은?"));
    }

    #[test]
    fn invalid_inputs_are_errors() {
        let cfg = config();
        assert!(run(Commands::Month { month: 0 }, OutputFormat::Text, &cfg).is_err());
        assert!(run(Commands::Hour { hour: 24 }, OutputFormat::Text, &cfg).is_err());
        assert!(run(
            Commands::Pillars {
                birth: "not a date".into()
            },
            OutputFormat::Text,
            &cfg
        )
        .is_err());
        assert!(run(
            Commands::Day {
                date: "2023-02-30".into()
            },
            OutputFormat::Text,
            &cfg
        )
        .is_err());
    }
}
