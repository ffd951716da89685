//! Command-line front end for birthday facts.
//!
//! Computes the same facts as the web form, reading configuration from the
//! environment (and `.env`) exactly like the server.
//!
//! # Usage
//!
//! ```bash
//! # Full report, prompting for the birthdate
//! cargo run --bin facts -- report
//!
//! # Full report as of a fixed date, without scraping
//! cargo run --bin facts -- report 2000-01-01 --today 2005-06-15 --offline
//!
//! # Weekday distribution as a text bar chart
//! cargo run --bin facts -- weekdays 1990-07-04
//!
//! # Zodiac sign
//! cargo run --bin facts -- zodiac 1990-07-04
//! ```

use birthday_facts::application::services::{FactsService, FetchMode};
use birthday_facts::config;
use birthday_facts::domain::calendar::{Birthdate, WeekdayDistribution};
use birthday_facts::domain::entities::{BirthdayReport, Fact};
use birthday_facts::server::build_facts_service;
use birthday_facts::telemetry;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;

/// Birthday facts from the command line.
#[derive(Parser)]
#[command(name = "facts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every fact for a birthdate
    Report {
        /// Birthdate as YYYY-MM-DD (prompted when omitted)
        date: Option<String>,

        /// Compute as of this date instead of today
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,

        /// Skip the facts scraped from third-party sites
        #[arg(long)]
        offline: bool,
    },

    /// Print how many past birthdays fell on each weekday
    Weekdays {
        /// Birthdate as YYYY-MM-DD
        date: String,

        /// Compute as of this date instead of today
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },

    /// Print the zodiac sign for a birthdate
    Zodiac {
        /// Birthdate as YYYY-MM-DD
        date: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    // Keep the terminal quiet unless asked otherwise.
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    telemetry::init_tracing(&log_level, &config.log_format);

    let service = build_facts_service(&config)?;

    match cli.command {
        Commands::Report {
            date,
            today,
            offline,
        } => {
            let today = today.unwrap_or_else(|| service.today());
            let input = match date {
                Some(d) => d,
                None => prompt_birthdate(today)?,
            };
            let mode = if offline {
                FetchMode::Offline
            } else {
                FetchMode::Online
            };
            report(&service, &input, today, mode).await?;
        }
        Commands::Weekdays { date, today } => {
            let today = today.unwrap_or_else(|| service.today());
            weekdays(&service, &date, today)?;
        }
        Commands::Zodiac { date } => zodiac(&service, &date)?,
    }

    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_birthdate(input: &str, today: NaiveDate) -> Result<Birthdate> {
    Birthdate::parse(input, today).with_context(|| format!("Invalid birthdate '{input}'"))
}

/// Asks for a birthdate until a valid one is entered.
fn prompt_birthdate(today: NaiveDate) -> Result<String> {
    let input = Input::<String>::new()
        .with_prompt("Select your birthday (YYYY-MM-DD)")
        .validate_with(|s: &String| -> Result<(), String> {
            Birthdate::parse(s.trim(), today)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prints the full report.
///
/// # Output Format
///
/// ```text
/// 🎂 Birthday facts for January 1, 2000
///
///   Age:          5
///   Born on a:    Saturday
///   Zodiac sign:  Capricorn
///   Moon phase:   Waning Crescent at 21% illumination
///
/// Number of birthdays by day of week
///   Monday     █ 1
///   ...
/// ```
async fn report(
    service: &FactsService,
    input: &str,
    today: NaiveDate,
    mode: FetchMode,
) -> Result<()> {
    let birthdate = parse_birthdate(input, today)?;
    let report = service
        .report_at(birthdate, today, mode)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to build report: {}", e))?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &BirthdayReport) {
    if report.is_birthday {
        println!("{}", "🎈 Happy birthday! 🎈".bright_magenta().bold());
        println!();
    }

    println!(
        "{} {}",
        "🎂 Birthday facts for".bright_blue().bold(),
        report
            .birthdate
            .format("%B %-d, %Y")
            .to_string()
            .bright_white()
            .bold()
    );
    println!("  {}", format!("as of {}", report.today).bright_black());
    println!();
    println!("  {:<13} {}", "Age:", report.age.to_string().cyan());
    println!("  {:<13} {}", "Born on a:", report.weekday_born.cyan());
    println!("  {:<13} {}", "Zodiac sign:", report.zodiac.to_string().cyan());

    match &report.moon_phase {
        Fact::Available { value } => println!(
            "  {:<13} {} at {} illumination",
            "Moon phase:",
            value.phase.cyan(),
            value.illumination.cyan()
        ),
        Fact::Unavailable { reason } => println!(
            "  {:<13} {}",
            "Moon phase:",
            format!("unavailable ({reason})").yellow()
        ),
    }
    println!();

    print_distribution(&report.weekdays);

    match &report.notable_people {
        Fact::Available { value } if !value.is_empty() => {
            println!("{}", "Born on the same day".bright_white().bold());
            for person in &value.people {
                let age = person.age.map(|a| format!(", {a}")).unwrap_or_default();
                println!(
                    "  {:>2}. {}{} {}",
                    person.rank,
                    person.name.cyan(),
                    age,
                    person.occupation.bright_black()
                );
            }
            println!("  {}", value.source_url.bright_black());
        }
        Fact::Available { .. } => {
            println!("{}", "No notable people listed for this day".yellow());
        }
        Fact::Unavailable { reason } => {
            println!(
                "{}",
                format!("Notable people unavailable ({reason})").yellow()
            );
        }
    }
    println!();
}

fn weekdays(service: &FactsService, input: &str, today: NaiveDate) -> Result<()> {
    let birthdate = parse_birthdate(input, today)?;
    let distribution = service
        .weekday_distribution(birthdate, today)
        .map_err(|e| anyhow::anyhow!("Failed to count birthdays: {}", e))?;

    print_distribution(&distribution);
    Ok(())
}

/// Text bar chart, one row per weekday present.
fn print_distribution(distribution: &WeekdayDistribution) {
    println!(
        "{}",
        "Number of birthdays by day of week".bright_white().bold()
    );

    if distribution.is_empty() {
        println!("  {}", "No birthdays have passed yet".yellow());
        println!();
        return;
    }

    for entry in distribution.counts() {
        println!(
            "  {:<10} {} {}",
            entry.weekday,
            "█".repeat(entry.count as usize).green(),
            entry.count
        );
    }
    println!(
        "  {:<10} {}",
        "Total",
        distribution.total().to_string().bright_white().bold()
    );
    println!();
}

fn zodiac(service: &FactsService, input: &str) -> Result<()> {
    let birthdate = parse_birthdate(input, service.today())?;
    let sign = service.reference().zodiac.lookup(birthdate.date());

    println!("  {:<13} {}", "Zodiac sign:", sign.to_string().cyan());
    Ok(())
}
