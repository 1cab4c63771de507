//! Contact Book - Main entry point
//!
//! Thin command-line front end over the contact book library. Every command
//! loads the directory from the configured file, runs one operation and
//! reports the outcome.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contact_book::render::render_table;
use contact_book::{Config, Directory, Record};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contact-book", version, about = "Personal contact book")]
struct Cli {
    /// Backing file (overrides CONTACT_BOOK_PATH)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every contact as a table
    List,

    /// Show contacts whose name contains QUERY (case-sensitive)
    Find { query: String },

    /// Show contacts whose birthday is DAYS from today
    Birthdays {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        days: i64,
    },

    /// Add a contact (replaces a contact with the same name)
    Add {
        #[arg(long)]
        name: String,

        #[arg(long = "phone")]
        phones: Vec<String>,

        #[arg(long = "email")]
        emails: Vec<String>,

        #[arg(long)]
        birthday: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },

    /// Rename a contact
    Rename { old: String, new: String },

    /// Remove a contact
    Remove { name: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize logging (stderr only so table output stays clean)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let path = cli.file.unwrap_or(config.book_path);
    info!("Using contact store {}", path.display());

    let mut directory = Directory::open(&path)
        .with_context(|| format!("Failed to load contacts from {}", path.display()))?;

    match cli.command {
        Command::List => print!("{}", directory.render()),
        Command::Find { query } => {
            let found = directory.find(&query)?;
            print!("{}", render_table(found));
        }
        Command::Birthdays { days } => {
            let birthdays = directory.upcoming_birthdays(days);
            if birthdays.is_empty() {
                println!("No birthdays in {} days", days);
            }
            for (name, date) in birthdays {
                println!("{}: {}", name, date);
            }
        }
        Command::Add {
            name,
            phones,
            emails,
            birthday,
            address,
        } => {
            let mut record = Record::with_name(&name)?;
            for phone in &phones {
                record.add_phone(phone)?;
            }
            for email in &emails {
                record.add_email(email)?;
            }
            if let Some(birthday) = birthday {
                record.add_birthday(&birthday)?;
            }
            if let Some(address) = address {
                record.add_address(&address)?;
            }
            let key = record.name().map(|n| n.to_string()).unwrap_or_default();
            directory.add_record(record)?;
            println!("{} was successfully added", key);
        }
        Command::Rename { old, new } => {
            directory.rename_record(&old, &new)?;
            println!("{} was successfully renamed", old);
        }
        Command::Remove { name } => {
            directory.remove_record(&name)?;
            println!("{} was deleted", name);
        }
    }

    Ok(())
}
