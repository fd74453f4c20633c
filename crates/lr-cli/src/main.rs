//! CLI frontend for the Six Palaces divination engine.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "liuren",
    about = "Liuren: Six Palaces (小六壬) divination",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a divination for a question and two numbers
    Cast {
        /// What to divine on (career, love, health, ...)
        question: String,

        /// First number
        #[arg(allow_negative_numbers = true)]
        first: String,

        /// Second number
        #[arg(allow_negative_numbers = true)]
        second: String,

        /// Cast as if the clock read this hour (0-23)
        #[arg(long)]
        hour: Option<u32>,

        /// Read the clock at a fixed UTC offset in hours (default: local time)
        #[arg(long, allow_negative_numbers = true)]
        utc_offset: Option<i32>,

        /// Write the summary in English
        #[arg(short, long)]
        english: bool,

        /// Summary language: zh or en
        #[arg(long, conflicts_with = "english")]
        lang: Option<String>,

        /// Print the divination as JSON
        #[arg(long)]
        json: bool,

        /// Print the interpretation request payload as JSON
        #[arg(long, conflicts_with = "json")]
        prompt: bool,

        /// Also write the divination as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the time branch for an hour (default: now)
    Hour {
        /// Hour of the day (0-23)
        hour: Option<u32>,

        /// Read the clock at a fixed UTC offset in hours (default: local time)
        #[arg(long, allow_negative_numbers = true)]
        utc_offset: Option<i32>,
    },

    /// Print the branch, palace, and element tables
    Tables,

    /// Look up a branch, palace, beast, or element by name
    Lookup {
        /// Chinese, pinyin, or English name (palaces also accept 1-6)
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Cast {
            question,
            first,
            second,
            hour,
            utc_offset,
            english,
            lang,
            json,
            prompt,
            output,
        } => commands::cast::run(&commands::cast::CastArgs {
            question: &question,
            first: &first,
            second: &second,
            hour,
            utc_offset,
            english,
            lang: lang.as_deref(),
            json,
            prompt,
            output: output.as_deref(),
        }),
        Commands::Hour { hour, utc_offset } => commands::hour::run(hour, utc_offset),
        Commands::Tables => commands::tables::run(),
        Commands::Lookup { name } => commands::lookup::run(&name),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
