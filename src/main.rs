//! # esop-declaration
//!
//! Renders a filled-in ESOP / portfolio investment inward remittance declaration as
//! a PDF.
//!
//! ## Usage
//!
//! ```bash
//! # Render a record, naming the file after the declarant and today's date
//! esop-declaration declaration.json
//!
//! # Read the record from stdin and write to a chosen file
//! cat declaration.json | esop-declaration --output declaration.pdf
//!
//! # Typeset in a TrueType pair and pin the date in the file name
//! esop-declaration declaration.json \
//!     --regular-font DejaVuSans.ttf --bold-font DejaVuSans-Bold.ttf \
//!     --date 2024-03-05
//! ```

use chrono::NaiveDate;
use clap::Parser;
use esop_declaration::{render, DeclarationError, DeclarationRecord, RenderOptions};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Render an inward remittance customer declaration to PDF
#[derive(Parser, Debug)]
#[command(name = "esop-declaration")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON declaration record; `-` or nothing reads stdin
    input: Option<PathBuf>,

    /// Directory to write the generated file name into
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Write to this file instead of the generated name
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,

    /// TrueType font for regular text (requires --bold-font)
    #[arg(long, value_name = "FILE", requires = "bold_font")]
    regular_font: Option<PathBuf>,

    /// TrueType font for bold text (requires --regular-font)
    #[arg(long, value_name = "FILE", requires = "regular_font")]
    bold_font: Option<PathBuf>,

    /// Date for the file name, YYYY-MM-DD [default: today, UTC]
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    date: Option<NaiveDate>,
}

fn parse_date(s: &str) -> Result<NaiveDate, DeclarationError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| DeclarationError::InvalidDate(s.to_string()))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DeclarationError> {
    let cli = Cli::parse();

    let record = match &cli.input {
        Some(path) if path.as_os_str() != "-" => {
            log::info!("reading declaration from {}", path.display());
            DeclarationRecord::from_reader(BufReader::new(File::open(path)?))?
        }
        _ => {
            log::info!("reading declaration from stdin");
            DeclarationRecord::from_reader(std::io::stdin().lock())?
        }
    };

    let options = RenderOptions {
        regular_font: cli.regular_font,
        bold_font: cli.bold_font,
        date: cli.date,
    };
    let rendered = render(&record, &options)?;

    let path = cli
        .output
        .unwrap_or_else(|| cli.out_dir.join(&rendered.file_name));
    std::fs::write(&path, &rendered.pdf)?;
    println!("{}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn dates_must_be_iso() {
        assert_eq!(
            parse_date("2024-03-05").ok(),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert!(matches!(
            parse_date("05/03/2024"),
            Err(DeclarationError::InvalidDate(_))
        ));
    }

    #[test]
    fn font_paths_come_in_pairs() {
        let result = Cli::try_parse_from(["esop-declaration", "--regular-font", "Regular.ttf"]);
        assert!(result.is_err());
        let cli = Cli::try_parse_from([
            "esop-declaration",
            "record.json",
            "--regular-font",
            "Regular.ttf",
            "--bold-font",
            "Bold.ttf",
        ])
        .expect("both fonts given");
        assert_eq!(cli.input, Some(PathBuf::from("record.json")));
        assert_eq!(cli.out_dir, PathBuf::from("."));
    }
}
