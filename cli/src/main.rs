//! deckgen CLI - SajuChain investor deck generation
//!
//! Running with no arguments builds the five-slide investor deck at
//! `sajuchain_pitch_deck.pptx` in the current working directory.

use clap::{Parser, Subcommand};
use colored::*;
use deckgen::deck;
use std::path::PathBuf;

/// SajuChain investor pitch deck generation
#[derive(Parser)]
#[command(
    name = "deckgen",
    author = "SajuChain Labs",
    version,
    about = "Generate the SajuChain investor pitch deck",
    long_about = "deckgen - Programmatic PowerPoint generation.\n\n\
                  Builds the five-slide SajuChain investor deck as a .pptx file."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the deck (the default when no command is given)
    Build {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show deck information without writing a file
    Info,

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Build { output: None }) {
        Commands::Build { output } => {
            let path = output.unwrap_or_else(|| PathBuf::from(deck::OUTPUT_FILE));
            let pres = deck::investor_deck();
            deckgen::write_file(&pres, &path)?;
            println!("{} Created {}", "✓".green().bold(), path.display());
        }

        Commands::Info => {
            let pres = deck::investor_deck();

            println!("{}", "Deck Information".cyan().bold());
            println!("{}", "─".repeat(40));
            if let Some(ref title) = pres.metadata.title {
                println!("{}: {}", "Title".bold(), title);
            }
            if let Some(ref subject) = pres.metadata.subject {
                println!("{}: {}", "Subject".bold(), subject);
            }
            println!("{}: {}", "Slides".bold(), pres.slide_count());
            println!("{}: {}", "Format".bold(), pres.slide_size.format_name());
            println!("{}: {}", "Output".bold(), deck::OUTPUT_FILE);

            println!("\n{}", "Slide Titles".cyan().bold());
            println!("{}", "─".repeat(40));
            for (i, slide) in pres.slides.iter().enumerate() {
                println!("{}. {}", i + 1, slide.title_text());
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "deckgen".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Programmatic PowerPoint generation for the SajuChain investor deck");
    println!();
    println!("Output: {}", deck::OUTPUT_FILE);
    println!("Repository: https://github.com/sajuchain/deckgen");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
