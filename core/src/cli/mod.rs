use crate::scanner::{Diff, TextDiff};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::Read;

#[derive(Debug, Parser)]
#[command(name = "linediff")]
#[command(author, version, about = "Compare two text files line by line, streaming", long_about = None)]
pub struct Cli {
    /// First file to compare ("-" for stdin)
    pub file1: String,

    /// Second file to compare ("-" for stdin)
    pub file2: String,

    /// Stop at the first difference
    #[arg(long)]
    pub first_only: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Run the comparison described by `cli`. Returns whether any differences
/// were found, so the binary can follow the diff(1) exit convention.
pub fn run(cli: Cli) -> Result<bool, String> {
    if cli.file1 == "-" && cli.file2 == "-" {
        return Err("only one input may be read from stdin".to_owned());
    }

    let input1 = open_input(&cli.file1)?;
    let input2 = open_input(&cli.file2)?;

    let handle = TextDiff::new(input1, input2)
        .stop_immediately(cli.first_only)
        .scan();

    let mut found = false;
    for diff in &handle {
        found = true;
        match cli.format {
            OutputFormat::Json => {
                let json = serde_json::to_string(&diff).map_err(|e| e.to_string())?;
                println!("{json}");
            }
            OutputFormat::Text => print_diff(&diff),
        }
    }

    // Channel closed; now read failures (if any) are attributable.
    if let Some(err) = handle.finish() {
        return Err(err.to_string());
    }

    Ok(found)
}

fn open_input(path: &str) -> Result<Box<dyn Read + Send>, String> {
    if path == "-" {
        Ok(Box::new(std::io::stdin()))
    } else {
        let file = File::open(path).map_err(|e| format!("{path}: {e}"))?;
        Ok(Box::new(file))
    }
}

fn print_diff(diff: &Diff) {
    let header = if diff.text1.is_empty() != diff.text2.is_empty() {
        format!("line {}: only in one input", diff.line)
    } else {
        format!(
            "line {}: first mismatch at character {}",
            diff.line, diff.index
        )
    };
    println!("{}", header.blue());
    println!("{}", format!("-{}", diff.text1).red());
    println!("{}", format!("+{}", diff.text2).green());
}
