// SPDX-License-Identifier: Apache-2.0

//! Walks a text file with `textscan` and prints the tokens it finds.
//!
//! Comments and whitespace are skipped between tokens. With `--delimiter`
//! each line is split into fields instead, and with `--numbers` every token is
//! parsed as a float and echoed back in compact form.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use textscan::{CompactFloat, TextView};

#[derive(Parser, Debug)]
#[command(name = "scan-demo", version, about = "Tokenize a text file")]
struct Args {
    /// File to scan
    file: PathBuf,

    /// Split each line on this character instead of on whitespace
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Parse each token as a float and print it in compact form
    #[arg(short, long)]
    numbers: bool,
}

fn print_token(token: TextView<'_>, numbers: bool) {
    if numbers {
        let (rest, value) = token.get_f32();
        if rest.is_empty() {
            println!("{token:?} -> {}", CompactFloat(value));
        } else {
            println!("{token:?} -> not a number");
        }
    } else {
        println!("{token:?}");
    }
}

fn scan_whitespace_tokens(view: TextView<'_>, numbers: bool) -> usize {
    let mut count = 0;
    let mut view = view.skip_comments_and_whitespace();
    while !view.is_empty() {
        let (rest, token) = view.get_token_whitespace_delimited();
        print_token(token, numbers);
        count += 1;
        view = rest.skip_comments_and_whitespace();
    }
    count
}

fn scan_delimited_lines(view: TextView<'_>, delimiter: u8, numbers: bool) -> usize {
    let mut count = 0;
    let mut view = view.skip_comments_and_whitespace();
    while !view.is_empty() {
        let (rest, line) = view.scan_for_end_of_line_with_skipped();
        debug!("line {line:?}");
        for field in line.split(delimiter) {
            print_token(field.strip(), numbers);
            count += 1;
        }
        view = rest.skip_comments_and_whitespace();
    }
    count
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let contents = match std::fs::read(&args.file) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Error: Unable to read file '{}': {}", args.file.display(), e);
            return ExitCode::FAILURE;
        }
    };
    info!("scanning {} bytes from {}", contents.len(), args.file.display());

    let view = TextView::new(&contents);
    let count = match args.delimiter {
        Some(delimiter) if delimiter.is_ascii() => {
            scan_delimited_lines(view, delimiter as u8, args.numbers)
        }
        Some(delimiter) => {
            eprintln!("Error: delimiter '{delimiter}' is not an ASCII character");
            return ExitCode::FAILURE;
        }
        None => scan_whitespace_tokens(view, args.numbers),
    };
    info!("{count} tokens");
    ExitCode::SUCCESS
}
