// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Read a staircase from stdin and print its number of square tilings.

use std::env;
use std::io;
use std::process;

use staircase_tilings::{count_tilings, Problem, SearchContext, SearchOptions};

struct Options {
    search: SearchOptions,
    stats: bool,
}

impl Options {
    fn parse<I, T>(args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut search = SearchOptions::default();
        let mut stats = false;

        for arg in args {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                process::exit(0);
            } else if arg == "--no-memo" {
                search.memoize = false;
            } else if arg == "--stats" {
                stats = true;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self { search, stats })
    }

    fn print_help() {
        println!(
            "\
Usage: tilings [options] < input

Input:  n m w0 w1 ... w(n-1)   row count, column count, row widths top to bottom

Options:
  --no-memo     Walk the whole search tree without memoization
  --stats       Print search statistics to stderr
  -h, --help    Print this help message

Set RUST_LOG=debug (or trace) for diagnostics on stderr."
        );
    }
}

fn main() {
    env_logger::init();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("tilings: {err}");
            Options::print_help();
            process::exit(2);
        }
    };

    let problem = match Problem::read_from(io::stdin().lock()) {
        Ok(problem) => problem,
        Err(err) => {
            eprintln!("tilings: {err}");
            process::exit(2);
        }
    };
    log::debug!(
        "read {} rows (declared {} columns)",
        problem.rows,
        problem.columns
    );

    let mut ctx = SearchContext::with_options(options.search);
    let count = count_tilings(&mut ctx, &problem.shape());
    println!("{count}");

    if options.stats {
        eprint!("{}", ctx.statistics);
    }
}
