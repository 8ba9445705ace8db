//! complete - prefix completion over a word list.
//!
//! Builds a compressed trie from a word list file and prints the completion list for each prefix
//! given on the command line, or for each line read from stdin.

extern crate clap;
extern crate completion_trie;
#[macro_use]
extern crate log;
extern crate simplelog;

use clap::{ArgAction, Parser};
use completion_trie::{words, Result, Trie};
use simplelog::{Config, LevelFilter, SimpleLogger};
use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "complete")]
#[command(about = "Prefix completion over a word list")]
#[command(version)]
struct Cli {
    /// Path to the word list: a word count followed by one word per line
    words: PathBuf,

    /// Print the structure of the trie after building it
    #[arg(short, long)]
    print: bool,

    /// Prefix to complete (repeatable, case-insensitive); prefixes are read from stdin when absent
    #[arg(short = 'q', long = "prefix")]
    prefixes: Vec<String>,

    /// Number of trie nodes allocated per arena chunk
    #[arg(long, default_value = "1024")]
    chunk_size: NonZeroUsize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn print_completions<S>(out: &mut dyn Write, trie: &Trie<S>, prefix: &str) -> io::Result<()>
where
    S: AsRef<str>,
{
    match trie.complete(prefix) {
        Some(leaves) => {
            let words: Vec<&str> = leaves.iter().map(|leaf| leaf.word()).collect();
            writeln!(out, "{}: {}", prefix, words.join(", "))
        },
        None => writeln!(out, "{}: no match", prefix),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let word_list = words::load(&cli.words)?;
    info!("loaded {} words from {}", word_list.len(), cli.words.display());
    let trie = Trie::with_chunk_size(&word_list, cli.chunk_size.get());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.print {
        writeln!(out, "TRIE\n")?;
        write!(out, "{}", trie.dump())?;
    }

    if !cli.prefixes.is_empty() {
        for prefix in &cli.prefixes {
            print_completions(&mut out, &trie, &words::normalize(prefix))?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let prefix = words::normalize(&line);
        if prefix == "quit" {
            break;
        }
        print_completions(&mut out, &trie, &prefix)?;
        out.flush()?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = SimpleLogger::init(level_filter(cli.verbose), Config::default()) {
        eprintln!("complete: could not initialize logger: {}", err);
    }

    if let Err(err) = run(&cli) {
        eprintln!("complete: {}", err);
        process::exit(1);
    }
}
