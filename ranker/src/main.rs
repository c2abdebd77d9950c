use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use core::{RankedResult, SplitRule};
use ranker::{format_result, resolve_stemmer, Session};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "ranker")]
#[command(about = "Rank an XML document corpus against free-text queries", long_about = None)]
struct Cli {
    /// Directory containing the raw XML documents
    #[arg(long)]
    docs: PathBuf,
    /// Comma-separated stop-word file
    #[arg(long, default_value = "./stopwords.txt")]
    stopwords: PathBuf,
    /// Stemmer algorithm (english or porter)
    #[arg(long, default_value = "english")]
    stemmer: String,
    /// Classify by a fixed score threshold instead of the top fraction
    #[arg(long)]
    threshold: Option<f64>,
    /// Percentage of the ranked documents classified positive
    #[arg(long, default_value_t = 20.0)]
    percent: f64,
    /// Number of terms in a derived optimal query
    #[arg(long, default_value_t = 5)]
    query_terms: usize,
    /// Emit results as JSON instead of the table
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let split = match cli.threshold {
        Some(threshold) => SplitRule::Threshold(threshold),
        None => SplitRule::TopFraction(cli.percent / 100.0),
    };
    let stemmer = resolve_stemmer(&cli.stemmer)?;
    let session = Session::open(&cli.docs, &cli.stopwords, stemmer, split)?;
    tracing::info!(docs = %cli.docs.display(), "session ready");

    println!("{}", session.corpus_info());
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        match command {
            "query" | "q" => {
                if rest.is_empty() {
                    println!("usage: query <text>");
                    continue;
                }
                match session.query(rest) {
                    Ok(result) => print_result(&result, cli.json),
                    Err(err) => eprintln!("query failed: {err:#}"),
                }
            }
            "optimal" | "o" => match session.optimal_query(cli.query_terms) {
                Ok(terms) => {
                    println!("optimal query: {}", terms.join(" "));
                    match session.query_terms(&terms) {
                        Ok(result) => print_result(&result, cli.json),
                        Err(err) => eprintln!("query failed: {err:#}"),
                    }
                }
                Err(err) => eprintln!("optimal query failed: {err:#}"),
            },
            "info" => {
                if rest.is_empty() {
                    println!("{}", session.corpus_info());
                    for doc in session.corpus().documents() {
                        println!("\t{}", doc.doc_id());
                    }
                } else {
                    match session.document_info(rest) {
                        Ok(info) => println!("{info}"),
                        Err(err) => eprintln!("{err:#}"),
                    }
                }
            }
            "help" => print_help(),
            "exit" | "quit" => break,
            other => println!("unknown command: {other} (try 'help')"),
        }
    }
    Ok(())
}

fn print_result(result: &RankedResult, json: bool) {
    if json {
        match serde_json::to_string_pretty(result) {
            Ok(out) => println!("{out}"),
            Err(err) => eprintln!("serializing result: {err}"),
        }
    } else {
        print!("{}", format_result(result));
    }
}

fn print_help() {
    println!("commands:");
    println!("  query <text>   rank the corpus against a free-text query");
    println!("  optimal        derive the optimal query and rank with it");
    println!("  info [doc_id]  corpus summary, or a single document's stats");
    println!("  help           show this message");
    println!("  exit           quit");
}
