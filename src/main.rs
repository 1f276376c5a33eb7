//! Wish Oracle CLI
//!
//! Usage:
//!   wish-oracle --text "your text here"                  # Evaluate raw text
//!   wish-oracle --wish "learn piano" -p a -p b -p c -p d  # Full reading
//!   wish-oracle --keywords "learn piano"                 # Image keywords
//!   wish-oracle --interactive                            # One evaluation per line
//!   wish-oracle --serve                                  # HTTP API server
//!   wish-oracle --text "text" --json                     # JSON output

use std::io::{self, BufRead, Write};

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wish_oracle::core::{run_server, EvaluationPipeline, KeywordPicker, LexicalScorer};
use wish_oracle::types::{EvaluationResult, Reading, ReadingOutput};
use wish_oracle::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "wish-oracle",
    version = VERSION,
    about = "Wish Oracle - deterministic wish readings",
    long_about = "Wish Oracle turns a wish (and your interpretations of four images)\n\
                  into a reproducible probability, three themes, two pieces of advice\n\
                  and a short narrative. The same text always gives the same reading.\n\n\
                  Tiers:\n  \
                  STRONG   - probability >= 80\n  \
                  STEADY   - probability >= 60\n  \
                  WARMING  - probability >= 40\n  \
                  NUDGE    - below 40"
)]
struct Args {
    /// Text to evaluate as-is
    #[arg(short, long)]
    text: Option<String>,

    /// Wish for a full reading (needs four --interpretation values)
    #[arg(short, long)]
    wish: Option<String>,

    /// Interpretation of one image (repeat once per image)
    #[arg(short = 'p', long = "interpretation")]
    interpretations: Vec<String>,

    /// Print image keywords for a wish
    #[arg(short, long)]
    keywords: Option<String>,

    /// Interactive mode - evaluate each line from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show score breakdown and debug logs
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(io::stderr))
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    match Mode::select(&args) {
        Mode::Serve => run_serve(&args).await,
        Mode::Keywords(wish) => run_keywords(wish, &args),
        Mode::Interactive => run_interactive(&args),
        Mode::Reading(wish) => run_reading(wish, &args),
        Mode::Single(text) => run_single(text, &args),
    }
}

/// Which mode a set of flags selects
#[derive(Debug, PartialEq, Eq)]
enum Mode<'a> {
    Serve,
    Keywords(&'a str),
    Interactive,
    Reading(&'a str),
    Single(&'a str),
}

impl<'a> Mode<'a> {
    fn select(args: &'a Args) -> Self {
        if args.serve {
            Mode::Serve
        } else if let Some(ref wish) = args.keywords {
            Mode::Keywords(wish)
        } else if args.interactive {
            Mode::Interactive
        } else if let Some(ref wish) = args.wish {
            Mode::Reading(wish)
        } else if let Some(ref text) = args.text {
            Mode::Single(text)
        } else {
            // Default to interactive if no mode specified
            Mode::Interactive
        }
    }
}

/// Evaluate raw text
fn run_single(text: &str, args: &Args) {
    let result = EvaluationPipeline::new().evaluate(text);
    print_result(text, result, args);
}

/// Validate and evaluate a wish with its interpretations
fn run_reading(wish: &str, args: &Args) {
    let reading = match Reading::new(wish, args.interpretations.as_slice()) {
        Ok(reading) => reading,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            std::process::exit(1);
        }
    };

    let result = EvaluationPipeline::new().evaluate_reading(&reading);
    print_result(&reading.combined_text(), result, args);
}

/// Print image keywords
fn run_keywords(wish: &str, args: &Args) {
    let picker = KeywordPicker::new();
    let keywords = picker.image_keywords(wish);

    if args.json {
        print_json(&keywords, true);
    } else {
        for (index, keyword) in keywords.iter().enumerate() {
            println!("image {}: {}", index + 1, keyword.cyan());
        }
    }
}

/// Evaluate each line from stdin
fn run_interactive(args: &Args) {
    let pipeline = EvaluationPipeline::new();

    print_header("Interactive", args.no_color);
    println!("Type a wish and press Enter for a reading. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut count = 0u64;

    loop {
        print!("> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Readings: {}", count);
            break;
        }
        if line.is_empty() {
            continue;
        }

        count += 1;
        let result = pipeline.evaluate(line);
        if args.json {
            print_json(&ReadingOutput::new(result), false);
        } else {
            print_result(line, result, args);
        }
    }
}

/// Print a result in the selected format
fn print_result(text: &str, result: EvaluationResult, args: &Args) {
    if args.json {
        print_json(&ReadingOutput::new(result), true);
        return;
    }

    if args.no_color {
        println!("{}", result.to_parseable_string());
    } else {
        println!("{}", result.to_terminal_string());
    }

    if args.verbose {
        print_breakdown(text, &result);
    }

    println!();
    println!("{}", result.narrative);
    println!();
    for tip in &result.advice {
        println!("  • {}", tip);
    }
}

/// Print the score breakdown behind a result
fn print_breakdown(text: &str, result: &EvaluationResult) {
    let breakdown = LexicalScorer::new().breakdown(text);
    println!("{}", "┌─────────────────────────────────────┐".dimmed());
    println!("│ positive matches:  {} (w=6, cap 36)", breakdown.positive_matches);
    println!("│ negative matches:  {} (w=7, cap 28)", breakdown.negative_matches);
    println!("│ schedule matches:  {} (w=7, cap 21)", breakdown.schedule_matches);
    println!("├─────────────────────────────────────┤");
    println!("│ text score:   {:>3} / 60", result.components.text_score);
    println!("│ random score: {:>3} / 40", result.components.random_score);
    println!("│ digest:       {}", &result.digest()[..16]);
    println!("{}", "└─────────────────────────────────────┘".dimmed());
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match encoded {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("JSON encoding failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print header
fn print_header(mode: &str, no_color: bool) {
    let title = format!("  Wish Oracle v{} - {}", VERSION, mode);
    println!("========================================");
    if no_color {
        println!("{}", title);
    } else {
        println!("{}", title.bold());
    }
    println!("========================================");
    println!();
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    print_header("API Server", args.no_color);

    if let Err(e) = run_server(&args.addr).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
