//! contactbook Binary
//!
//! Runs the interactive contact menu on stdin/stdout.

use std::io;

use clap::Parser;
use contactbook::{Config, ContactBook, Shell};
use tracing_subscriber::{fmt, EnvFilter};

/// Contact Management System
#[derive(Parser, Debug)]
#[command(name = "contactbook")]
#[command(about = "In-memory contact directory with undo and batch search")]
#[command(version)]
struct Args {
    /// Maximum deletions kept for undo (unbounded if omitted)
    #[arg(short, long)]
    undo_limit: Option<usize>,

    /// Word that ends batch-search entry
    #[arg(short, long, default_value = "done")]
    sentinel: String,

    /// Prompt shown before each command
    #[arg(short, long, default_value = "Enter your choice: ")]
    prompt: String,

    /// Do not print the numbered menu before each prompt
    #[arg(long)]
    no_menu: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so the menu on stdout stays readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::info!("contactbook v{}", contactbook::VERSION);

    // Build config from args
    let mut builder = Config::builder()
        .batch_sentinel(&args.sentinel)
        .prompt(&args.prompt)
        .show_menu(!args.no_menu);
    if let Some(limit) = args.undo_limit {
        builder = builder.undo_limit(limit);
    }
    let config = builder.build();

    let book = match ContactBook::new(config) {
        Ok(book) => book,
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(book, stdin.lock(), io::stdout().lock());
    if let Err(e) = shell.run() {
        tracing::error!("Shell error: {}", e);
        std::process::exit(1);
    }

    tracing::info!(contacts = shell.book().len(), "session ended");
}
