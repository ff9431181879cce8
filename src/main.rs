//! `tally` command line driver
//!
//! Usage: tally "10 - 11 + 2", or pipe expressions one per line on stdin.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tally::{parse, tokenize_with, LexerConfig, Token};
use tracing_subscriber::EnvFilter;

/// tally evaluates integer `+`/`-` expressions strictly left to right.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Skip unrecognized characters instead of rejecting them.
    #[arg(long)]
    lenient: bool,

    /// Load the lexer configuration from a JSON file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the token sequence.
    #[arg(long)]
    tokens: bool,

    /// Print the operand tree.
    #[arg(long)]
    tree: bool,

    /// Print one JSON object per expression.
    #[arg(long)]
    json: bool,

    /// Log debug events to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Expression to evaluate. Reads stdin line by line when omitted.
    expression: Option<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    expression: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<Vec<Token>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = load_config(&args)?;
    tracing::debug!(?config, "lexer configuration");

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let ok = match &args.expression {
        Some(expression) => run(&args, &config, expression, &mut out, &mut err)?,
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            repl(&args, &config, stdin.lock(), interactive, &mut out, &mut err)?
        }
    };

    out.flush()?;
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tally=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads `--config` if given; `--lenient` always wins over the file.
fn load_config(args: &Args) -> anyhow::Result<LexerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            LexerConfig::from_json(&source)
                .with_context(|| format!("invalid config file '{}'", path.display()))?
        }
        None => LexerConfig::default(),
    };

    if args.lenient {
        config = LexerConfig::lenient();
    }
    Ok(config)
}

/// Evaluates one expression per input line until EOF, `exit` or `quit`.
/// Returns whether every expression evaluated successfully.
fn repl(
    args: &Args,
    config: &LexerConfig,
    mut input: impl BufRead,
    interactive: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<bool> {
    let mut all_ok = true;

    loop {
        if interactive {
            write!(out, "tally> ")?;
            out.flush()?;
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            "exit" | "quit" => break,
            expression => all_ok &= run(args, config, expression, out, err)?,
        }
    }

    Ok(all_ok)
}

/// Evaluates one expression and prints the outcome. Returns whether it
/// evaluated successfully.
fn run(
    args: &Args,
    config: &LexerConfig,
    expression: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<bool> {
    let mut report = Report {
        expression,
        tokens: None,
        tree: None,
        value: None,
        error: None,
    };

    // Tokens and tree are reported as far as the pipeline got
    let outcome = tokenize_with(expression, config).and_then(|tokens| {
        if args.tokens {
            report.tokens = Some(tokens.clone());
        }
        let tree = parse(&tokens)?;
        if args.tree {
            report.tree = Some(tree.to_string());
        }
        tree.value()
    });

    let ok = match outcome {
        Ok(value) => {
            report.value = Some(value);
            true
        }
        Err(e) => {
            tracing::debug!(category = ?e.category(), "evaluation failed");
            report.error = Some(e.to_string());
            false
        }
    };

    if args.json {
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    } else {
        print_text(&report, out, err)?;
    }

    Ok(ok)
}

fn print_text(report: &Report, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    if let Some(tokens) = &report.tokens {
        let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        writeln!(out, "Tokens: [{}]", rendered.join(", "))?;
    }
    if let Some(tree) = &report.tree {
        writeln!(out, "Tree: {}", tree)?;
    }

    match (report.value, &report.error) {
        (Some(value), _) => writeln!(out, "Result of {} is {}", report.expression, value),
        (None, Some(error)) => writeln!(err, "Error in {}: {}", report.expression, error),
        (None, None) => Ok(()),
    }
}
