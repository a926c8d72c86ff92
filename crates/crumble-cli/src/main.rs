//! # crumble-cli
//!
//! Command-line driver for the Crumble expression language.
//!
//! Runs a script file when a path is given, otherwise starts an
//! interactive prompt. Either way each input is scanned and parsed, and
//! the resulting expression tree is pretty-printed.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use crumble_syntax::{AstPrinter, Diagnostics, lexer, parser};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Front-end failures (lexical or syntax) in the input itself.
const EXIT_SYNTAX_ERROR: u8 = 65;
/// The script file could not be read at all.
const EXIT_UNREADABLE: u8 = 66;

#[derive(Parser)]
#[command(name = "crumble")]
#[command(about = "Crumble expression parser and tree printer", long_about = None)]
#[command(version)]
struct Cli {
    /// Script file to parse; starts an interactive prompt when omitted
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Print the scanned token stream instead of the expression tree
    #[arg(long)]
    tokens: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.script {
        Some(path) => run_file(&path, cli.tokens),
        None => run_prompt(cli.tokens),
    }
}

fn run_file(path: &Path, dump_tokens: bool) -> Result<ExitCode> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!(
                "{}",
                format!("Could not read {}: {}", path.display(), e).red()
            );
            return Ok(ExitCode::from(EXIT_UNREADABLE));
        }
    };

    let mut diagnostics = Diagnostics::new();
    run(&source, dump_tokens, &mut diagnostics);

    if diagnostics.had_error() {
        return Ok(ExitCode::from(EXIT_SYNTAX_ERROR));
    }
    Ok(ExitCode::SUCCESS)
}

/// Read-parse-print loop. Reports are shown per line and the sink is
/// reset afterwards, so one bad line never poisons the next.
fn run_prompt(dump_tokens: bool) -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut diagnostics = Diagnostics::new();

    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            // EOF (ctrl-D)
            break;
        }

        run(&line, dump_tokens, &mut diagnostics);
        diagnostics.clear();
    }

    Ok(ExitCode::SUCCESS)
}

fn run(source: &str, dump_tokens: bool, diagnostics: &mut Diagnostics) {
    let tokens = lexer::tokenize(source, diagnostics);

    if dump_tokens {
        if !report(diagnostics) {
            for token in &tokens {
                println!("{}", token);
            }
        }
        return;
    }

    let expr = parser::parse(tokens, diagnostics);
    if report(diagnostics) {
        return;
    }

    if let Some(expr) = expr {
        let rendered = AstPrinter::new().print(&expr);
        println!("{}", rendered.trim_end_matches('\n'));
    }
}

/// Prints every accumulated report to stderr. Returns whether there
/// was anything to print.
fn report(diagnostics: &Diagnostics) -> bool {
    for diagnostic in diagnostics.reports() {
        eprintln!("{}", diagnostic.to_string().red());
    }
    diagnostics.had_error()
}
