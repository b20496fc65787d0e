//!
//! Prints the lexemes of an ESON file, one per line.
//!

use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use eson::{Lexeme, LexOptions, Positioned, SourceFile};

#[derive(Parser, Debug)]
#[command(name = "esonlex", version, about = "Dump the lexemes of an ESON file")]
struct Cli {
    /// File to lex.
    file: PathBuf,

    /// Keep newlines and whitespace.
    #[arg(long)]
    source: bool,

    /// Keep comments.
    #[arg(long)]
    comments: bool,

    /// Collect every error instead of stopping at the first.
    #[arg(long)]
    collect: bool,
}

impl Cli {
    fn options(&self) -> LexOptions {
        let options = LexOptions::default()
            .with_source(self.source)
            .with_comments(self.comments);

        if self.collect {
            options.collecting()
        } else {
            options
        }
    }
}

fn payload(lexeme: &Lexeme) -> String {
    match lexeme {
        Lexeme::String(string) => match string.fence() {
            Some(fence) => format!("{fence} {:?}", string.content()),
            None => format!("{:?}", string.content()),
        },
        Lexeme::Comment(comment) => format!("{:?}", comment.inner()),
        Lexeme::Whitespace(whitespace) => format!("{:?}", whitespace.text()),
        _ => String::new(),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let file = SourceFile::read_from_file(&cli.file)
        .with_context(|| format!("Could not read {}", cli.file.display()))?;

    let lexemes = match file.lex(cli.options()) {
        Ok(lexemes) => lexemes,
        Err(error) => {
            eprintln!("{}:{error}", file.path());
            return Ok(ExitCode::FAILURE);
        }
    };

    for lexeme in lexemes.as_slice() {
        println!(
            "{:<8} {:<14} {}",
            lexeme.position().to_string(),
            lexeme.token().to_string(),
            payload(lexeme)
        );
    }

    for diagnostic in lexemes.diagnostics() {
        eprintln!("{}:{}", file.path(), diagnostic.message());
    }

    Ok(if lexemes.diagnostics().is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
