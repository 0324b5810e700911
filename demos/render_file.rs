//! Render a fictex file from the command line.
//!
//! Run with: cargo run --example render_file -- story.ftx [text|html|tree|json]
//!
//! An unterminated preview is reported on stderr, and whatever was parsed
//! before it is still rendered.

use fictex::{parse, render_to_writer, Config};
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process;

fn usage() -> ! {
    eprintln!("usage: render_file <path> [text|html|tree|json]");
    process::exit(2);
}

fn run(path: &str, mode: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let doc = match parse(file) {
        Ok(doc) => doc,
        Err(err) if err.error().is_unterminated() => {
            eprintln!("warning: {}: {}", path, err);
            err.into_partial()
        }
        Err(err) => return Err(err.into()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        "text" => render_to_writer(&mut out, &doc, &Config::text())?,
        "html" => render_to_writer(&mut out, &doc, &Config::html())?,
        "tree" => write!(out, "{}", doc)?,
        "json" => {
            serde_json::to_writer_pretty(&mut out, &doc)?;
            writeln!(out)?;
        }
        _ => usage(),
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let (path, mode) = match args.as_slice() {
        [path] => (path.as_str(), "html"),
        [path, mode] => (path.as_str(), mode.as_str()),
        _ => usage(),
    };

    if let Err(err) = run(path, mode) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
