//! Rendering one tree with custom configurations.
//!
//! Run with: cargo run --example custom_config

use fictex::{parse_str, render_to_string, Config, Escape};
use std::borrow::Cow;
use std::error::Error;

fn shout(text: &[u8]) -> Cow<'_, [u8]> {
    Cow::Owned(text.to_ascii_uppercase())
}

fn main() -> Result<(), Box<dyn Error>> {
    let doc = parse_str("He said *no* -- /twice/ over.\n\n<<Later\nShe _left_ early.\n>>")?;

    // Markdown-ish output
    println!("Markdown:");
    let markdown = Config::text()
        .with_bold("**", "**")
        .with_slant("_", "_")
        .with_underline("", "")
        .with_paragraph("", "\n\n")
        .with_preview("> **{caption}**\n>\n", "")
        .with_ndash("\u{2013}");
    println!("{}", render_to_string(&doc, &markdown)?);

    // HTML with <details> folds
    println!("HTML details:");
    let details = Config::html()
        .with_preview("<details>\n<summary>{caption}</summary>\n", "</details>\n")
        .with_ndash("&ndash;");
    println!("{}", render_to_string(&doc, &details)?);

    // A custom escape hook
    println!("Shouting:");
    let loud = Config::text().with_escape(Escape::Custom(shout));
    println!("{}", render_to_string(&doc, &loud)?);

    // Configs are plain serde values
    println!("Config as JSON:");
    println!("{}", serde_json::to_string_pretty(&Config::html())?);

    Ok(())
}
