//! Parse a short story and render it as text, HTML and a tree dump.
//!
//! Run with: cargo run --example simple

use fictex::{parse_str, to_html, to_text};
use std::error::Error;

const STORY: &str = "\
It was a *dark* and /stormy/ night---the rain fell
in torrents.

<<A short interlude
The wind -- as winds do -- howled.

----

Nobody _noticed_ at all.
>>

Suddenly, a shot rang out.";

fn main() -> Result<(), Box<dyn Error>> {
    let doc = parse_str(STORY)?;

    println!("Tree:\n{}", doc);

    // Normalized markup, stable under re-parsing
    let text = to_text(&doc)?;
    println!("Text:{}", text);
    assert_eq!(parse_str(&text)?, doc);

    println!("HTML:\n{}", to_html(&doc)?);

    Ok(())
}
