//! Command-line interface for the ROT13 transform.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use rot13_core::rot13;

/// Built-in ROT13-encoded message, decoded when no text is given.
const ENCODED_MESSAGE: &str = "Pbatenghyngvbaf ba ohvyqvat n pbqr-rqvgvat ntrag!";

/// ROT13 CLI.
#[derive(Parser)]
#[command(
    name = "rot13",
    version,
    author,
    about = "Apply the ROT13 substitution cipher"
)]
struct Cli {
    /// Text to transform; the built-in message is decoded when omitted.
    text: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let input = cli.text.as_deref().unwrap_or(ENCODED_MESSAGE);
    println!("{}", rot13(input));
    Ok(())
}
