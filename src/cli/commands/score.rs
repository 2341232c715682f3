//! Score Command
//!
//! Analyze existing text without generating anything. Text comes from the
//! argument or, when omitted, from stdin so the command composes with pipes.

use std::io::Read;

use crate::analysis::ContentAnalyzer;
use crate::cli::render;
use crate::types::{CopyError, Result};

pub fn run(text: Option<String>, platform: &str, json: bool) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if text.trim().is_empty() {
        return Err(CopyError::Validation(
            "no text to score; pass it as an argument or pipe it to stdin".to_string(),
        ));
    }

    let metrics = ContentAnalyzer::new().score(&text, &platform.to_lowercase());

    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        println!();
        render::print_metrics(&metrics);
    }

    Ok(())
}
