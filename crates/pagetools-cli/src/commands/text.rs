use clap::Args;
use serde_json::Value;

use pagetools_core::text_metrics::{self, TextInput};

use crate::input;

/// Arguments for the word/character counter
#[derive(Args)]
pub struct CountArgs {
    /// Text to count
    #[arg(long)]
    pub text: Option<String>,

    /// Path to JSON/YAML input file with a `text` field
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_count(args: CountArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let text_input: TextInput = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(text) = args.text {
        TextInput { text }
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--text, --input <file.json> or stdin required for counting".into());
    };
    let result = text_metrics::analyze_text(&text_input)?;
    Ok(serde_json::to_value(result)?)
}
