use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

use pagetools_core::password::{self, Clipboard, PasswordSpec};

use crate::clipboard::SystemClipboard;
use crate::input;

/// Arguments for password generation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PasswordArgs {
    /// Number of characters (zero or less gives an empty password)
    #[arg(long, short = 'l', default_value = "12")]
    pub length: i64,

    /// Include digits 0-9
    #[arg(long)]
    pub numbers: bool,

    /// Include symbols !@#$%^&*()_+{}[]
    #[arg(long)]
    pub symbols: bool,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also copy the password to the system clipboard
    #[arg(long)]
    pub copy: bool,

    /// Path to JSON/YAML input file with password settings (overrides flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_password(args: PasswordArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let spec: PasswordSpec = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else {
        PasswordSpec::new(args.length, args.numbers, args.symbols)
    };

    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let result = password::generate_password(&spec, &mut rng)?;

    if args.copy {
        let mut clipboard = SystemClipboard::new();
        clipboard.write_text(&result.result.password);
        tracing::info!("password copied to clipboard");
    }

    Ok(serde_json::to_value(result)?)
}
