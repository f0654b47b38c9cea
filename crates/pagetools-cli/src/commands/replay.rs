use clap::Args;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};

use pagetools_core::charts::RecordingBackend;
use pagetools_core::page::{DomUpdate, Page, PageEvent, PageOptions};
use pagetools_core::password::{Clipboard, MemoryClipboard};

use crate::clipboard::SystemClipboard;
use crate::input;

/// Arguments for replaying a recorded page event script
#[derive(Args)]
pub struct ReplayArgs {
    /// Path to JSON/YAML file holding a list of events
    #[arg(long)]
    pub input: Option<String>,

    /// Seed for the password generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write copied passwords to the system clipboard instead of memory
    #[arg(long)]
    pub system_clipboard: bool,
}

/// One scripted event, `at_ms` after the page loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayStep {
    #[serde(default)]
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: PageEvent,
}

#[derive(Debug, Serialize)]
struct StepOutput {
    at_ms: u64,
    event: PageEvent,
    updates: Vec<DomUpdate>,
}

#[derive(Debug, Serialize)]
struct ReplayOutput {
    initial: Vec<DomUpdate>,
    steps: Vec<StepOutput>,
    clipboard_writes: usize,
    live_charts: usize,
}

pub fn run_replay(args: ReplayArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let steps: Vec<ReplayStep> = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <events.json> or stdin required for replay".into());
    };

    let clipboard: Box<dyn Clipboard> = if args.system_clipboard {
        Box::new(SystemClipboard::new())
    } else {
        Box::new(MemoryClipboard::default())
    };
    let options = PageOptions {
        seed: args.seed,
        ..PageOptions::default()
    };
    let output = replay(&steps, clipboard, options);
    Ok(serde_json::to_value(output)?)
}

fn replay(steps: &[ReplayStep], clipboard: Box<dyn Clipboard>, options: PageOptions) -> ReplayOutput {
    let (mut page, initial) = Page::init(clipboard, RecordingBackend::new(), options);
    let loaded_at = Instant::now();

    let mut clipboard_writes = 0;
    let mut outputs = Vec::with_capacity(steps.len());
    for step in steps {
        if matches!(step.event, PageEvent::CopyPassword) {
            clipboard_writes += 1;
        }
        let now = loaded_at + Duration::from_millis(step.at_ms);
        let updates = page.dispatch(&step.event, now);
        outputs.push(StepOutput {
            at_ms: step.at_ms,
            event: step.event.clone(),
            updates,
        });
    }

    ReplayOutput {
        initial,
        steps: outputs,
        clipboard_writes,
        live_charts: page.mortgage().backend().live_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_script() {
        let script = r#"[
            {"event": "text_input", "text": "hello page"},
            {"event": "generate_password", "length": "10", "include_numbers": true},
            {"event": "copy_password", "at_ms": 100},
            {"event": "tick", "at_ms": 1700},
            {"event": "calculate_mortgage", "at_ms": 2000,
             "form": {"principal": "200000", "interest": "5", "years": "30"}},
            {"event": "calculate_mortgage", "at_ms": 2500,
             "form": {"principal": "150000", "interest": "4", "years": "15"}}
        ]"#;
        let steps: Vec<ReplayStep> = serde_json::from_str(script).unwrap();
        let out = replay(
            &steps,
            Box::new(MemoryClipboard::default()),
            PageOptions {
                seed: Some(3),
                ..PageOptions::default()
            },
        );

        assert_eq!(out.initial.len(), 1);
        assert_eq!(out.steps.len(), 6);
        assert_eq!(out.steps[0].updates[0], DomUpdate::text("wordCount", "2"));
        assert_eq!(out.steps[2].updates, vec![DomUpdate::text("copyBtn", "Copied ✓")]);
        assert_eq!(out.steps[3].updates, vec![DomUpdate::text("copyBtn", "Copy")]);
        assert_eq!(out.clipboard_writes, 1);
        assert_eq!(out.live_charts, 2);
    }
}
