//! Detect command: weak phrase detection over a plain text file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use resume_lint_core::{Lexicon, detector};

use super::read_input_file;

/// Default location label for detections in free text.
pub const DEFAULT_LOCATION: &str = "Text";

/// Arguments for the `detect` subcommand.
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Text file to scan.
    pub file: Utf8PathBuf,

    /// Location label attached to each detection.
    #[arg(long, default_value = DEFAULT_LOCATION)]
    pub location: String,
}

/// Report weak phrases found in a text file.
#[instrument(name = "cmd_detect", skip_all, fields(file = %args.file))]
pub fn cmd_detect(
    args: DetectArgs,
    global_json: bool,
    lexicon: &Lexicon,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(location = %args.location, "executing detect command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let hits = detector::detect_with(lexicon, &content, &args.location);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else if hits.is_empty() {
        println!("{} no weak phrases in {}", "PASS:".green(), args.file);
    } else {
        println!("{} weak phrase(s) in {}", hits.len(), args.file.bold());
        for hit in &hits {
            println!("  \"{}\" -> {}", hit.phrase.yellow(), hit.suggestion);
        }
    }

    Ok(())
}
