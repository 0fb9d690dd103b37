//! Keywords command: industry keyword lists.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use resume_lint_core::keywords::{Industry, industry_keywords};

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug, Default)]
pub struct KeywordsArgs {
    /// Industry to list; omit for all industries.
    #[arg(value_enum)]
    pub industry: Option<Industry>,
}

#[derive(Debug, Serialize)]
struct KeywordSet {
    industry: Industry,
    keywords: &'static [&'static str],
}

/// Print keyword lists for one or every industry.
#[instrument(name = "cmd_keywords", skip_all)]
pub fn cmd_keywords(args: KeywordsArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(industry = ?args.industry, "executing keywords command");

    let sets: Vec<KeywordSet> = args
        .industry
        .map_or_else(|| Industry::ALL.to_vec(), |i| vec![i])
        .into_iter()
        .map(|industry| KeywordSet {
            industry,
            keywords: industry_keywords(industry),
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&sets)?);
    } else {
        for set in &sets {
            println!("{}: {}", set.industry.bold(), set.keywords.join(", "));
        }
    }

    Ok(())
}
