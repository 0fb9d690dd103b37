//! Analyze command: full content analysis of one or more résumé files.

use anyhow::bail;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use resume_lint_core::config::Config;
use resume_lint_core::{Lexicon, ResumeContentIntelligence, analysis};

use super::load_resume;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Résumé files to analyze (JSON, or YAML for `.yaml`/`.yml`).
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Minimum acceptable ATS score (0–100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_ats: Option<u8>,

    /// Minimum acceptable readability score (0–100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_readability: Option<u8>,

    /// Minimum acceptable impact score (0–100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_impact: Option<u8>,
}

/// Score thresholds a report must meet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreGates {
    /// Minimum ATS score.
    pub ats: Option<u8>,
    /// Minimum readability score.
    pub readability: Option<u8>,
    /// Minimum impact score.
    pub impact: Option<u8>,
}

impl ScoreGates {
    /// Combine CLI flags with configured gates; flags win.
    pub fn resolve(args: &AnalyzeArgs, config: &Config) -> Self {
        Self {
            ats: args.min_ats.or(config.min_ats_score),
            readability: args.min_readability.or(config.min_readability_score),
            impact: args.min_impact.or(config.min_impact_score),
        }
    }

    /// Describe every gate the report falls short of.
    pub fn failures(&self, report: &ResumeContentIntelligence) -> Vec<String> {
        [
            ("ATS", self.ats, report.ats_score),
            ("readability", self.readability, report.readability_score),
            ("impact", self.impact, report.impact_score),
        ]
        .into_iter()
        .filter_map(|(name, min, score)| {
            min.filter(|&m| score < m)
                .map(|m| format!("{name} score {score} is below minimum {m}"))
        })
        .collect()
    }
}

#[derive(Serialize)]
struct FileReport<'a> {
    file: &'a Utf8Path,
    #[serde(flatten)]
    report: &'a ResumeContentIntelligence,
}

/// Analyze résumé files and enforce score gates.
///
/// With `--json`, a single file prints its report object; several files
/// print an array of reports, each tagged with its `file`.
#[instrument(name = "cmd_analyze", skip_all, fields(files = args.files.len()))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    lexicon: &Lexicon,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let gates = ScoreGates::resolve(&args, config);
    debug!(?gates, "executing analyze command");

    let progress = if args.files.len() > 1 && !global_json {
        let bar = ProgressBar::new(args.files.len() as u64);
        bar.set_style(ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")?);
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut reports = Vec::with_capacity(args.files.len());
    for file in &args.files {
        progress.set_message(file.to_string());
        let resume = load_resume(file, max_input_bytes)?;
        reports.push(analysis::analyze_resume_content_with(lexicon, &resume));
        progress.inc(1);
    }
    progress.finish_and_clear();

    if global_json {
        if let [report] = reports.as_slice() {
            println!("{}", serde_json::to_string_pretty(report)?);
        } else {
            let tagged: Vec<_> = args
                .files
                .iter()
                .zip(&reports)
                .map(|(file, report)| FileReport { file, report })
                .collect();
            println!("{}", serde_json::to_string_pretty(&tagged)?);
        }
    } else {
        for (file, report) in args.files.iter().zip(&reports) {
            print_report(file, report);
        }
    }

    let failures: Vec<String> = args
        .files
        .iter()
        .zip(&reports)
        .flat_map(|(file, report)| {
            gates
                .failures(report)
                .into_iter()
                .map(move |f| format!("{file}: {f}"))
        })
        .collect();

    if !failures.is_empty() {
        bail!(
            "{} quality gate(s) failed:\n  {}",
            failures.len(),
            failures.join("\n  ")
        );
    }

    if !global_json && gates != ScoreGates::default() {
        println!("{} all score gates met", "PASS:".green());
    }

    Ok(())
}

fn print_report(file: &Utf8Path, report: &ResumeContentIntelligence) {
    println!("{}", file.bold());
    println!("  {} {}/100", "ATS:".cyan(), colored_score(report.ats_score));
    println!(
        "  {} {}/100",
        "Readability:".cyan(),
        colored_score(report.readability_score)
    );
    println!("  {} {}/100", "Impact:".cyan(), colored_score(report.impact_score));

    if !report.weak_phrases.is_empty() {
        println!(
            "\n  {} {}",
            "Weak phrases:".yellow(),
            report.weak_phrases.len()
        );
        for hit in &report.weak_phrases {
            println!(
                "    {} \"{}\" -> {}",
                format!("[{}]", hit.location).dimmed(),
                hit.phrase,
                hit.suggestion
            );
        }
    }

    if !report.suggestions.is_empty() {
        println!("\n  {}", "Suggestions:".cyan());
        for s in &report.suggestions {
            println!(
                "    {} {}: {}",
                format!("[{}]", s.kind.as_str()).yellow(),
                s.section,
                s.message
            );
        }
    }
    println!();
}

fn colored_score(score: u8) -> String {
    if score >= 70 {
        score.green().to_string()
    } else if score >= 40 {
        score.yellow().to_string()
    } else {
        score.red().to_string()
    }
}
