//! Verbs command: power verb suggestions.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use resume_lint_core::power_verbs::{self, VerbCategory};

/// Arguments for the `verbs` subcommand.
#[derive(Args, Debug, Default)]
pub struct VerbsArgs {
    /// Free-text context (e.g. "managed a team of five").
    pub context: Option<String>,

    /// List one category instead of classifying a context.
    #[arg(long, value_enum, conflicts_with = "context")]
    pub category: Option<VerbCategory>,
}

#[derive(Debug, Serialize)]
struct VerbGroup {
    category: VerbCategory,
    verbs: &'static [&'static str],
}

impl VerbGroup {
    const fn of(category: VerbCategory) -> Self {
        Self {
            category,
            verbs: power_verbs::verbs_for(category),
        }
    }
}

fn select(args: &VerbsArgs) -> Vec<VerbGroup> {
    match (args.category, args.context.as_deref()) {
        (Some(category), _) => vec![VerbGroup::of(category)],
        (None, Some(context)) => vec![VerbGroup::of(power_verbs::classify_context(context))],
        (None, None) => VerbCategory::ALL.into_iter().map(VerbGroup::of).collect(),
    }
}

/// Print power verbs for a context, a category, or the whole taxonomy.
#[instrument(name = "cmd_verbs", skip_all)]
pub fn cmd_verbs(args: VerbsArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(category = ?args.category, has_context = args.context.is_some(), "executing verbs command");

    let groups = select(&args);

    if global_json {
        if let [group] = groups.as_slice() {
            println!("{}", serde_json::to_string_pretty(group)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
    } else {
        for group in &groups {
            println!("{}: {}", group.category.bold(), group.verbs.join(", "));
        }
    }

    Ok(())
}
