//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use resume_lint_core::Resume;

pub mod analyze;
pub mod detect;
pub mod info;
pub mod keywords;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod verbs;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read and parse a résumé file.
///
/// `.yaml`/`.yml` files are parsed as YAML; everything else as JSON.
pub fn load_resume(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<Resume> {
    let content = read_input_file(path, max_bytes)?;
    parse_resume(&content, path.extension()).with_context(|| format!("failed to parse {path}"))
}

fn parse_resume(content: &str, extension: Option<&str>) -> anyhow::Result<Resume> {
    let resume = match extension {
        Some("yaml" | "yml") => serde_yaml::from_str(content)?,
        _ => serde_json::from_str(content)?,
    };
    Ok(resume)
}
