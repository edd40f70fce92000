use std::path::{Path, PathBuf};

use anyhow::Result;
use tera::{Context, Tera};

use crate::models::HostTopology;
use crate::utils::host_report_filename;

static REPORT_TEMPLATE: &str = include_str!("report.html");

/// Timestamp embedded in the report header. The only part of the document
/// that changes between runs against an unchanged environment.
pub fn generation_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Render the per-host HTML document
pub fn render_report(topology: &HostTopology, source: &str, generated_at: &str) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template("host_report", REPORT_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Invalid report template: {}", e))?;

    let mut context = Context::new();
    context.insert("host", topology);
    context.insert("source", source);
    context.insert("generated_at", generated_at);
    context.insert("tool_version", env!("CARGO_PKG_VERSION"));

    tera.render("host_report", &context)
        .map_err(|e| anyhow::anyhow!("Report rendering failed: {}", e))
}

/// Write a rendered report into the output directory, creating it if needed
pub async fn write_report(output_dir: &str, host_name: &str, html: &str) -> Result<PathBuf> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", output_dir, e))?;

    let path = Path::new(output_dir).join(host_report_filename(host_name));
    tokio::fs::write(&path, html)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;

    Ok(path)
}
