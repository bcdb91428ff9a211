// src/storage/csv_export.rs
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::core::FsOps;
use crate::types::JobWithSkills;

const HEADER: [&str; 9] = [
    "title",
    "company",
    "location",
    "search_keyword",
    "source",
    "url",
    "skills",
    "skills_count",
    "skills_source",
];

/// Writes one row per job; skills are joined with `"; "`.
pub fn write_jobs_csv<W: Write>(writer: W, jobs: &[JobWithSkills]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for entry in jobs {
        let skills_count = entry.skills_count().to_string();
        let skills = entry.skills().join("; ");
        csv_writer
            .write_record([
                entry.job.title.as_str(),
                entry.job.company.as_str(),
                entry.job.location.as_str(),
                entry.job.search_keyword.as_str(),
                entry.job.source.as_str(),
                entry.job.url.as_deref().unwrap_or(""),
                skills.as_str(),
                skills_count.as_str(),
                entry.skills_source.as_str(),
            ])
            .with_context(|| format!("Failed to write CSV row for {}", entry.job.title))?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

pub async fn export_jobs_csv(path: &Path, jobs: &[JobWithSkills]) -> Result<()> {
    let mut buffer = Vec::new();
    write_jobs_csv(&mut buffer, jobs)?;
    let content = String::from_utf8(buffer).context("CSV output is not valid UTF-8")?;
    FsOps::write_file_safe(path, &content).await
}
