// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use crate::analysis::build_report;
use crate::catalog::{DateFilter, JOB_CATEGORIES};
use crate::core::ConfigManager;
use crate::pipeline::{AnalysisRequest, SkillsWorkflow};
use crate::storage::{export_jobs_csv, open_store};
use crate::types::AnalysisRecord;
use crate::web::start_web_server;

#[derive(Parser)]
#[command(name = "skillsminer")]
#[command(about = "Mine in-demand skills from job postings for a role and location")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable AI skill enhancement even when OPENAI_API_KEY is set
    #[arg(long, global = true)]
    pub no_ai: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the search, filter, inference and save pipeline
    Analyze {
        #[arg(short, long, default_value = "AI ENGINEER")]
        category: String,
        #[arg(short, long, default_value = "Sri Lanka")]
        location: String,
        /// Today, "Last Week", "Last 2 Weeks", "Last 3 Weeks" or "Last Month"
        #[arg(short, long, default_value_t = DateFilter::LastWeek)]
        date_filter: DateFilter,
        /// Comma-separated keywords overriding the category's list
        #[arg(short, long, value_delimiter = ',')]
        keywords: Vec<String>,
    },
    /// List job categories and their search keywords
    Categories,
    /// List stored analyses, newest first
    List,
    /// Print the analytics of a stored analysis
    Show {
        name: String,
        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the jobs of a stored analysis as CSV
    Export {
        name: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Start the HTTP API
    Serve {
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

pub async fn handle_command(cli: Cli, config: ConfigManager) -> Result<()> {
    let use_ai = !cli.no_ai;

    match cli.command {
        Command::Analyze {
            category,
            location,
            date_filter,
            keywords,
        } => {
            config.ensure_directories().await?;
            let store = open_store(&config.environment).await?;
            let workflow = SkillsWorkflow::from_config(&config, store, use_ai)?;

            let mut request = AnalysisRequest::for_category(&category, &location, date_filter);
            if !keywords.is_empty() {
                request.search_keywords = keywords;
            }

            match workflow.run(request).await {
                Ok(outcome) => {
                    print_summary(&outcome.record);
                    for message in outcome.state.error_messages() {
                        println!("⚠️  {}", message);
                    }
                    println!("✅ Saved as {}", outcome.record_name);
                }
                Err(e) => {
                    error!("Analysis failed [{}]: {}", e.code(), e);
                    return Err(e.into());
                }
            }
        }

        Command::Categories => {
            for category in JOB_CATEGORIES {
                println!("{}", category.name);
                println!("   {}", category.description);
                println!("   Keywords: {}", category.keywords.join(", "));
            }
            let labels: Vec<&str> = DateFilter::ALL.iter().map(DateFilter::label).collect();
            println!("Date filters: {}", labels.join(", "));
        }

        Command::List => {
            let store = open_store(&config.environment).await?;
            let names = store.list().await?;
            if names.is_empty() {
                println!("No stored analyses");
            }
            for name in names {
                println!("{}", name);
            }
        }

        Command::Show { name, json } => {
            let store = open_store(&config.environment).await?;
            let record = store.load(&name).await?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&record).context("Failed to serialize record")?
                );
            } else {
                print_summary(&record);
                print_analytics(&record);
            }
        }

        Command::Export { name, output } => {
            let store = open_store(&config.environment).await?;
            let record = store.load(&name).await?;
            let path = output
                .unwrap_or_else(|| config.environment.data_path.join(format!("{}.csv", name)));

            export_jobs_csv(&path, &record.jobs_with_skills).await?;
            info!("Exported {} jobs to {}", record.jobs_with_skills.len(), path.display());
            println!("✅ Exported to {}", path.display());
        }

        Command::Serve { port } => {
            start_web_server(config, port, use_ai).await?;
        }
    }

    Ok(())
}

fn print_summary(record: &AnalysisRecord) {
    let stats = &record.location_filter_stats;
    println!(
        "📊 {} in {} ({})",
        record.job_category, record.location, record.date_filter
    );
    println!(
        "   Scraped {}, kept {} after location filter ({})",
        stats.total_scraped, stats.location_filtered, stats.filter_success_rate
    );
    println!(
        "   {} jobs, {} unique skills",
        record.summary.total_jobs, record.summary.total_skills
    );
}

fn print_analytics(record: &AnalysisRecord) {
    let report = build_report(record);

    println!("Top skills:");
    for entry in report.skill_frequencies.iter().take(15) {
        println!("   {:<28} {:>3}  {:>5.1}%", entry.skill, entry.frequency, entry.percentage);
    }

    println!("Skill categories:");
    for group in &report.skill_categories {
        println!("   {}: {}", group.category, group.skills.join(", "));
    }

    if !report.skill_combinations.is_empty() {
        println!("Common combinations:");
        for combination in report.skill_combinations.iter().take(10) {
            println!(
                "   {} + {}  ({} jobs, {:.1}%)",
                combination.skills[0],
                combination.skills[1],
                combination.frequency,
                combination.percentage
            );
        }
    }

    println!("Top companies:");
    for company in &report.companies.top_companies {
        println!("   {} ({})", company.name, company.count);
    }

    let coverage = &report.coverage;
    println!(
        "Coverage: {} jobs with skills ({:.1}%), {:.1} skills per job, {} companies",
        coverage.jobs_with_skills,
        coverage.analyzed_share,
        coverage.average_skills_per_job,
        coverage.unique_companies
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_arguments() {
        let cli = Cli::try_parse_from([
            "skillsminer",
            "analyze",
            "--category",
            "PYTHON DEVELOPER",
            "--date-filter",
            "Last 2 Weeks",
            "--keywords",
            "Django Developer,FastAPI Developer",
            "--no-ai",
        ])
        .unwrap();

        assert!(cli.no_ai);
        match cli.command {
            Command::Analyze {
                category,
                location,
                date_filter,
                keywords,
            } => {
                assert_eq!(category, "PYTHON DEVELOPER");
                assert_eq!(location, "Sri Lanka");
                assert_eq!(date_filter, DateFilter::Last2Weeks);
                assert_eq!(keywords, vec!["Django Developer", "FastAPI Developer"]);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["skillsminer", "serve"]).unwrap();
        assert!(!cli.no_ai);
        assert!(matches!(cli.command, Command::Serve { port: 8000 }));
    }

    #[test]
    fn test_rejects_unknown_date_filter() {
        assert!(Cli::try_parse_from(["skillsminer", "analyze", "-d", "yesterday"]).is_err());
    }
}
