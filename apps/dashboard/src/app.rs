//! Interactive dashboard session.
//!
//! Flow: backend health check → job-requirement inputs → sequential uploads
//! with a progress bar → automatic filtering → view menu loop. All candidate
//! state lives in the in-memory session store and dies with the process.

use std::path::PathBuf;

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::candidate::Candidate;
use crate::cli::Cli;
use crate::client::ApiClient;
use crate::filter::{apply_filters, FilterCriteria};
use crate::render;
use crate::session::SessionStore;

const EXPERIENCE_LEVELS: &[&str] = &["Entry Level", "Junior", "Mid-Level", "Senior", "Expert"];

/// Job-requirement inputs collected at the start of a session.
#[derive(Debug, Clone)]
pub struct JobSpec {
    pub title: String,
    pub description: String,
    pub experience_level: String,
    pub key_skills: Vec<String>,
}

impl JobSpec {
    /// Composes the enhanced job description sent with every upload.
    pub fn enhanced_description(&self) -> String {
        format!(
            "Job Title: {}\nExperience Level: {}\nKey Skills: {}\n\nJob Description:\n{}",
            self.title,
            self.experience_level,
            self.key_skills.join(", "),
            self.description
        )
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let client = ApiClient::new(cli.backend_url.clone());

    println!("AI Hiring Agent dashboard");
    println!("Backend: {}\n", cli.backend_url);

    check_backend(&client).await;

    let job = prompt_job_spec()?;
    let mut criteria = FilterCriteria {
        min_score: cli.min_score,
        required_skills: prompt_required_skills(&job.key_skills, &[])?,
    };

    let mut store = SessionStore::new();

    if !cli.resumes.is_empty() {
        analyze_batch(&client, &mut store, &cli.resumes, &job, &criteria).await;
    }

    loop {
        println!();
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Dashboard")
            .items(&[
                "Qualified candidates",
                "All candidates",
                "Compare qualified candidates",
                "Candidate details",
                "Adjust filters",
                "Analyze more resumes",
                "Clear all candidates",
                "Quit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => show_qualified(&store),
            1 => show_all(&store)?,
            2 => show_comparison(&store),
            3 => show_details(&store, &criteria)?,
            4 => {
                adjust_filters(&mut criteria, &job)?;
                let qualified = apply_filters(store.candidates_mut(), &criteria);
                println!(
                    "Filtered candidates: {qualified} qualified out of {} total",
                    store.len()
                );
            }
            5 => {
                let paths = prompt_resume_paths()?;
                analyze_batch(&client, &mut store, &paths, &job, &criteria).await;
            }
            6 => {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt("Clear all evaluated candidates?")
                    .default(false)
                    .interact()?;
                if confirmed {
                    store.clear();
                    println!("All candidates cleared.");
                }
            }
            _ => break,
        }
    }

    Ok(())
}

/// Health check against the backend. Failures warn and continue: the session
/// still works for viewing already-analyzed candidates.
async fn check_backend(client: &ApiClient) {
    match client.health().await {
        Ok(info) => {
            if let Some(model) = &info.model_in_use {
                println!("Using model: {model}");
            }
            if let Some(version) = &info.api_version {
                println!("API version: {version}");
            }
            if info.api_key_configured {
                println!("Backend healthy ({}).", info.status);
            } else {
                println!(
                    "WARNING: backend is running but no Google API key is configured.\n\
                     Add GOOGLE_API_KEY to the backend's .env file before analyzing."
                );
            }
        }
        Err(e) => {
            println!(
                "WARNING: cannot reach the backend ({e}).\n\
                 Make sure the API server is running, then continue.\n\
                 Continuing with limited functionality."
            );
        }
    }
}

fn prompt_job_spec() -> Result<JobSpec> {
    let theme = ColorfulTheme::default();

    let title: String = Input::with_theme(&theme)
        .with_prompt("Job title")
        .default("Data Scientist".to_string())
        .interact_text()?;

    let description: String = Input::with_theme(&theme)
        .with_prompt("Job description")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Job description cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let level_index = Select::with_theme(&theme)
        .with_prompt("Required experience level")
        .items(EXPERIENCE_LEVELS)
        .default(2)
        .interact()?;

    let key_skills_raw: String = Input::with_theme(&theme)
        .with_prompt("Key skills (comma separated)")
        .default("Python, Data Analysis, Machine Learning".to_string())
        .interact_text()?;

    Ok(JobSpec {
        title,
        description,
        experience_level: EXPERIENCE_LEVELS[level_index].to_string(),
        key_skills: split_skills(&key_skills_raw),
    })
}

/// Multi-select over the key skills: checked skills become hard requirements.
fn prompt_required_skills(key_skills: &[String], current: &[String]) -> Result<Vec<String>> {
    if key_skills.is_empty() {
        return Ok(Vec::new());
    }

    let defaults: Vec<bool> = key_skills
        .iter()
        .map(|skill| current.contains(skill))
        .collect();

    let selected = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Required skills (candidates missing these are filtered out)")
        .items(key_skills)
        .defaults(&defaults)
        .interact()?;

    Ok(selected
        .into_iter()
        .map(|i| key_skills[i].clone())
        .collect())
}

fn prompt_resume_paths() -> Result<Vec<PathBuf>> {
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Resume PDF paths (space separated)")
        .allow_empty(true)
        .interact_text()?;

    Ok(raw.split_whitespace().map(PathBuf::from).collect())
}

fn adjust_filters(criteria: &mut FilterCriteria, job: &JobSpec) -> Result<()> {
    criteria.min_score = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Minimum score (0-100)")
        .default(criteria.min_score)
        .validate_with(|score: &u32| -> Result<(), &str> {
            if *score <= 100 {
                Ok(())
            } else {
                Err("Score must be between 0 and 100")
            }
        })
        .interact_text()?;

    criteria.required_skills = prompt_required_skills(&job.key_skills, &criteria.required_skills)?;
    Ok(())
}

/// Uploads each file sequentially, upserting successes into the store and
/// re-applying filters over the whole session afterwards.
async fn analyze_batch(
    client: &ApiClient,
    store: &mut SessionStore,
    paths: &[PathBuf],
    job: &JobSpec,
    criteria: &FilterCriteria,
) {
    if paths.is_empty() {
        return;
    }

    let job_description = job.enhanced_description();
    debug!(files = paths.len(), "Starting analysis batch");

    let bar = ProgressBar::new(paths.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut successes = 0usize;
    for path in paths {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        bar.set_message(format!("Analyzing {filename}"));

        match client.analyze(path, &job_description).await {
            Ok(analysis) => {
                store.upsert(Candidate::from_analysis(&filename, analysis));
                successes += 1;
            }
            Err(e) => bar.println(format!("Error analyzing {filename}: {e}")),
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    println!(
        "Successfully analyzed {successes} out of {} resume(s)",
        paths.len()
    );
    if successes == 0 {
        return;
    }

    let qualified = apply_filters(store.candidates_mut(), criteria);
    println!(
        "{qualified} of {} candidates meet the filtering criteria",
        store.len()
    );
    if qualified < store.len() {
        println!("{} candidates were filtered out", store.len() - qualified);
    }

    let top: Vec<&Candidate> = store.qualified().into_iter().take(3).collect();
    if !top.is_empty() {
        println!("\nTop candidates:");
        for candidate in top {
            render::print_candidate_card(candidate);
        }
    }
}

fn show_qualified(store: &SessionStore) {
    if store.is_empty() {
        println!("No candidates have been evaluated yet. Analyze resumes first.");
        return;
    }
    let qualified = store.qualified();
    if qualified.is_empty() {
        println!("No candidates meet the filtering criteria. Try adjusting the filters.");
        return;
    }
    println!("\nQualified candidates ({}):", qualified.len());
    for candidate in qualified {
        render::print_candidate_card(candidate);
    }
}

fn show_all(store: &SessionStore) -> Result<()> {
    if store.is_empty() {
        println!("No candidates have been evaluated yet. Analyze resumes first.");
        return Ok(());
    }
    let show_filtered = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Show filtered-out candidates?")
        .default(true)
        .interact()?;

    println!("\nAll candidates ({}):", store.len());
    render::print_candidate_table(&store.sorted_by_score(), show_filtered);
    Ok(())
}

fn show_comparison(store: &SessionStore) {
    let qualified = store.qualified();
    if qualified.len() < 2 {
        println!("At least 2 qualified candidates are needed for a comparison.");
        return;
    }
    println!("\nCandidate match scores:");
    render::print_comparison(&qualified);
}

fn show_details(store: &SessionStore, criteria: &FilterCriteria) -> Result<()> {
    if store.is_empty() {
        println!("No candidates have been evaluated yet. Analyze resumes first.");
        return Ok(());
    }

    // Qualified first, then filtered-out, each group by score descending
    let mut ordered = store.sorted_by_score();
    ordered.sort_by_key(|c| c.filtered_out);

    let labels: Vec<String> = ordered
        .iter()
        .map(|c| {
            if c.filtered_out {
                format!("{} ({}%) [filtered out]", c.name, c.score)
            } else {
                format!("{} ({}%)", c.name, c.score)
            }
        })
        .collect();

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a candidate")
        .items(&labels)
        .default(0)
        .interact()?;
    let candidate = ordered[index];

    render::print_candidate_detail(candidate, &criteria.required_skills);

    let show_full = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Show the full analysis text?")
        .default(false)
        .interact()?;
    if show_full {
        println!("\n{}\n", candidate.analysis);
    }
    Ok(())
}

fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
