use std::path::PathBuf;

use clap::Parser;

/// Terminal dashboard for the hiring agent API: upload resume PDFs, score
/// them against a job description, and filter candidates.
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about)]
pub struct Cli {
    /// Base URL of the analysis API.
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    pub backend_url: String,

    /// Minimum score a candidate needs to qualify.
    #[arg(long, default_value_t = 50)]
    pub min_score: u32,

    /// Resume PDFs to analyze on startup. More can be added interactively.
    pub resumes: Vec<PathBuf>,
}
