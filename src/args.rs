use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-gauge")]
#[command(about = "Scores a web page's structural SEO and AI-retrieval friendliness")]
#[command(version)]
pub struct Args {
    /// Address of the page to analyze (absolute http(s) URL)
    pub url: String,

    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fetch timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Ceiling on response body bytes read
    #[arg(long)]
    pub max_body_bytes: Option<usize>,

    /// Analyze a local HTML file instead of fetching the URL
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}
