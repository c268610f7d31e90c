use clap::Parser;
use page_gauge::{Analyzer, AnalysisResponse};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut analyzer = Analyzer::new();

    if let Some(path) = &args.config {
        analyzer = match analyzer.with_config_file(path) {
            Ok(analyzer) => analyzer,
            Err(e) => {
                ::log::error!("Failed to load config from {}: {}", path.display(), e);
                std::process::exit(1);
            }
        };
    }
    if let Some(timeout) = args.timeout {
        analyzer = analyzer.with_timeout(timeout);
    }
    if let Some(max_body_bytes) = args.max_body_bytes {
        analyzer = analyzer.with_max_body_bytes(max_body_bytes);
    }

    ::log::info!("Analyzing {}", args.url);

    let response = match &args.file {
        Some(path) => analyze_local_file(&analyzer, &args.url, path),
        None => analyzer.analyze(&args.url).await,
    };

    let json = if args.compact {
        serde_json::to_string(&response)
    } else {
        serde_json::to_string_pretty(&response)
    };

    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            ::log::error!("Failed to serialize response: {}", e);
            std::process::exit(1);
        }
    }

    if !response.success {
        std::process::exit(1);
    }
}

/// Analyze markup read from disk against a nominal address
fn analyze_local_file(
    analyzer: &Analyzer,
    url: &str,
    path: &std::path::Path,
) -> AnalysisResponse {
    let html = match std::fs::read_to_string(path) {
        Ok(html) => html,
        Err(e) => {
            ::log::error!("Failed to read {}: {}", path.display(), e);
            return AnalysisResponse::failure(format!("could not read file: {}", path.display()));
        }
    };

    match analyzer.analyze_markup(url, &html) {
        Ok(analysis) => AnalysisResponse::ok(analysis),
        Err(e) => AnalysisResponse::failure(e.user_message()),
    }
}
