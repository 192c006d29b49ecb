//! NEO Impact - command-line front end
//!
//! Reads a saved catalog feed, lists the closest objects and prints impact
//! assessments as JSON.
//!
//! Usage: `neo-impact <feed.json> [object-id] [--config engine.json]`

use std::process::ExitCode;

use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

use neo_impact::catalog::{CachedCatalog, CatalogEntry, FeedQuery, StaticCatalog};
use neo_impact::selection::Selection;
use neo_impact::{CatalogConfig, EngineConfig, ImpactAssessment, ImpactError};

const USAGE: &str = "usage: neo-impact <feed.json> [object-id] [--config engine.json]";

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Impact(#[from] ImpactError),

    #[error("could not write output: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
struct CliArgs {
    feed_path: String,
    object_id: Option<String>,
    config_path: Option<String>,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, CliError> {
        let mut parsed = CliArgs::default();
        let mut positional = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--config needs a path".to_string()))?;
                    parsed.config_path = Some(path);
                }
                "-h" | "--help" => return Err(CliError::Usage("help requested".to_string())),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        parsed.feed_path = positional
            .next()
            .ok_or_else(|| CliError::Usage("missing feed path".to_string()))?;
        parsed.object_id = positional.next();
        if let Some(extra) = positional.next() {
            return Err(CliError::Usage(format!("unexpected argument {extra:?}")));
        }
        Ok(parsed)
    }
}

/// One candidate with its assessment, for the listing output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CandidateReport<'a> {
    entry: &'a CatalogEntry,
    assessment: ImpactAssessment,
}

fn load_engine_config(path: Option<&str>) -> Result<EngineConfig, CliError> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(ImpactError::from)?;
            Ok(EngineConfig::from_json(&text)?)
        }
        None => Ok(EngineConfig::default()),
    }
}

fn run(args: CliArgs) -> Result<(), CliError> {
    let engine = load_engine_config(args.config_path.as_deref())?;
    let source = StaticCatalog::from_file(&args.feed_path)?;
    let mut catalog = CachedCatalog::new(source, CatalogConfig::from_env());
    let mut selection = Selection::new(catalog.candidates(&FeedQuery::Today)?);

    match args.object_id {
        Some(id) => {
            selection.select(&id)?;
            let assessment = selection.simulate_impact(&engine)?;
            println!("{}", serde_json::to_string_pretty(assessment)?);
        }
        None => {
            let mut reports = Vec::with_capacity(selection.candidates().len());
            for entry in selection.candidates() {
                let assessment = entry.assess(&engine)?;
                reports.push(CandidateReport { entry, assessment });
            }
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let result = CliArgs::parse(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(message)) => {
            eprintln!("{message}\n{USAGE}");
            ExitCode::from(2)
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_feed_only() {
        let parsed = CliArgs::parse(args(&["feed.json"])).expect("valid args");
        assert_eq!(parsed.feed_path, "feed.json");
        assert!(parsed.object_id.is_none());
    }

    #[test]
    fn test_parse_with_id_and_config() {
        let parsed = CliArgs::parse(args(&["--config", "engine.json", "feed.json", "3542519"]))
            .expect("valid args");
        assert_eq!(parsed.config_path.as_deref(), Some("engine.json"));
        assert_eq!(parsed.object_id.as_deref(), Some("3542519"));
    }

    #[test]
    fn test_parse_rejects_missing_feed() {
        assert!(matches!(CliArgs::parse(args(&[])), Err(CliError::Usage(_))));
        assert!(matches!(
            CliArgs::parse(args(&["feed.json", "--config"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            CliArgs::parse(args(&["a", "b", "c"])),
            Err(CliError::Usage(_))
        ));
    }
}
