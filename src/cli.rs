mod analyze;
mod api;
mod generate;
mod heartbeat;
mod report;
mod watch;

use clap::{Parser, Subcommand};

use crate::cli::{
    analyze::AnalyzeArgs,
    generate::GenerateArgs,
    report::ReportArgs,
    watch::WatchArgs,
};

#[derive(Parser)]
#[command(version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the readings once and show the dashboard.
    #[clap(name = "report")]
    Report(Box<ReportArgs>),

    /// Keep polling the API and show the dashboard for every fetched snapshot.
    #[clap(name = "watch")]
    Watch(Box<WatchArgs>),

    /// Show the dashboard for readings stored in a JSON file.
    #[clap(name = "analyze")]
    Analyze(Box<AnalyzeArgs>),

    /// Generate random readings in the API format.
    #[clap(name = "generate")]
    Generate(Box<GenerateArgs>),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let args = Args::try_parse_from([
            "energy-dashboard",
            "generate",
            "-n",
            "10",
            "--seed",
            "42",
            "--start",
            "2025-09-12T08:00:00Z",
            "--interval",
            "30s",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::Generate(_)));
    }

    #[test]
    fn test_parse_watch_interval() {
        let args = Args::try_parse_from([
            "energy-dashboard",
            "watch",
            "--api-base-url",
            "http://localhost:8000/api",
            "--interval",
            "30s",
        ])
        .unwrap();
        assert!(matches!(args.command, Command::Watch(_)));
    }

    #[test]
    fn test_parse_watch_interval_only() {
        let args = Args::try_parse_from(["energy-dashboard", "watch", "--interval", "30s"]);
        assert!(matches!(args.unwrap().command, Command::Watch(_)));
    }

    #[test]
    fn test_parse_analyze_input() {
        let args = Args::try_parse_from(["energy-dashboard", "analyze", "--input", "x.json"]);
        assert!(matches!(args.unwrap().command, Command::Analyze(_)));
    }

    #[test]
    fn test_parse_analyze_stdin_by_default() {
        let args = Args::try_parse_from(["energy-dashboard", "analyze"]);
        assert!(matches!(args.unwrap().command, Command::Analyze(_)));
    }

    #[test]
    fn test_parse_invalid_url_err() {
        assert!(
            Args::try_parse_from(["energy-dashboard", "report", "--api-base-url", "not a url"])
                .is_err()
        );
    }
}
