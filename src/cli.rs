use clap::Parser;
use std::path::PathBuf;

/// Resolve dependency licenses of prior SBOM stages and check them against a policy
#[derive(Parser, Debug)]
#[command(name = "license-compliance")]
#[command(version)]
#[command(
    about = "Resolve dependency licenses of prior SBOM stages and check them against a policy",
    long_about = None
)]
pub struct Args {
    /// Path to the run configuration (YAML)
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Directory holding the stored stage results
    #[arg(short, long, value_name = "DIR")]
    pub store: PathBuf,

    /// Path to the license knowledge catalog (JSON)
    #[arg(long, value_name = "FILE")]
    pub catalog: PathBuf,

    /// Log lookup details (debug level)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log filter when RUST_LOG is not set
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_required_paths() {
        let args = Args::try_parse_from([
            "license-compliance",
            "--config",
            "run.yml",
            "--store",
            "results",
            "--catalog",
            "knowledge.json",
        ])
        .unwrap();

        assert_eq!(args.config, PathBuf::from("run.yml"));
        assert_eq!(args.store, PathBuf::from("results"));
        assert_eq!(args.catalog, PathBuf::from("knowledge.json"));
        assert_eq!(args.log_filter(), "info");
    }

    #[test]
    fn test_verbosity_flags() {
        let base = ["license-compliance", "-c", "a", "-s", "b", "--catalog", "c"];

        let verbose = Args::try_parse_from(base.iter().copied().chain(["-v"])).unwrap();
        assert_eq!(verbose.log_filter(), "debug");

        let quiet = Args::try_parse_from(base.iter().copied().chain(["-q"])).unwrap();
        assert_eq!(quiet.log_filter(), "error");

        assert!(Args::try_parse_from(base.iter().copied().chain(["-v", "-q"])).is_err());
    }

    #[test]
    fn test_missing_config_is_rejected() {
        let result =
            Args::try_parse_from(["license-compliance", "--store", "b", "--catalog", "c"]);
        assert!(result.is_err());
    }
}
