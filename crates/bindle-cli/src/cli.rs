//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// bindle - a small JavaScript module bundler
#[derive(Parser, Debug)]
#[command(
    name = "bindle",
    version,
    about = "A small JavaScript module bundler",
    long_about = "Bindle bundles an ES module entry file and its local imports\n\
                  into a single self-contained script with a synchronous module\n\
                  runtime. Configuration is read from a JSON config file."
)]
pub struct Cli {
    /// Path to the JSON config file
    #[arg(value_name = "CONFIG", default_value = "bindle.config.json")]
    pub config: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_defaults() {
        let cli = Cli::parse_from(["bindle"]);
        assert_eq!(cli.config, PathBuf::from("bindle.config.json"));
        assert!(!cli.verbose);
    }

    #[test]
    fn positional_config_path() {
        let cli = Cli::parse_from(["bindle", "custom.json", "--verbose"]);
        assert_eq!(cli.config, PathBuf::from("custom.json"));
        assert!(cli.verbose);
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["bindle", "-v", "-q"]).is_err());
    }
}
