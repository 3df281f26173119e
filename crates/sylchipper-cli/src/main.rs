mod commands;
mod disk_cache;
mod input_output;
mod logging;
mod tokenizer_args;
mod tokenizer_mode;

use clap::Parser;
use commands::Commands;

pub use crate::logging::LogArgs;

/// sylchip: the sylchipper command line
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_cat() {
        let args = Args::try_parse_from([
            "sylchip",
            "cat",
            "--transform",
            "--limit-by",
            "vocabulary",
            "--limit",
            "500",
            "--data-dir",
            "/tmp/syl",
        ])
        .unwrap();
        assert!(matches!(args.command, Commands::Cat(_)));
    }

    #[test]
    fn test_cat_requires_one_mode() {
        assert!(Args::try_parse_from(["sylchip", "cat"]).is_err());
        assert!(Args::try_parse_from(["sylchip", "cat", "--tokenize", "--inverse"]).is_err());
    }

    #[test]
    fn test_fit_requires_files() {
        assert!(Args::try_parse_from(["sylchip", "fit"]).is_err());
        assert!(Args::try_parse_from(["sylchip", "fit", "-vv", "corpus.txt"]).is_ok());
    }
}
