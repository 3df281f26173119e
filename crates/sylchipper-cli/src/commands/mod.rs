use crate::commands::{cat::CatArgs, fit::FitArgs, vocab::VocabArgs};

pub mod cat;
pub mod fit;
pub mod vocab;

/// Subcommands for sylchipper.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Fit a syllable vocabulary on text files.
    Fit(FitArgs),

    /// Act as a streaming tokenizer.
    Cat(CatArgs),

    /// Show the most frequent vocabulary entries.
    Vocab(VocabArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Fit(cmd) => cmd.run(),
            Commands::Cat(cmd) => cmd.run(),
            Commands::Vocab(cmd) => cmd.run(),
        }
    }
}
