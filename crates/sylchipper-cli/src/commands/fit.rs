use crate::{
    LogArgs,
    disk_cache::DataDirArgs,
    input_output::read_text_lines,
    logging::PROGRESS_VERBOSITY,
    tokenizer_args::TokenizerArgs,
};

/// Args for the fit command.
#[derive(clap::Args, Debug)]
pub struct FitArgs {
    /// Corpus text files; one corpus line per text line.
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    data_dir: DataDirArgs,

    /// Also write the vocabulary to this file.
    #[arg(long, default_value = None)]
    output: Option<String>,
}

impl FitArgs {
    /// Run the fit command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(PROGRESS_VERBOSITY)?;

        let mut store = self.data_dir.init_disk_cache()?;
        let mut tokenizer = self.tokenizer.options()?.build();

        log::info!("Reading corpus:");
        let mut corpus = Vec::new();
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            corpus.extend(read_text_lines(path)?);
        }

        tokenizer.fit(&corpus, &mut store)?;

        if let Some(path) = &self.output {
            log::info!("output: {path}");
            tokenizer.save_path(path)?;
        }

        Ok(())
    }
}
