use std::io::Write;

use sylchipper::vocab::SyllableVocab;

use crate::{
    LogArgs,
    disk_cache::DataDirArgs,
    input_output::OutputArgs,
    logging::STREAM_VERBOSITY,
    tokenizer_args::TokenizerArgs,
};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// How many entries to show.
    #[arg(long, default_value_t = 20)]
    top: usize,

    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    data_dir: DataDirArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl VocabArgs {
    /// Run the vocab command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(STREAM_VERBOSITY)?;

        let mut store = self.data_dir.init_disk_cache()?;
        let tokenizer = self.tokenizer.load_tokenizer(&mut store)?;

        let mut writer = self.output.open_writer()?;
        write_top(tokenizer.vocab(), self.top, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

fn write_top(
    vocab: &SyllableVocab,
    top: usize,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(writer, "rank\tcount\tpercentile\tsyllable")?;
    for (syllable, entry) in vocab.iter_ranked().take(top) {
        match entry.percentile.value() {
            Some(p) => writeln!(writer, "{}\t{}\t{p:.4}\t{syllable}", entry.rank, entry.count)?,
            None => writeln!(writer, "{}\t{}\t-\t{syllable}", entry.rank, entry.count)?,
        }
    }
    Ok(())
}
