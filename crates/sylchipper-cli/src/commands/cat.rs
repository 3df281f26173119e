use std::io::{BufRead, Write};

use sylchipper::SyllableTokenizer;

use crate::{
    LogArgs,
    disk_cache::DataDirArgs,
    input_output::{InputArgs, OutputArgs},
    logging::STREAM_VERBOSITY,
    tokenizer_args::TokenizerArgs,
    tokenizer_mode::{TokenizerMode, TokenizerModeArgs},
};

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[command(flatten)]
    tokenizer_mode: TokenizerModeArgs,

    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    data_dir: DataDirArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(STREAM_VERBOSITY)?;

        let mut store = self.data_dir.init_disk_cache()?;
        let mut tokenizer = self.tokenizer.load_tokenizer(&mut store)?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_cat(
            self.tokenizer_mode.mode(),
            &mut reader,
            &mut writer,
            &mut tokenizer,
        )
    }
}

fn run_cat(
    mode: TokenizerMode,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &mut SyllableTokenizer,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let line = line?;
        match mode {
            TokenizerMode::Tokenize => {
                writeln!(writer, "{}", tokenizer.tokenize(&line))?;
            }
            TokenizerMode::Transform => {
                let ids: Vec<u32> = tokenizer.transform(&line)?;
                for (idx, id) in ids.iter().enumerate() {
                    write!(writer, "{}{}", if idx == 0 { "" } else { " " }, id)?;
                }
                writeln!(writer)?;
            }
            TokenizerMode::Inverse => {
                let ids = line
                    .split_whitespace()
                    .map(str::parse)
                    .collect::<Result<Vec<u32>, _>>()?;
                writeln!(writer, "{}", tokenizer.inverse_transform(&ids)?)?;
            }
        }
        writer.flush()?;
    }
    Ok(())
}
