use sylchipper::{SyllableTokenizer, TokenizerOptions, store::VocabStore};

/// Tokenizer configuration arg group.
#[derive(clap::Args, Debug)]
pub struct TokenizerArgs {
    /// Language code.
    #[arg(long, default_value = "tr")]
    language: String,

    /// Syllable filter: none, vocabulary, percentile, or count.
    #[arg(long, default_value = "none")]
    limit_by: String,

    /// Filter threshold, interpreted per `--limit-by`.
    #[arg(long, default_value_t = 0.0)]
    limit: f64,

    /// Read the vocabulary from this file instead of the data dir.
    #[arg(long, default_value = None)]
    vocab_file: Option<String>,
}

impl TokenizerArgs {
    /// Parse the tokenizer options.
    pub fn options(&self) -> Result<TokenizerOptions, Box<dyn std::error::Error>> {
        Ok(TokenizerOptions::parse(
            &self.language,
            &self.limit_by,
            self.limit,
        )?)
    }

    /// Load a fitted tokenizer.
    pub fn load_tokenizer(
        &self,
        store: &mut dyn VocabStore,
    ) -> Result<SyllableTokenizer, Box<dyn std::error::Error>> {
        let options = self.options()?;
        match &self.vocab_file {
            Some(path) => {
                log::info!("vocab file: {path}");
                let mut tokenizer = options.build();
                tokenizer.reload_path(path)?;
                Ok(tokenizer)
            }
            None => Ok(options.load(store)?),
        }
    }
}
