/// The cat mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenizerMode {
    /// Text to space-separated syllables.
    Tokenize,

    /// Text to token ids.
    Transform,

    /// Token ids to syllables.
    Inverse,
}

/// Tokenizer mode argument group.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TokenizerModeArgs {
    /// Split text into space-separated syllables.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    tokenize: bool,

    /// Encode text as token ids.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    transform: bool,

    /// Decode token ids into syllables.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    inverse: bool,
}

impl TokenizerModeArgs {
    /// Get the tokenizer mode.
    pub fn mode(&self) -> TokenizerMode {
        if self.transform {
            TokenizerMode::Transform
        } else if self.inverse {
            TokenizerMode::Inverse
        } else {
            TokenizerMode::Tokenize
        }
    }
}
