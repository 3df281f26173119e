use log::LevelFilter;
use stderrlog::{LogLevelNum, Timestamp};

/// Default verbosity of commands which report progress (`fit`).
pub const PROGRESS_VERBOSITY: u8 = 3;

/// Default verbosity of streaming commands (`cat`, `vocab`); word failures still show.
pub const STREAM_VERBOSITY: u8 = 2;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, default_value = None)]
    verbose: Option<u8>,

    /// Enable timestamped logging.
    #[clap(short, long)]
    pub ts: bool,
}

impl LogArgs {
    /// The effective level filter.
    ///
    /// `-q` wins; otherwise a non-zero `-v` count replaces `default`.
    /// Levels count up from off (0) to trace (5 and above).
    pub fn level(
        &self,
        default: u8,
    ) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }

        let level = match self.verbose {
            Some(verbose @ 1..) => verbose,
            _ => default,
        };

        match level {
            0 => LevelFilter::Off,
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            4 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Install the stderr logger at [`level`](Self::level).
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let verbosity = match self.level(default) {
            LevelFilter::Off => LogLevelNum::Off,
            LevelFilter::Error => LogLevelNum::Error,
            LevelFilter::Warn => LogLevelNum::Warn,
            LevelFilter::Info => LogLevelNum::Info,
            LevelFilter::Debug => LogLevelNum::Debug,
            LevelFilter::Trace => LogLevelNum::Trace,
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(verbosity)
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
