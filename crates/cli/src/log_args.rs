//! clap [Args](clap::Args) for logging configuration.

use clap::{ArgAction, Args};
use tracing::{level_filters::LevelFilter, Level};

/// The verbosity settings for the cli.
#[derive(Debug, Copy, Clone, Args)]
#[clap(next_help_heading = "DISPLAY")]
pub(crate) struct Verbosity {
    /// Set the minimum log level.
    ///
    /// -v     Warnings & Errors
    /// -vv    Info
    /// -vvv   Debug
    /// -vvvv  Traces (warning: very verbose!)
    #[clap(short, long, action = ArgAction::Count, global = true, default_value_t = 1, verbatim_doc_comment, help_heading = "DISPLAY")]
    verbosity: u8,

    /// Silence all log output.
    #[clap(long, alias = "silent", short = 'q', global = true, help_heading = "DISPLAY")]
    quiet: bool,
}

impl Verbosity {
    /// Get the corresponding [LevelFilter] for the given verbosity, or off
    /// if the verbosity corresponds to silent.
    pub(crate) fn directive(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::OFF
        } else {
            let level = match self.verbosity.saturating_sub(1) {
                0 => Level::WARN,
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            };

            level.into()
        }
    }

    /// Initializes the tracing subscriber with the configured options from
    /// cli args.
    pub(crate) fn init_tracing(&self) {
        tracing_subscriber::fmt()
            .with_max_level(self.directive())
            .with_target(false)
            .init();
    }
}
