//! Application configuration from CLI flags.

use clap::{ArgAction, Args, Parser, Subcommand};

/// DB12 — measure normalized CPU power with the DIRAC Benchmark 2012.
///
/// Unless the `single` mode is used, results are printed as two lines:
/// `COPIES SUM ARITHMETIC-MEAN GEOMETRIC-MEAN MEDIAN` followed by the
/// space-separated sorted raw scores.
#[derive(Parser, Debug)]
#[command(name = "db12", version, about)]
pub struct AppConfig {
    /// Generate shell completion.
    #[arg(long, value_enum, global = true)]
    pub completion: Option<clap_complete::Shell>,

    #[command(subcommand)]
    pub mode: Option<Mode>,
}

/// Invocation modes.
#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Get the normalized power of one CPU.
    Single {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Run as many copies as needed to occupy the whole machine.
    Wholenode {
        #[command(flatten)]
        common: CommonArgs,

        /// Run extra unmeasured iterations to avoid tail effects.
        #[arg(long)]
        extra_iteration: bool,
    },

    /// Run as many copies as needed to occupy the job slot.
    Jobslot {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Run a fixed number of copies in parallel.
    Multiple {
        /// Number of copies to run.
        copies: usize,

        #[command(flatten)]
        common: CommonArgs,

        /// Run extra unmeasured iterations to avoid tail effects.
        #[arg(long)]
        extra_iteration: bool,
    },

    /// Print the version string.
    Version,
}

/// Arguments shared by every benchmarking mode.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Number of measured iterations to perform.
    #[arg(long, default_value_t = 1)]
    pub iterations: u32,

    /// Write the result to a JSON file instead of printing it.
    #[arg(long)]
    pub json: Option<String>,

    /// Disable the runtime-version score correction.
    #[arg(long = "no-correction", default_value_t = true, action = ArgAction::SetFalse)]
    pub correction: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
