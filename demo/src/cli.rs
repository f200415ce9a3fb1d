use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "demo")]
#[command(version, about = "Fills, sorts and clears both sequence containers", long_about = None)]
pub struct Cli {
    /// Upper bound (inclusive) for the random element count
    #[arg(long, default_value_t = 1000)]
    pub max_len: usize,

    /// Upper bound (inclusive) for each random value
    #[arg(long, default_value_t = 100)]
    pub max_value: u32,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
