//! Utils

use clap::Parser;

/// Arguments for the order summary demo
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Fixture set to use for the order & settings
    #[clap(short, long, default_value = "market")]
    pub fixture: String,

    /// Drop the category settings, as if the settings fetch had failed
    #[clap(long)]
    pub no_settings: bool,
}
