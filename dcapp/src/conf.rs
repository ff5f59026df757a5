use clap::Parser;
use dcctrl::platform::Builder;

#[derive(Debug, Parser)]
pub struct Cli {
    #[clap(flatten)]
    pub platform_builder: Builder,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
