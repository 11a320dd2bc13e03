mod new;

use clap::Parser;
use eyre::Result;
use new::NewCommand;

#[derive(Parser)]
#[command(name = "sdkforge")]
#[command(version)]
#[command(about = "Scaffold a TypeScript SDK project for EVM-compatible blockchains")]
pub(crate) struct Cli {
    #[command(flatten)]
    new: NewCommand,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.new.run()
    }
}
