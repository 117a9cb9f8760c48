use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = opsvault::cli::Cli::parse();
    cli.run()
}
