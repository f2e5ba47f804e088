use anyhow::Result;
use clap::Parser;

use todo_finder::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
