//! CLI entry point for the running-bond wall counter

use bondwall::io::cli::{Cli, QueryRunner};
use bondwall::io::logging::init_logging;
use clap::Parser;

fn main() -> bondwall::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let mut runner = QueryRunner::new(cli);
    runner.run()
}
