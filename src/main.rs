use clap::Parser;
use std::process::ExitCode;
use terraform_sbom::{Cli, handlers::handle_generate, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    handle_generate(&cli)
}
