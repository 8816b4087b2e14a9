#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! modcli — load a named data module and pretty-print its structure.

mod cli;
mod commands;
mod module;

use clap::Parser;

use cli::{Cli, OutputCtx, write_load_failure};

fn main() {
    let cli = Cli::parse();

    let ctx = OutputCtx::new(cli.output, cli.json, cli.color, cli.depth, cli.no_header);

    match commands::dispatch(&cli, &ctx) {
        Ok(()) => {}
        Err(err) => {
            write_load_failure(
                &mut std::io::stderr().lock(),
                cli.module.as_deref().unwrap_or_default(),
                &err,
            );
            std::process::exit(err.exit_code());
        }
    }
}
