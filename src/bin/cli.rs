// src/bin/cli.rs
use bracket_board::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    bracket_board::log::init();
    cli::run()
}
