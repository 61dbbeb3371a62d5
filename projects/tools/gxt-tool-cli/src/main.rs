mod commands;
mod error;
#[cfg(test)]
mod test_prelude;
mod util;
use argh::FromArgs;
use error::CliError;
use std::process::ExitCode;

#[derive(FromArgs, Debug)]
/// Exports the textures of PS Vita GXT containers as PNG images
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Export(commands::export::ExportCmd),
    Import(commands::import::ImportCmd),
    Check(commands::check::CheckCmd),
    TestPalette(commands::test_palette::TestPaletteCmd),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Commands::Export(cmd) => cmd.verbose,
            Commands::Import(cmd) => cmd.verbose,
            Commands::Check(cmd) => cmd.verbose,
            Commands::TestPalette(cmd) => cmd.verbose,
        }
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Export(cmd) => commands::export::handle_export_command(cmd),
        Commands::Import(cmd) => commands::import::handle_import_command(cmd),
        Commands::Check(cmd) => commands::check::handle_check_command(cmd),
        Commands::TestPalette(cmd) => commands::test_palette::handle_test_palette_command(cmd),
    }
}

fn main() -> ExitCode {
    let cli: TopLevel = argh::from_env();
    util::init_logging(cli.command.verbose());

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
