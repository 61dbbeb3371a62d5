use crate::error::CliError;
use crate::util::ensure_gxt;
use argh::FromArgs;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Check whether a file starts with a GXT header
#[argh(subcommand, name = "check")]
pub struct CheckCmd {
    /// file to check
    #[argh(option, short = 'f')]
    pub file: PathBuf,

    /// print the result of the check
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

pub fn handle_check_command(cmd: CheckCmd) -> Result<(), CliError> {
    ensure_gxt(&cmd.file)?;
    if cmd.verbose {
        println!("{}: GXT file", cmd.file.display());
    }
    Ok(())
}
