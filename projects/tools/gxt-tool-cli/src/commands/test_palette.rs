use crate::error::CliError;
use crate::util::{ensure_gxt, required_dir};
use argh::FromArgs;
use gxt_tool_export_api::{export_palette_test_file, ExportOptions};
use std::path::PathBuf;
use tracing::info;

#[derive(FromArgs, Debug)]
/// Export every indexed texture once per palette of its pool
#[argh(subcommand, name = "test-palette")]
pub struct TestPaletteCmd {
    /// input GXT file
    #[argh(option, short = 'f')]
    pub file: PathBuf,

    /// output directory (created if missing)
    #[argh(option, short = 'd')]
    pub dir: Option<PathBuf>,

    /// log every written file
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

pub fn handle_test_palette_command(cmd: TestPaletteCmd) -> Result<(), CliError> {
    let output_dir = required_dir(cmd.dir, "test-palette")?;
    ensure_gxt(&cmd.file)?;

    let written = export_palette_test_file(&cmd.file, ExportOptions::new(output_dir))?;
    info!("exported {} palette previews from {}", written.len(), cmd.file.display());
    Ok(())
}
