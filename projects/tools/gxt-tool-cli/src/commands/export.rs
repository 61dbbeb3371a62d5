use crate::error::CliError;
use crate::util::{ensure_gxt, required_dir};
use argh::FromArgs;
use gxt_tool_export_api::{export_file, ExportOptions};
use std::path::PathBuf;
use tracing::info;

#[derive(FromArgs, Debug)]
/// Export every texture of a GXT file as PNG images
#[argh(subcommand, name = "export")]
pub struct ExportCmd {
    /// input GXT file
    #[argh(option, short = 'f')]
    pub file: PathBuf,

    /// output directory (created if missing)
    #[argh(option, short = 'd')]
    pub dir: Option<PathBuf>,

    /// also export mip levels below the top one
    #[argh(switch)]
    pub all_levels: bool,

    /// reorder swizzled textures into row-major order
    #[argh(switch)]
    pub deswizzle: bool,

    /// log every written file
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

pub fn handle_export_command(cmd: ExportCmd) -> Result<(), CliError> {
    let output_dir = required_dir(cmd.dir, "export")?;
    ensure_gxt(&cmd.file)?;

    let options = ExportOptions {
        output_dir,
        all_levels: cmd.all_levels,
        deswizzle: cmd.deswizzle,
    };
    let written = export_file(&cmd.file, options)?;
    info!("exported {} images from {}", written.len(), cmd.file.display());
    Ok(())
}
