use crate::error::CliError;
use crate::util::required_dir;
use argh::FromArgs;
use gxt_tool_export_api::import_file;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Rebuild a GXT file from a directory of images (not supported)
#[argh(subcommand, name = "import")]
pub struct ImportCmd {
    /// output GXT file
    #[argh(option, short = 'f')]
    pub file: PathBuf,

    /// directory holding the images
    #[argh(option, short = 'd')]
    pub dir: Option<PathBuf>,

    /// enable info logging
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

pub fn handle_import_command(cmd: ImportCmd) -> Result<(), CliError> {
    let input_dir = required_dir(cmd.dir, "import")?;
    import_file(&cmd.file, &input_dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gxt_tool_export_api::ExportError;

    #[test]
    fn import_always_fails() {
        let result = handle_import_command(ImportCmd {
            file: PathBuf::from("out.gxt"),
            dir: Some(PathBuf::from("in")),
            verbose: false,
        });
        assert!(matches!(
            result,
            Err(CliError::Export(ExportError::ImportNotImplemented))
        ));
    }
}
