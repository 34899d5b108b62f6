use clap::Args;
use civ7_save::SaveContainer;
use miette::{Context, IntoDiagnostic, Result};
use std::path::PathBuf;
use tracing::info;

/// File names used for the dumped sections
pub const HEADER_FILE: &str = "header.bin";
pub const BODY_FILE: &str = "body.bin";
pub const FOOTER_FILE: &str = "footer.bin";

#[derive(Args)]
pub struct ExtractArgs {
    /// An input save file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// A target directory
    #[arg(short, long, value_name = "DIR")]
    directory: PathBuf,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl ExtractArgs {
    pub fn handle(&self) -> Result<()> {
        let save = SaveContainer::load(&super::read(&self.file)?)?;

        std::fs::create_dir_all(&self.directory)
            .into_diagnostic()
            .context(format!("creating {}", self.directory.display()))?;

        let (header, body, footer) = save.sections();
        super::write(&self.directory.join(HEADER_FILE), header, self.overwrite)?;
        super::write(&self.directory.join(BODY_FILE), body, self.overwrite)?;
        super::write(&self.directory.join(FOOTER_FILE), footer, self.overwrite)?;

        info!(
            "body was stored in chunks of {} bytes",
            save.framing().chunk_size
        );
        Ok(())
    }
}
