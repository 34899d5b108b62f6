use clap::Args;
use civ7_save::{chunk::ChunkFraming, SaveContainer};
use miette::Result;
use std::path::PathBuf;
use tracing::info;

use super::extract::{BODY_FILE, FOOTER_FILE, HEADER_FILE};

#[derive(Args)]
pub struct StitchArgs {
    /// A directory written by `save extract`
    #[arg(short, long, value_name = "DIR")]
    directory: PathBuf,

    /// A target save file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl StitchArgs {
    pub fn handle(&self) -> Result<()> {
        info!("creating {}", &self.file.display());

        let save = SaveContainer::from_parts(
            super::read(&self.directory.join(HEADER_FILE))?,
            super::read(&self.directory.join(BODY_FILE))?,
            super::read(&self.directory.join(FOOTER_FILE))?,
            ChunkFraming::default(),
        );

        super::write(&self.file, &save.serialize()?, self.overwrite)
    }
}
