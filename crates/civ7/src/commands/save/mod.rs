pub mod extract;
pub mod info;
pub mod set;
pub mod stitch;
pub mod verify;

use miette::{Context, IntoDiagnostic, Result};
use std::{io::Write, path::Path};
use tempfile::NamedTempFile;
use tracing::info;

#[derive(clap::Subcommand)]
pub enum SaveCommands {
    /// List the players of a save and their counters
    Info(info::InfoArgs),
    /// Change the gold or influence of a player
    Set(set::SetArgs),
    /// Dump the header, decompressed body and footer of a save into a directory
    Extract(extract::ExtractArgs),
    /// Rebuild a save from a directory of dumps
    Stitch(stitch::StitchArgs),
    /// Check that a save survives being rewritten unchanged
    Verify(verify::VerifyArgs),
}

impl SaveCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            SaveCommands::Info(info) => info.handle(),
            SaveCommands::Set(set) => set.handle(),
            SaveCommands::Extract(extract) => extract.handle(),
            SaveCommands::Stitch(stitch) => stitch.handle(),
            SaveCommands::Verify(verify) => verify.handle(),
        }
    }
}

/// Read a whole file, naming it in the error
pub(crate) fn read(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path)
        .into_diagnostic()
        .context(format!("reading {}", path.display()))
}

/// Write `data` to `path`, refusing to replace an existing file unless `overwrite` is set
///
/// The data goes to a temporary file next to `path` first and is then renamed into place, so a
/// failed write never leaves a truncated file behind.
pub(crate) fn write(path: &Path, data: &[u8], overwrite: bool) -> Result<()> {
    info!("writing {}", path.display());

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut out = NamedTempFile::new_in(dir)
        .into_diagnostic()
        .context(format!("creating a temporary file in {}", dir.display()))?;
    out.write_all(data)
        .into_diagnostic()
        .context(format!("writing {}", path.display()))?;
    out.as_file()
        .sync_all()
        .into_diagnostic()
        .context(format!("writing {}", path.display()))?;

    if overwrite {
        out.persist(path)
    } else {
        out.persist_noclobber(path)
    }
    .into_diagnostic()
    .context(format!("creating {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::write;
    use tempfile::tempdir;

    #[test]
    fn write_replaces_only_with_overwrite() {
        let td = tempdir().unwrap();
        let target = td.path().join("out.Civ7Save");

        write(&target, b"first", false).unwrap();
        assert!(write(&target, b"second", false).is_err());
        assert_eq!(std::fs::read(&target).unwrap(), b"first");

        write(&target, b"second", true).unwrap();
        assert_eq!(std::fs::read(&target).unwrap(), b"second");

        // no temporary files are left next to the target
        let entries = std::fs::read_dir(td.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn failed_write_keeps_existing_file() {
        let td = tempdir().unwrap();
        let target = td.path().join("out.Civ7Save");
        std::fs::write(&target, b"original").unwrap();

        // the temporary file cannot be created inside a missing directory
        let missing = td.path().join("missing").join("out.Civ7Save");
        assert!(write(&missing, b"edited", true).is_err());

        assert_eq!(std::fs::read(&target).unwrap(), b"original");
        assert_eq!(std::fs::read_dir(td.path()).unwrap().count(), 1);
    }
}
