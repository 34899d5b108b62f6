use std::path::{Path, PathBuf};

use civ7_save::{error::Error, SaveContainer};
use pretty_assertions::assert_eq;
use tracing::info;
use tracing_test::traced_test;

fn validate_save(path: &PathBuf) -> Result<(), Error> {
    info!("testing {}", &path.display());

    let parent_dir = &path
        .parent()
        .ok_or(Error::IOError(std::io::ErrorKind::NotFound.into()))?
        .join(
            path.file_stem()
                .ok_or(Error::IOError(std::io::ErrorKind::NotFound.into()))?,
        );

    info!("comparing to sections in {}", parent_dir.display());

    let save = SaveContainer::load(&std::fs::read(path)?)?;

    assert_eq!(save.header(), std::fs::read(parent_dir.join("header.bin"))?);
    assert_eq!(save.body(), std::fs::read(parent_dir.join("body.bin"))?);
    assert_eq!(save.footer(), std::fs::read(parent_dir.join("footer.bin"))?);

    Ok(())
}

fn saves() -> Result<Vec<PathBuf>, Error> {
    Ok(
        std::fs::read_dir(format!("{}/resources/", env!("CARGO_MANIFEST_DIR")))?
            // Filter out all those directory entries which couldn't be read
            .filter_map(|res| res.ok())
            // Map the directory entries to paths
            .map(|dir_entry| dir_entry.path())
            .filter(|e| e.is_file())
            .filter(|path| has_extension(path, "Civ7Save"))
            .collect(),
    )
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e == extension)
}

#[traced_test]
#[test]
fn validate_save_parsing() -> Result<(), Error> {
    let to_test = saves()?;
    assert!(!to_test.is_empty());

    for path in to_test {
        validate_save(&path)?;
    }

    Ok(())
}

#[traced_test]
#[test]
fn validate_save_round_trip() -> Result<(), Error> {
    for path in saves()? {
        info!("round tripping {}", &path.display());

        let raw = std::fs::read(&path)?;
        let save = SaveContainer::load(&raw)?;

        // Due to differences in zlib implementations the compressed bytes may differ
        // Instead we reload the output and compare the sections
        let output = save.serialize()?;
        assert!(output.starts_with(save.header()));
        assert!(output.ends_with(save.footer()));

        let reloaded = SaveContainer::load(&output)?;
        assert_eq!(reloaded.sections(), save.sections());
        assert_eq!(reloaded.framing(), save.framing());
        assert_eq!(reloaded.players(), save.players());
    }

    Ok(())
}
