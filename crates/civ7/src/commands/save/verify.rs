use clap::Args;
use civ7_save::SaveContainer;
use miette::{miette, Result};
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct VerifyArgs {
    /// An input save file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl VerifyArgs {
    pub fn handle(&self) -> Result<()> {
        let save = SaveContainer::load(&super::read(&self.file)?)?;
        let rewritten = SaveContainer::load(&save.serialize()?)?;

        let (header, body, footer) = save.sections();
        let mismatches = [
            ("header", header == rewritten.header()),
            ("body", body == rewritten.body()),
            ("footer", footer == rewritten.footer()),
            ("players", save.players() == rewritten.players()),
        ]
        .into_iter()
        .filter_map(|(name, same)| (!same).then_some(name))
        .collect::<Vec<_>>();

        if !mismatches.is_empty() {
            return Err(miette!(
                "{} changed after rewriting: {}",
                self.file.display(),
                mismatches.join(", ")
            ));
        }

        println!("{} {}", self.file.display(), "ok".green());
        Ok(())
    }
}
