use clap::Args;
use civ7_save::{Resource, SaveContainer};
use itertools::Itertools;
use miette::Result;
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct InfoArgs {
    /// An input save file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl InfoArgs {
    pub fn handle(&self) -> Result<()> {
        let save = SaveContainer::load(&super::read(&self.file)?)?;

        println!(
            "{} {} header, {} body, {} footer bytes, chunk size {}",
            self.file.display().bold(),
            save.header().len(),
            save.body().len(),
            save.footer().len(),
            save.framing().chunk_size
        );

        if save.players().is_empty() {
            println!("{}", "no players found".yellow());
            return Ok(());
        }

        let rows = save
            .players()
            .iter()
            .enumerate()
            .map(|(index, player)| {
                let counters = Resource::ALL
                    .iter()
                    .map(|resource| match save.player_value(index, *resource) {
                        Ok(value) => format!("{resource}: {value}"),
                        Err(_) => format!("{resource}: {}", "missing".red()),
                    })
                    .join(", ");

                format!(
                    "[{}] slot {} {:<24} {}",
                    index,
                    player.slot + 1,
                    player.leader_name.green(),
                    counters
                )
            })
            .join("\n");

        println!("{rows}");

        Ok(())
    }
}
