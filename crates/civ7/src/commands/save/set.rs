use clap::Args;
use civ7_save::{Resource, SaveContainer};
use miette::{miette, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct SetArgs {
    /// An input save file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Index of the player, as listed by `save info`
    #[arg(short, long)]
    player: usize,

    /// New gold value, from 0 to 8388608
    #[arg(long, allow_negative_numbers = true)]
    gold: Option<i64>,

    /// New influence value, from 0 to 8388608
    #[arg(long, allow_negative_numbers = true)]
    influence: Option<i64>,

    /// Where to write the edited save, defaults to the input file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl SetArgs {
    fn edits(&self) -> Vec<(Resource, i64)> {
        Resource::ALL
            .into_iter()
            .filter_map(|resource| {
                let value = match resource {
                    Resource::Gold => self.gold,
                    Resource::Influence => self.influence,
                };
                value.map(|v| (resource, v))
            })
            .collect()
    }

    pub fn handle(&self) -> Result<()> {
        let edits = self.edits();
        if edits.is_empty() {
            return Err(miette!("nothing to change, pass --gold or --influence"));
        }

        // reject everything before touching the save
        for (resource, value) in &edits {
            resource.validate(*value)?;
        }

        let output = self.output.as_ref().unwrap_or(&self.file);
        if output == &self.file && !self.overwrite {
            return Err(miette!(
                "refusing to replace {}, pass --overwrite or --output",
                self.file.display()
            ));
        }

        let mut save = SaveContainer::load(&super::read(&self.file)?)?;
        let player = save
            .players()
            .get(self.player)
            .ok_or(civ7_save::error::Error::PlayerNotFound(self.player))?
            .leader_name
            .clone();

        for (resource, value) in edits {
            let previous = save.player_value(self.player, resource)?;
            save.set_player_value(self.player, resource, value)?;
            info!("{player}: {resource} {previous} -> {value}");
        }

        super::write(output, &save.serialize()?, self.overwrite)
    }
}
