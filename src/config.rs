use crate::baseline::BaselineTable;
use crate::error::PfResult;
use crate::round::HOLES_PER_ROUND;
use crate::scorer::Scorer;
use crate::store::{SessionStore, DEFAULT_STORE_PATH};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct GlobalParams {
    /// Session history file.
    #[arg(global = true, short, long, default_value = DEFAULT_STORE_PATH)]
    pub sessions: PathBuf,

    /// Baseline CSV (`distance,expected_putts`) replacing the built-in table.
    #[arg(global = true, short, long)]
    pub baseline: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    pub debug: bool,
}

impl GlobalParams {
    pub fn scorer(&self) -> PfResult<Scorer> {
        let baseline = match &self.baseline {
            Some(path) => BaselineTable::load_from_file(path)?,
            None => BaselineTable::default(),
        };
        Ok(Scorer::new(baseline))
    }

    pub fn store(&self) -> SessionStore {
        SessionStore::new(&self.sessions)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputParams {
    /// Append the round summary to the session history.
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Write the per-hole detail table to this CSV file.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print the scored round as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SimulationParams {
    /// Greens hit in regulation.
    #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(u8).range(0..=HOLES_PER_ROUND as i64))]
    pub gir: u8,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Putts per hole, 18 comma-separated values. Without it only the card is shown.
    #[arg(short, long, value_delimiter = ',')]
    pub putts: Vec<u32>,
}
