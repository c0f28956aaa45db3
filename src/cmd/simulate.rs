use crate::reports;
use clap::Args;
use puttforge::config::{GlobalParams, OutputParams, SimulationParams};
use puttforge::round::RoundCard;
use puttforge::scorer::ScoringMode;
use puttforge::simulation::{generate_round, rng_from_seed};
use puttforge::{PfResult, PuttForgeError};
use serde::Serialize;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub sim: SimulationParams,

    #[command(flatten)]
    pub output: OutputParams,
}

#[derive(Serialize)]
struct CardHole {
    hole: u8,
    gir: bool,
    distance_ft: Option<u32>,
}

fn card_holes(card: &RoundCard) -> Vec<CardHole> {
    card.holes()
        .iter()
        .map(|h| CardHole {
            hole: h.hole,
            gir: matches!(h.mode, ScoringMode::Simulated { gir: true }),
            distance_ft: h.distance_ft,
        })
        .collect()
}

pub fn run(args: SimulateArgs, global: &GlobalParams) -> PfResult<()> {
    if args.sim.putts.is_empty() && (args.output.save || args.output.export.is_some()) {
        return Err(PuttForgeError::Validation(
            "--save and --export need --putts for all 18 holes".to_string(),
        ));
    }

    let scorer = global.scorer()?;
    let mut rng = rng_from_seed(args.sim.seed);

    info!("🎯 Generating putting simulation with {} GIRs", args.sim.gir);
    let mut card = generate_round(&mut rng, args.sim.gir as usize)?;

    if args.sim.putts.is_empty() {
        if args.output.json {
            println!("{}", serde_json::to_string_pretty(&card_holes(&card))?);
            return Ok(());
        }
        reports::print_card(&card);
        println!("\nEnter your putts with --putts (18 comma-separated values).");
        if args.sim.seed.is_none() {
            println!("Pass --seed to get the same holes again.");
        }
        return Ok(());
    }

    card.set_all_putts(&args.sim.putts)?;
    super::finish_round(&card, &scorer, &args.output, global)?;
    Ok(())
}
