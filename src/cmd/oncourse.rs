use clap::Args;
use puttforge::card::load_on_course_card;
use puttforge::config::{GlobalParams, OutputParams};
use puttforge::round::RoundCard;
use puttforge::PfResult;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct OnCourseArgs {
    /// Card CSV with `hole,distance,putts,putt_for` rows.
    #[arg(long)]
    pub card: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputParams,
}

pub fn run(args: OnCourseArgs, global: &GlobalParams) -> PfResult<()> {
    let scorer = global.scorer()?;

    let card = match &args.card {
        Some(path) => load_on_course_card(path)?,
        None => {
            warn!("No --card given, scoring the default card (10 ft, 2 putts, for par)");
            RoundCard::on_course()
        }
    };

    super::finish_round(&card, &scorer, &args.output, global)?;
    Ok(())
}
