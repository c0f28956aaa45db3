use crate::reports;
use clap::Args;
use puttforge::config::GlobalParams;
use puttforge::history::HistoryReport;
use puttforge::round::SessionType;
use puttforge::PfResult;

#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    /// Only show `simulated` or `oncourse` sessions.
    #[arg(long)]
    pub kind: Option<SessionType>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: HistoryArgs, global: &GlobalParams) -> PfResult<()> {
    let sessions = global.store().load_all()?;
    let report = HistoryReport::build(sessions, args.kind);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reports::print_history(&report);
    }
    Ok(())
}
