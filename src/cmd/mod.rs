pub mod clear;
pub mod history;
pub mod oncourse;
pub mod simulate;

use crate::reports;
use puttforge::config::{GlobalParams, OutputParams};
use puttforge::export;
use puttforge::round::{RoundCard, RoundResult, SessionType};
use puttforge::scorer::Scorer;
use puttforge::PfResult;
use serde::Serialize;

#[derive(Serialize)]
struct RoundReport<'a> {
    session_type: SessionType,
    #[serde(flatten)]
    result: &'a RoundResult,
}

/// Scores a filled-in card, then prints, exports and saves as requested.
pub fn finish_round(
    card: &RoundCard,
    scorer: &Scorer,
    output: &OutputParams,
    global: &GlobalParams,
) -> PfResult<RoundResult> {
    let result = card.score(scorer)?;
    let session_type = card.session_type();

    if output.json {
        let report = RoundReport {
            session_type,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reports::print_round(&result, session_type);
    }

    if let Some(path) = &output.export {
        export::export_detail(path, &result, session_type)?;
    }

    if output.save {
        let summary = result.summary_now(session_type);
        global.store().append(&summary)?;
        if !output.json {
            println!("✅ Session saved to {}", global.sessions.display());
        }
    }

    Ok(result)
}
