use crate::error::{PfResult, PuttForgeError};
use crate::round::RoundCard;
use crate::scorer::PuttFor;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

pub const CARD_HEADER: [&str; 4] = ["hole", "distance", "putts", "putt_for"];

#[derive(Debug, Deserialize)]
struct CardRow {
    hole: u8,
    distance: Option<u32>,
    putts: Option<u32>,
    putt_for: Option<String>,
}

/// Applies `hole,distance,putts,putt_for` rows on top of the on-course
/// defaults. Holes not listed keep their defaults; blank distance or putts
/// cells leave the value unset.
pub fn on_course_from_reader<R: Read>(reader: R) -> PfResult<RoundCard> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut card = RoundCard::on_course();
    let mut rows = 0;

    for (idx, result) in rdr.deserialize::<CardRow>().enumerate() {
        let row = result.map_err(|e| {
            PuttForgeError::Validation(format!("Card row {}: {}", idx + 1, e))
        })?;

        card.set_distance(row.hole, row.distance)?;
        card.set_putts(row.hole, row.putts)?;

        if let Some(raw) = row.putt_for.as_deref().filter(|s| !s.is_empty()) {
            let putt_for = PuttFor::from_str(raw).map_err(|_| {
                PuttForgeError::Validation(format!(
                    "Hole {}: unknown putt context '{}'",
                    row.hole, raw
                ))
            })?;
            card.set_putt_for(row.hole, putt_for)?;
        }
        rows += 1;
    }

    debug!("Applied {} card rows", rows);
    Ok(card)
}

pub fn load_on_course_card<P: AsRef<Path>>(path: P) -> PfResult<RoundCard> {
    let path = path.as_ref();
    info!("📂 Loading on-course card: {}", path.display());
    let file = File::open(path)?;
    on_course_from_reader(file)
}
