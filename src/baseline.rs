use crate::error::{PfResult, PuttForgeError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// One row of the expected-putts reference data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineEntry {
    pub distance: u32,
    pub expected_putts: f64,
}

const fn entry(distance: u32, expected_putts: f64) -> BaselineEntry {
    BaselineEntry {
        distance,
        expected_putts,
    }
}

/// Tour-average putts to hole out, 1-50 ft.
pub const DEFAULT_BASELINE: [BaselineEntry; 19] = [
    entry(1, 1.00),
    entry(3, 1.05),
    entry(5, 1.15),
    entry(7, 1.30),
    entry(9, 1.45),
    entry(11, 1.50),
    entry(13, 1.55),
    entry(15, 1.65),
    entry(17, 1.75),
    entry(19, 1.85),
    entry(21, 2.00),
    entry(23, 2.00),
    entry(25, 2.05),
    entry(27, 2.05),
    entry(30, 2.10),
    entry(35, 2.10),
    entry(40, 2.15),
    entry(45, 2.15),
    entry(50, 2.20),
];

/// Distance -> expected putts, sorted ascending by distance.
#[derive(Debug, Clone)]
pub struct BaselineTable {
    entries: Vec<BaselineEntry>,
}

impl Default for BaselineTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_BASELINE.to_vec(),
        }
    }
}

impl BaselineTable {
    pub fn new(mut entries: Vec<BaselineEntry>) -> PfResult<Self> {
        if entries.is_empty() {
            return Err(PuttForgeError::Config(
                "Baseline table needs at least one entry".to_string(),
            ));
        }
        entries.sort_by_key(|e| e.distance);

        for pair in entries.windows(2) {
            if pair[0].distance == pair[1].distance {
                return Err(PuttForgeError::Config(format!(
                    "Duplicate baseline distance: {} ft",
                    pair[0].distance
                )));
            }
        }
        for e in &entries {
            if e.distance == 0 {
                return Err(PuttForgeError::Config(
                    "Baseline distances must be positive".to_string(),
                ));
            }
            if !e.expected_putts.is_finite() || e.expected_putts < 0.0 {
                return Err(PuttForgeError::Config(format!(
                    "Invalid expected putts {} at {} ft",
                    e.expected_putts, e.distance
                )));
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[BaselineEntry] {
        &self.entries
    }

    /// Expected putts of the entry whose distance is closest to `distance`.
    /// On an exact tie between two entries the smaller distance wins.
    pub fn lookup(&self, distance: u32) -> f64 {
        let mut best = &self.entries[0];
        let mut best_diff = best.distance.abs_diff(distance);

        // Ascending scan with strict `<` keeps the first (smaller) key on ties.
        for e in &self.entries[1..] {
            let diff = e.distance.abs_diff(distance);
            if diff < best_diff {
                best = e;
                best_diff = diff;
            }
        }
        best.expected_putts
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PfResult<Self> {
        let path = path.as_ref();
        info!("📏 Loading baseline table from {}", path.display());
        let file = File::open(path).map_err(|e| {
            PuttForgeError::Config(format!(
                "Could not open baseline at '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_reader(file)
    }

    /// Reads `distance,expected_putts` rows. Rows that don't parse are skipped.
    pub fn from_reader<R: Read>(reader: R) -> PfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        let mut skipped = 0;

        for (idx, result) in rdr.records().enumerate() {
            let rec = match result {
                Ok(rec) => rec,
                Err(e) => {
                    warn!("Baseline row {}: {}", idx + 1, e);
                    skipped += 1;
                    continue;
                }
            };
            if rec.len() < 2 {
                skipped += 1;
                continue;
            }
            match (rec[0].parse::<u32>(), rec[1].parse::<f64>()) {
                (Ok(distance), Ok(expected_putts)) => entries.push(BaselineEntry {
                    distance,
                    expected_putts,
                }),
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!("Skipped {} invalid rows in baseline table", skipped);
        }
        debug!("Loaded {} baseline entries", entries.len());

        Self::new(entries)
    }
}
