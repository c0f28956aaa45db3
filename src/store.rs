use crate::error::{PfResult, PuttForgeError};
use crate::round::RoundSummary;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_STORE_PATH: &str = "sessions.csv";
pub const STORE_HEADER: [&str; 4] = ["date", "total_sg", "score_to_par", "type"];

/// `YYYY-MM-DD HH:MM:SS` timestamps for the `date` column.
pub mod date_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(raw.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Writes a float as a plain decimal with exactly two places.
pub fn two_decimals<S: serde::Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{:.2}", value))
}

/// Append-only CSV log of saved rounds. Single writer, no locking.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

impl SessionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Appends one row, writing the header first if the file is new or empty.
    pub fn append(&self, summary: &RoundSummary) -> PfResult<()> {
        let existing_len = match fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == ErrorKind::NotFound => 0,
            Err(e) => return Err(e.into()),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;

        if existing_len > 0 && !ends_with_newline(&mut file)? {
            file.write_all(b"\n")?;
        }

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(existing_len == 0)
            .from_writer(file);
        wtr.serialize(summary)?;
        wtr.flush()?;

        info!(
            "💾 Saved {} session ({:+.2} SG) to {}",
            summary.session_type,
            summary.total_sg,
            self.path.display()
        );
        Ok(())
    }

    /// Every parseable row in file order. Malformed rows are logged and skipped.
    /// A missing store is the normal "no history yet" state.
    pub fn load_all(&self) -> PfResult<Vec<RoundSummary>> {
        self.load(false)
    }

    /// Like [`SessionStore::load_all`] but the first malformed row is an error.
    pub fn load_all_strict(&self) -> PfResult<Vec<RoundSummary>> {
        self.load(true)
    }

    fn load(&self, strict: bool) -> PfResult<Vec<RoundSummary>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No session store at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = rdr.headers()?.clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        if headers.iter().ne(STORE_HEADER.iter().copied()) {
            return Err(PuttForgeError::CorruptRecord {
                row: 0,
                reason: format!(
                    "unexpected header '{}', expected '{}'",
                    headers.iter().collect::<Vec<_>>().join(","),
                    STORE_HEADER.join(",")
                ),
            });
        }

        let mut sessions = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let row = idx + 1;
            let parsed = result
                .map_err(|e| e.to_string())
                .and_then(|rec| {
                    rec.deserialize::<RoundSummary>(Some(&headers))
                        .map_err(|e| e.to_string())
                });

            match parsed {
                Ok(summary) => sessions.push(summary),
                Err(reason) if strict => {
                    return Err(PuttForgeError::CorruptRecord { row, reason });
                }
                Err(reason) => warn!("⚠️  Skipping session row {}: {}", row, reason),
            }
        }

        debug!(
            "Loaded {} sessions from {}",
            sessions.len(),
            self.path.display()
        );
        Ok(sessions)
    }

    /// Deletes the whole store. Returns whether a file was removed.
    pub fn clear(&self) -> PfResult<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("🗑  Cleared session history at {}", self.path.display());
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

fn ends_with_newline(file: &mut File) -> PfResult<bool> {
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
