use crate::error::PfResult;
use crate::round::{RoundResult, SessionType};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub const DEFAULT_EXPORT_NAME: &str = "sg_putting_results.csv";

pub fn fmt_sg(value: f64) -> String {
    format!("{:+.2}", value)
}

pub fn fmt_to_par(value: i32) -> String {
    format!("{:+}", value)
}

pub fn detail_header(session_type: SessionType) -> Vec<&'static str> {
    match session_type {
        SessionType::Simulated => vec!["Hole", "Distance (ft)", "Putts", "SG", "Score to Par"],
        SessionType::OnCourse => vec![
            "Hole",
            "Distance (ft)",
            "Putts",
            "Initial Putt For",
            "SG",
            "Score to Par",
        ],
    }
}

/// Per-hole detail table as CSV. On-course rounds carry the putt context.
pub fn write_detail<W: Write>(
    writer: W,
    result: &RoundResult,
    session_type: SessionType,
) -> PfResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(detail_header(session_type))?;

    for h in &result.holes {
        let mut row = vec![
            h.hole.to_string(),
            h.distance_ft.to_string(),
            h.putts.to_string(),
        ];
        if session_type == SessionType::OnCourse {
            row.push(h.mode.putt_for().to_string());
        }
        row.push(fmt_sg(h.strokes_gained));
        row.push(fmt_to_par(h.score_to_par));
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn detail_to_string(result: &RoundResult, session_type: SessionType) -> PfResult<String> {
    let mut buf = Vec::new();
    write_detail(&mut buf, result, session_type)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn export_detail<P: AsRef<Path>>(
    path: P,
    result: &RoundResult,
    session_type: SessionType,
) -> PfResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_detail(file, result, session_type)?;
    info!("⬇️  Exported {} holes to {}", result.holes.len(), path.display());
    Ok(())
}
