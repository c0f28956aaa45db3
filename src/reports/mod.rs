use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use puttforge::export::{detail_header, fmt_sg, fmt_to_par};
use puttforge::history::HistoryReport;
use puttforge::round::{RoundCard, RoundResult, SessionType};
use puttforge::store::date_format::FORMAT;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn signed_cell(text: String, value: f64) -> Cell {
    if value > 0.0 {
        Cell::new(text).fg(Color::Green)
    } else if value < 0.0 {
        Cell::new(text).fg(Color::Red)
    } else {
        Cell::new(text)
    }
}

/// The generated holes, before putts are entered.
pub fn print_card(card: &RoundCard) {
    println!("\n⛳ Putting Simulation");
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Hole").add_attribute(Attribute::Bold),
        Cell::new("Putt For"),
        Cell::new("Distance (ft)"),
    ]);

    for h in card.holes() {
        let distance = h
            .distance_ft
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(h.hole).add_attribute(Attribute::Bold),
            Cell::new(h.mode.putt_for()),
            Cell::new(distance),
        ]);
    }
    align_right(&mut table, 2..=2);
    println!("{}", table);
}

pub fn print_round(result: &RoundResult, session_type: SessionType) {
    println!("\n📋 Results Summary");
    let mut table = new_table();
    table.set_header(detail_header(session_type));

    for h in &result.holes {
        let mut row = vec![
            Cell::new(h.hole).add_attribute(Attribute::Bold),
            Cell::new(h.distance_ft),
            Cell::new(h.putts),
        ];
        if session_type == SessionType::OnCourse {
            row.push(Cell::new(h.mode.putt_for()));
        }
        row.push(signed_cell(fmt_sg(h.strokes_gained), h.strokes_gained));
        row.push(Cell::new(fmt_to_par(h.score_to_par)));
        table.add_row(row);
    }

    let last = detail_header(session_type).len() - 1;
    align_right(&mut table, 1..=last);
    println!("{}", table);

    println!("📈 Total SG Putting: {}", fmt_sg(result.total_sg));
    println!("🏁 Score to Par: {}", fmt_to_par(result.total_score_to_par));
}

pub fn print_history(report: &HistoryReport) {
    if report.is_empty() {
        println!("No session data found yet. Play some rounds and save your sessions!");
        return;
    }

    println!("\n🗓 Session Log");
    let mut table = new_table();
    table.set_header(vec!["Date", "Total SG", "Score to Par", "Type"]);
    for s in &report.sessions {
        table.add_row(vec![
            Cell::new(s.date.format(FORMAT)),
            signed_cell(fmt_sg(s.total_sg), s.total_sg),
            Cell::new(fmt_to_par(s.score_to_par)),
            Cell::new(s.session_type),
        ]);
    }
    align_right(&mut table, 1..=2);
    println!("{}", table);

    println!("\n📈 Performance Over Time");
    if report.has_trend() {
        let mut trend = new_table();
        trend.set_header(vec!["Date", "Total SG", "Score to Par"]);
        for p in &report.trend {
            trend.add_row(vec![
                Cell::new(p.date.format(FORMAT)),
                Cell::new(fmt_sg(p.total_sg)),
                Cell::new(fmt_to_par(p.score_to_par)),
            ]);
        }
        align_right(&mut trend, 1..=2);
        println!("{}", trend);
    } else {
        println!("Add at least 2 sessions to see performance trends.");
    }

    println!("\n🏅 Overall Stats");
    if let (Some(sg), Some(par)) = (report.average_sg, report.average_score_to_par) {
        println!("Average SG Putting: {:+.2}", sg);
        println!("Average Score to Par: {:+.2}", par);
    }
}
