// ===== fitradar/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fitradar::catalog::Catalog;
use fitradar::export::RadarSeries;
use fitradar::scorer::{CategoryScoreVector, MetricOutcome, Score, ScoreDetails};

fn score_cell(score: Score) -> Cell {
    let cell = Cell::new(score.to_string());
    if score.value() >= 7.0 {
        cell.fg(Color::Green)
    } else if score.value() >= 4.0 {
        cell.fg(Color::Yellow)
    } else {
        cell.fg(Color::Red)
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_catalog(catalog: &Catalog) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Id"),
        Cell::new("Metric"),
        Cell::new("Unit"),
        Cell::new("How to measure"),
    ]);

    for (category, metrics) in catalog.groups() {
        for (i, m) in metrics.iter().enumerate() {
            // Category name only on the first row of its group
            let cat = if i == 0 {
                Cell::new(category).add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                cat,
                Cell::new(m.id).fg(Color::Cyan),
                Cell::new(m.name),
                Cell::new(m.unit.label().unwrap_or("-")),
                Cell::new(m.tracking),
            ]);
        }
    }
    println!("\n{}", table);
}

pub fn print_category_scores(scores: &CategoryScoreVector) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Scored"),
        Cell::new("Excluded"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for c in scores.iter() {
        table.add_row(vec![
            Cell::new(c.category).add_attribute(Attribute::Bold),
            score_cell(c.score),
            Cell::new(c.scored),
            Cell::new(c.excluded),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_metric_breakdown(details: &ScoreDetails) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Category"),
        Cell::new("Score"),
        Cell::new("Note"),
    ]);

    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for m in &details.metrics {
        let (score, note) = match &m.outcome {
            MetricOutcome::Scored { score } => (score_cell(*score), Cell::new("")),
            MetricOutcome::Missing => (Cell::new("-"), Cell::new("missing").fg(Color::Yellow)),
            MetricOutcome::Unparseable { raw } => (
                Cell::new("-"),
                Cell::new(format!("unreadable: '{}'", raw)).fg(Color::Red),
            ),
        };
        table.add_row(vec![
            Cell::new(m.name).add_attribute(Attribute::Bold),
            Cell::new(m.category),
            score,
            note,
        ]);
    }
    println!("\n{}", table);
}

/// Text stand-in for the radar chart: one bar per axis over the tick scale.
pub fn print_radar(series: &RadarSeries) {
    let span = (series.suggested_max - series.suggested_min).max(f64::EPSILON);
    let width = 20.0;

    println!("\n📡 {}", series.dataset_label);
    for (i, label) in series.labels.iter().enumerate() {
        let v = series.values.get(i).copied().unwrap_or(0.0);
        let filled = (((v - series.suggested_min) / span).clamp(0.0, 1.0) * width).round() as usize;
        let tip = series.tooltip(i).unwrap_or_default();
        println!(
            "   {:<13} |{}{}| {}",
            label,
            "#".repeat(filled),
            " ".repeat(width as usize - filled),
            tip
        );
    }

    let scale: Vec<String> = series
        .ticks()
        .into_iter()
        .map(|t| t.to_string())
        .collect();
    if !scale.is_empty() {
        println!("   {:<13}  scale: {}", "", scale.join(" · "));
    }
}
