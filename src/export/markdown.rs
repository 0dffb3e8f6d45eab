use super::{AssessmentReport, ReportSection};
use crate::error::FrResult;
use crate::scorer::CategoryScore;
use std::io::Write;

/// Renders the report as Markdown: header, score table, then the submitted
/// values grouped by category.
pub fn write_markdown<W: Write>(mut writer: W, report: &AssessmentReport) -> FrResult<()> {
    write_header(&mut writer, report)?;
    write_scores(&mut writer, &report.scores)?;
    write_submitted_data(&mut writer, &report.sections)?;
    writer.flush()?;
    Ok(())
}

fn write_header<W: Write>(w: &mut W, report: &AssessmentReport) -> FrResult<()> {
    writeln!(w, "# {}", report.title)?;
    writeln!(w)?;
    writeln!(w, "{}", report.date_line())?;
    writeln!(w)?;
    Ok(())
}

fn write_scores<W: Write>(w: &mut W, scores: &[CategoryScore]) -> FrResult<()> {
    writeln!(w, "## Category Scores")?;
    writeln!(w)?;
    writeln!(w, "| Category | Score | Metrics Scored |")?;
    writeln!(w, "|----------|-------|----------------|")?;
    for s in scores {
        writeln!(
            w,
            "| {} | {} | {}/{} |",
            s.category,
            s.score,
            s.scored,
            s.scored + s.excluded
        )?;
    }
    writeln!(w)?;
    Ok(())
}

fn write_submitted_data<W: Write>(w: &mut W, sections: &[ReportSection]) -> FrResult<()> {
    writeln!(w, "## Submitted Data")?;
    for section in sections {
        writeln!(w)?;
        writeln!(w, "### {}", section.category)?;
        writeln!(w)?;
        for e in &section.entries {
            writeln!(w, "- {}: {}", e.name, e.value_with_unit())?;
        }
    }
    Ok(())
}
