//! Human-readable text summary of a calculation.

use crate::config::{Settings, LENGTH_UNIT};
use crate::model::CalculationResult;
use std::fmt::Write;

/// Format a length with one decimal.
pub fn format_length(value: f64) -> String {
    format!("{:.1}", value)
}

fn separator(output: &mut String, ch: char, width: usize) {
    writeln!(output, "{}", ch.to_string().repeat(width)).unwrap();
}

fn grid_row<'a>(widths: &[usize], mut cells: impl Iterator<Item = &'a str>) -> String {
    let body: Vec<String> = widths
        .iter()
        .map(|&w| {
            let cell = cells.next().unwrap_or("");
            format!(" {}{} ", cell, " ".repeat(w - cell.chars().count()))
        })
        .collect();
    format!("|{}|", body.join("|"))
}

/// Render rows as a boxed grid table.
fn render_grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(idx) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let border: String = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    let border = format!("+{}+", border);

    let mut output = String::new();
    writeln!(output, "{}", border).unwrap();
    writeln!(output, "{}", grid_row(&widths, headers.iter().copied())).unwrap();
    writeln!(output, "{}", border.replace('-', "=")).unwrap();
    for row in rows {
        writeln!(output, "{}", grid_row(&widths, row.iter().map(|s| s.as_str()))).unwrap();
        writeln!(output, "{}", border).unwrap();
    }
    output
}

/// Generate the full text report: per-type detail, summary table and totals.
pub fn generate_summary(result: &CalculationResult, settings: &Settings) -> String {
    let mut output = String::new();

    writeln!(output, "Wood Cutting Arrangement").unwrap();
    separator(&mut output, '=', 50);
    writeln!(output).unwrap();

    let mut summary_rows = Vec::new();

    for arrangement in &result.arrangements {
        let material_type = &arrangement.material_type;
        let units_needed = arrangement.units_needed();
        let cost = result.cost_by_type.get(material_type).copied().unwrap_or(0.0);
        let waste = arrangement.total_waste();

        summary_rows.push(vec![
            material_type.clone(),
            units_needed.to_string(),
            settings.format_currency(cost),
            format!("{}{}", format_length(waste), LENGTH_UNIT),
        ]);

        writeln!(output, "Wood Type: {}", material_type).unwrap();
        writeln!(output, "Number of units needed: {}", units_needed).unwrap();
        writeln!(output, "Cost: {}", settings.format_currency(cost)).unwrap();
        writeln!(output, "Total waste: {}{}", format_length(waste), LENGTH_UNIT).unwrap();
        if let Some(suggestion) = result.waste_statistics.suggestion_by_type.get(material_type) {
            writeln!(output, "Suggestion: {}", suggestion).unwrap();
        }
        writeln!(output).unwrap();

        for unit in &arrangement.units {
            writeln!(output, "  Unit {}", unit.unit_number).unwrap();
            output.push_str("  ");
            separator(&mut output, '-', 30);
            writeln!(output, "  Pieces:").unwrap();
            for pc in &unit.piece_counts {
                writeln!(
                    output,
                    "    - {}x {}{}",
                    pc.count,
                    format_length(pc.length),
                    LENGTH_UNIT
                )
                .unwrap();
            }
            writeln!(output, "  Waste: {}{}", format_length(unit.waste), LENGTH_UNIT).unwrap();
            output.push_str("  ");
            separator(&mut output, '-', 30);
            writeln!(output).unwrap();
        }

        separator(&mut output, '=', 50);
        writeln!(output).unwrap();
    }

    writeln!(output, "Order Summary").unwrap();
    separator(&mut output, '=', 50);
    writeln!(output).unwrap();
    output.push_str(&render_grid(
        &["Wood Type", "Units", "Cost", "Waste"],
        &summary_rows,
    ));
    writeln!(output).unwrap();

    let stats = &result.waste_statistics;
    writeln!(output, "Total Units: {}", result.total_units()).unwrap();
    writeln!(
        output,
        "Total Waste: {}{} ({:.1}%)",
        format_length(stats.total_waste),
        LENGTH_UNIT,
        stats.waste_percentage
    )
    .unwrap();
    writeln!(output, "Total Cost: {}", settings.format_currency(result.total_cost)).unwrap();
    separator(&mut output, '=', 50);

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Piece;

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(0.0), "0.0");
        assert_eq!(format_length(240.0), "240.0");
        assert_eq!(format_length(12.345), "12.3");
    }

    #[test]
    fn test_render_grid() {
        let grid = render_grid(&["A", "Long"], &[vec!["xyz".to_string(), "1".to_string()]]);
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines[0], "+-----+------+");
        assert_eq!(lines[1], "| A   | Long |");
        assert_eq!(lines[2], "+=====+======+");
        assert_eq!(lines[3], "| xyz | 1    |");
        assert_eq!(lines[4], "+-----+------+");
    }

    #[test]
    fn test_summary_contains_totals() {
        let settings = Settings::new(0.0).with_material("pine", 100.0, 10.0);
        let pieces = vec![Piece::new("pine", 60.0), Piece::new("pine", 50.0)];
        let result = crate::calculate(&pieces, &settings).unwrap();
        let summary = generate_summary(&result, &settings);

        assert!(summary.contains("Wood Type: pine"));
        assert!(summary.contains("Number of units needed: 2"));
        assert!(summary.contains("    - 1x 60.0cm"));
        assert!(summary.contains("Total Units: 2"));
        assert!(summary.contains("Total Waste: 90.0cm (45.0%)"));
        assert!(summary.contains("Total Cost: 20.00 ILS"));
    }
}
