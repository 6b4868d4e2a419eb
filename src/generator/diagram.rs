//! ASCII cutting diagrams.

use super::summary::format_length;
use crate::config::LENGTH_UNIT;
use crate::model::StockUnit;

const USED: char = '█';
const WASTE: char = '░';
const CUT: char = '┊';

/// Scale a length to a column count.
fn scale(length: f64, unit_length: f64, width: usize) -> usize {
    if unit_length <= 0.0 {
        return 0;
    }
    (length / unit_length * width as f64).max(0.0) as usize
}

/// Write `label` centred over `[start, start + span)` if it fits inside the line.
fn put_label(line: &mut [char], label: &str, start: usize, span: usize) {
    let len = label.chars().count() as i64;
    let label_start = start as i64 + (span as i64 - len).div_euclid(2);
    if label_start < 0 || label_start + len > line.len() as i64 {
        return;
    }
    for (k, ch) in label.chars().enumerate() {
        line[label_start as usize + k] = ch;
    }
}

/// Draw one unit as a bar `width` columns wide, followed by a caption.
pub fn create_unit_diagram(unit: &StockUnit, unit_length: f64, width: usize) -> Vec<String> {
    let mut pieces_line = vec![' '; width];
    let mut labels_line = vec![' '; width];
    let mut cuts_line = vec![' '; width];

    let last = unit.placements.len().saturating_sub(1);
    for (idx, placement) in unit.placements.iter().enumerate() {
        let start = scale(placement.start_position, unit_length, width);
        let span = scale(placement.length, unit_length, width);

        for cell in pieces_line.iter_mut().skip(start).take(span) {
            *cell = USED;
        }

        if idx < last {
            if let Some(cell) = cuts_line.get_mut(start + span) {
                *cell = CUT;
            }
        }

        put_label(
            &mut labels_line,
            &format_length(placement.length),
            start,
            span,
        );
    }

    if unit.waste > 0.0 {
        let waste_start = scale(unit.used_length(), unit_length, width);
        let waste_span = scale(unit.waste, unit_length, width);

        for cell in pieces_line.iter_mut().skip(waste_start).take(waste_span) {
            *cell = WASTE;
        }

        put_label(
            &mut labels_line,
            &format!("W:{}", format_length(unit.waste)),
            waste_start,
            waste_span,
        );
    }

    let border = format!("+{}+", "-".repeat(width));
    let framed = |line: Vec<char>| format!("|{}|", line.into_iter().collect::<String>());

    let used = unit_length - unit.waste;
    let utilization = if unit_length > 0.0 {
        used / unit_length * 100.0
    } else {
        0.0
    };

    vec![
        border.clone(),
        framed(pieces_line),
        framed(labels_line),
        framed(cuts_line),
        border,
        format!(
            "Unit {} (Length: {}{u}, Used: {}{u}, Utilization: {:.1}%)",
            unit.unit_number,
            format_length(unit_length),
            format_length(used),
            utilization,
            u = LENGTH_UNIT
        ),
    ]
}

/// Draw every unit of one material type under a titled legend.
pub fn create_arrangement_diagram(
    material_type: &str,
    units: &[StockUnit],
    unit_length: f64,
    width: usize,
) -> String {
    let title = format!("Cutting Diagram for {}", material_type);
    let mut lines = vec![
        title.clone(),
        "=".repeat(title.chars().count()),
        format!("Legend: {} = Used wood, {} = Waste, {} = Cut position", USED, WASTE, CUT),
        String::new(),
    ];

    for unit in units {
        lines.extend(create_unit_diagram(unit, unit_length, width));
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_piece_diagram() {
        let mut unit = StockUnit::new(1, 100.0);
        unit.try_place(50.0, 100.0, 0.0);
        let lines = create_unit_diagram(&unit, 100.0, 20);

        assert_eq!(lines[0], "+--------------------+");
        assert_eq!(lines[1], "|██████████░░░░░░░░░░|");
        assert_eq!(lines[2], "|   50.0     W:50.0  |");
        assert_eq!(lines[3], "|                    |");
        assert_eq!(lines[4], "+--------------------+");
        assert_eq!(
            lines[5],
            "Unit 1 (Length: 100.0cm, Used: 50.0cm, Utilization: 50.0%)"
        );
    }

    #[test]
    fn test_cut_marker_between_pieces() {
        let mut unit = StockUnit::new(2, 100.0);
        unit.try_place(50.0, 100.0, 0.0);
        unit.try_place(50.0, 100.0, 0.0);
        let lines = create_unit_diagram(&unit, 100.0, 20);

        let cuts: Vec<char> = lines[3].chars().collect();
        // frame char + column 10
        assert_eq!(cuts[11], CUT);
        assert_eq!(lines[3].matches(CUT).count(), 1);
        assert!(!lines[1].contains(WASTE));
    }

    #[test]
    fn test_label_skipped_when_too_wide() {
        let mut line = vec![' '; 4];
        put_label(&mut line, "123.4", 0, 4);
        assert!(line.iter().all(|&c| c == ' '));
    }

    #[test]
    fn test_arrangement_diagram_header() {
        let unit = {
            let mut u = StockUnit::new(1, 100.0);
            u.try_place(100.0, 100.0, 0.0);
            u
        };
        let diagram = create_arrangement_diagram("pine", &[unit], 100.0, 20);
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines[0], "Cutting Diagram for pine");
        assert_eq!(lines[1], "=".repeat(24));
        assert!(lines[2].starts_with("Legend:"));
        assert!(diagram.contains("Utilization: 100.0%"));
    }
}
