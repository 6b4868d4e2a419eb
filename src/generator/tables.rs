//! Tabular exports (purchase order, arrangements, waste analysis) and CSV writing.

use super::summary::format_length;
use crate::config::{Settings, LENGTH_UNIT};
use crate::error::Result;
use crate::model::{CalculationResult, Piece};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Rows of cells; rows may differ in length.
pub type Table = Vec<Vec<String>>;

fn row<I, S>(cells: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: ToString,
{
    cells.into_iter().map(|c| c.to_string()).collect()
}

/// Units to buy per material type.
pub fn generate_purchase_order(result: &CalculationResult, settings: &Settings) -> Table {
    let mut table = vec![row([
        "Wood Type".to_string(),
        format!("Unit Length ({})", LENGTH_UNIT),
        "Units".to_string(),
        "Cost per Unit".to_string(),
        "Total Cost".to_string(),
    ])];

    for arrangement in &result.arrangements {
        let material_type = &arrangement.material_type;
        let Some(spec) = settings.material(material_type) else {
            continue;
        };
        let units = result.units_needed_by_type.get(material_type).copied().unwrap_or(0);
        let cost = result.cost_by_type.get(material_type).copied().unwrap_or(0.0);

        table.push(row([
            material_type.clone(),
            format_length(spec.unit_length),
            units.to_string(),
            settings.format_currency(spec.price_per_unit),
            settings.format_currency(cost),
        ]));
    }

    table
}

/// The requested pieces as entered.
pub fn generate_cutting_list(pieces: &[Piece]) -> Table {
    let mut table = vec![row([
        "Wood Type".to_string(),
        format!("Length ({})", LENGTH_UNIT),
        "Count".to_string(),
    ])];

    for piece in pieces {
        table.push(row([
            piece.material_type.clone(),
            format_length(piece.length),
            piece.count.to_string(),
        ]));
    }

    table
}

/// One row per placed piece with its unit and start position.
pub fn generate_arrangements(result: &CalculationResult) -> Table {
    let mut table = vec![row([
        "Wood Type".to_string(),
        "Unit Number".to_string(),
        format!("Piece Length ({})", LENGTH_UNIT),
        "Piece Count".to_string(),
        format!("Start Position ({})", LENGTH_UNIT),
    ])];

    for arrangement in &result.arrangements {
        for unit in &arrangement.units {
            for piece_count in &unit.piece_counts {
                for placement in unit
                    .placements
                    .iter()
                    .filter(|p| p.length == piece_count.length)
                {
                    table.push(row([
                        arrangement.material_type.clone(),
                        unit.unit_number.to_string(),
                        format_length(piece_count.length),
                        piece_count.count.to_string(),
                        format_length(placement.start_position),
                    ]));
                }
            }
        }
    }

    table
}

/// Overall, per-type and per-unit waste figures.
pub fn generate_waste_analysis(result: &CalculationResult, settings: &Settings) -> Table {
    let stats = &result.waste_statistics;
    let mut table: Table = Vec::new();

    table.push(row(["Overall Statistics"]));
    table.push(row([
        format!("Total Wood Used ({})", LENGTH_UNIT),
        format!("Total Waste ({})", LENGTH_UNIT),
        "Overall Waste %".to_string(),
    ]));
    table.push(row([
        format_length(stats.total_wood_used),
        format_length(stats.total_waste),
        format!("{:.1}%", stats.waste_percentage),
    ]));
    table.push(Vec::new());

    table.push(row(["Waste by Type"]));
    table.push(row([
        "Wood Type".to_string(),
        format!("Total Waste ({})", LENGTH_UNIT),
        "Waste %".to_string(),
        "Suggestion".to_string(),
    ]));
    for arrangement in &result.arrangements {
        let material_type = &arrangement.material_type;
        let type_waste = stats.waste_by_type.get(material_type).copied().unwrap_or(0.0);
        let unit_length = settings
            .material(material_type)
            .map(|s| s.unit_length)
            .unwrap_or(0.0);
        let wood_used = arrangement.units_needed() as f64 * unit_length;
        let percentage = if wood_used > 0.0 {
            type_waste / wood_used * 100.0
        } else {
            0.0
        };
        let suggestion = stats
            .suggestion_by_type
            .get(material_type)
            .map(|s| s.to_string())
            .unwrap_or_default();

        table.push(row([
            material_type.clone(),
            format_length(type_waste),
            format!("{:.1}%", percentage),
            suggestion,
        ]));
    }
    table.push(Vec::new());

    table.push(row(["Waste Distribution"]));
    table.push(row([
        "Wood Type".to_string(),
        "Unit Number".to_string(),
        format!("Waste Length ({})", LENGTH_UNIT),
    ]));
    for arrangement in &result.arrangements {
        let Some(wastes) = stats.waste_distribution.get(&arrangement.material_type) else {
            continue;
        };
        for (idx, waste) in wastes.iter().enumerate() {
            table.push(row([
                arrangement.material_type.clone(),
                (idx + 1).to_string(),
                format_length(*waste),
            ]));
        }
    }

    table
}

/// Cuts needed from each unit, longest first, with the remaining offcut.
pub fn generate_cutting_plan(result: &CalculationResult, settings: &Settings) -> Table {
    let mut table = vec![row(["Wood Type", "Unit Number", "Cuts Required"])];

    for arrangement in &result.arrangements {
        let material_type = &arrangement.material_type;
        let unit_length = settings
            .material(material_type)
            .map(|s| s.unit_length)
            .unwrap_or(0.0);

        table.push(Vec::new());
        table.push(row([format!(
            "{} (Unit Length: {}{})",
            material_type,
            format_length(unit_length),
            LENGTH_UNIT
        )]));
        table.push(Vec::new());

        for unit in &arrangement.units {
            table.push(row([
                material_type.clone(),
                format!("Unit {}:", unit.unit_number),
            ]));

            let mut counts = unit.piece_counts.clone();
            counts.sort_by(|a, b| b.length.total_cmp(&a.length));
            for pc in counts {
                table.push(row([
                    String::new(),
                    String::new(),
                    format!("{}x {}{}", pc.count, format_length(pc.length), LENGTH_UNIT),
                ]));
            }

            if unit.waste > 0.0 {
                table.push(row([
                    String::new(),
                    String::new(),
                    format!("Remaining: {}{}", format_length(unit.waste), LENGTH_UNIT),
                ]));
            }
            table.push(Vec::new());
        }
    }

    table
}

/// Write a table as CSV.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    // Empty rows come out as a quoted empty field
    for record in table {
        wtr.write_record(record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render a table as a CSV string.
pub fn to_csv_string(table: &Table) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(table, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write every report as a CSV file into `dir`, returning the written paths.
pub fn export_all(
    result: &CalculationResult,
    pieces: &[Piece],
    settings: &Settings,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let reports = [
        ("purchase_order.csv", generate_purchase_order(result, settings)),
        ("cutting_list.csv", generate_cutting_list(pieces)),
        ("arrangements.csv", generate_arrangements(result)),
        ("waste_analysis.csv", generate_waste_analysis(result, settings)),
        ("cutting_plan.csv", generate_cutting_plan(result, settings)),
    ];

    let mut written = Vec::with_capacity(reports.len());
    for (name, table) in &reports {
        let path = dir.join(name);
        let file = std::fs::File::create(&path)?;
        write_csv(table, file)?;
        info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
