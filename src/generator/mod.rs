//! Report generators for calculation results.

mod diagram;
mod summary;
mod tables;

pub use diagram::{create_arrangement_diagram, create_unit_diagram};
pub use summary::{format_length, generate_summary};
pub use tables::{
    export_all, generate_arrangements, generate_cutting_list, generate_cutting_plan,
    generate_purchase_order, generate_waste_analysis, to_csv_string, write_csv, Table,
};
