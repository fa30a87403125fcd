use std::path::Path;

use pdfharvest::report::NO_TABLES_ADVISORY;
use pdfharvest::{Table, table_to_markdown};

use crate::cli::{ExtractArgs, TableFormat};
use crate::shared::{csv_escape, open_and_extract};

pub fn run(file: &Path, args: &ExtractArgs, format: TableFormat) -> Result<(), i32> {
    let extraction = open_and_extract(file, args.selection(), &args.options())?;

    match format {
        TableFormat::Markdown => write_markdown(&extraction.tables),
        TableFormat::Json => write_json(&extraction.tables),
        TableFormat::Csv => write_csv(&extraction.tables),
    }
}

fn write_markdown(tables: &[Table]) -> Result<(), i32> {
    if tables.is_empty() {
        println!("{NO_TABLES_ADVISORY}");
        return Ok(());
    }

    for (idx, table) in tables.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("### Table {}", idx + 1);
        println!();
        println!("{}", table_to_markdown(table));
    }

    Ok(())
}

fn write_json(tables: &[Table]) -> Result<(), i32> {
    let json_str = serde_json::to_string(tables).map_err(|e| {
        eprintln!("Error: failed to serialize tables: {e}");
        1
    })?;
    println!("{json_str}");
    Ok(())
}

fn write_csv(tables: &[Table]) -> Result<(), i32> {
    for (idx, table) in tables.iter().enumerate() {
        if idx > 0 {
            println!();
        }

        let header: Vec<String> = table
            .column_labels()
            .iter()
            .map(|label| csv_escape(label))
            .collect();
        println!("{}", header.join(","));

        for row in table.value_rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| csv_escape(cell.as_deref().unwrap_or("")))
                .collect();
            println!("{}", cells.join(","));
        }
    }

    Ok(())
}
