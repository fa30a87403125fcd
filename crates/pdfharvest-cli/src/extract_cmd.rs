use std::path::Path;

use pdfharvest::report::{NO_TABLES_ADVISORY, NO_TEXT_ADVISORY};
use pdfharvest::{DOWNLOAD_FILENAME, Extraction, table_to_markdown};

use crate::cli::ExtractArgs;
use crate::shared::open_and_extract;

pub fn run(file: &Path, args: &ExtractArgs, output_dir: &Path) -> Result<(), i32> {
    let extraction = open_and_extract(file, args.selection(), &args.options())?;

    let target = output_dir.join(DOWNLOAD_FILENAME);
    std::fs::write(&target, extraction.text.as_bytes()).map_err(|e| {
        eprintln!("Error: failed to write {}: {e}", target.display());
        1
    })?;
    tracing::info!(path = %target.display(), bytes = extraction.text.len(), "saved extracted text");

    print!("{}", render_markdown(&extraction));
    eprintln!("Saved extracted text to {}", target.display());
    Ok(())
}

/// Markdown summary of one extraction: text section, then one section per table.
fn render_markdown(extraction: &Extraction) -> String {
    let mut out = String::from("## Extracted Text\n\n");
    if extraction.has_text() {
        out.push_str(&extraction.text);
    } else {
        out.push_str(NO_TEXT_ADVISORY);
        out.push_str("\n\n");
    }

    out.push_str("## Extracted Tables\n\n");
    if extraction.tables.is_empty() {
        out.push_str(NO_TABLES_ADVISORY);
        out.push('\n');
    }
    for (idx, table) in extraction.tables.iter().enumerate() {
        out.push_str(&format!("### Table {}\n\n", idx + 1));
        out.push_str(&table_to_markdown(table));
        out.push_str("\n\n");
    }
    out
}
