use std::io::{self, Write};
use std::path::Path;

use pdfharvest::report::NO_TEXT_ADVISORY;

use crate::cli::{ExtractArgs, TextFormat};
use crate::shared::open_and_extract;

pub fn run(file: &Path, args: &ExtractArgs, format: TextFormat) -> Result<(), i32> {
    let extraction = open_and_extract(file, args.selection(), &args.options())?;

    match format {
        TextFormat::Text => {
            if !extraction.has_text() {
                eprintln!("{NO_TEXT_ADVISORY}");
            }
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(extraction.text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| {
                    eprintln!("Error: failed to write output: {e}");
                    1
                })?;
        }
        TextFormat::Json => {
            let pages: Vec<usize> = extraction.pages.iter().map(|p| p + 1).collect();
            let obj = serde_json::json!({
                "page_count": extraction.page_count,
                "pages": pages,
                "text": extraction.text,
            });
            println!("{obj}");
        }
    }

    Ok(())
}
