use std::path::Path;

use pdfharvest::{PageContent, PageView, extract, render_page};

use crate::cli::ExtractArgs;
use crate::shared::open_document;

/// Write the HTML report. An extraction failure is rendered into the page
/// (the viewer is kept) and still exits with status 1.
pub fn run(file: &Path, args: &ExtractArgs, output: &Path) -> Result<(), i32> {
    let document = open_document(file)?;
    let selection = args.selection();
    let outcome = extract(&document, selection, &args.options());

    let message;
    let content = match &outcome {
        Ok(extraction) => PageContent::Extracted {
            document: &document,
            extraction,
        },
        Err(e) => {
            message = e.to_string();
            PageContent::Failed {
                document: &document,
                message: &message,
            }
        }
    };

    let html = render_page(&PageView {
        action: None,
        selection,
        content,
    });

    std::fs::write(output, html).map_err(|e| {
        eprintln!("Error: failed to write {}: {e}", output.display());
        1
    })?;
    eprintln!("Wrote report to {}", output.display());

    match outcome {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("Error: failed to process PDF: {e}");
            Err(1)
        }
    }
}
