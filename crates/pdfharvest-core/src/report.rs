//! HTML rendering of the extractor page.
//!
//! One self-contained document: a sidebar with the upload form and page
//! selector, and a main column with the inline viewer, the extracted text,
//! its download link and the extracted tables. The same page is served by the
//! web front end and written to disk by the CLI `report` command.

use std::fmt::Write as _;

use crate::document::UploadedDocument;
use crate::extraction::Extraction;
use crate::markdown::{hard_line_breaks, markdown_to_html, table_to_markdown};
use crate::selection::PageSelection;
use crate::table::Table;
use crate::text::has_visible_text;
use crate::viewer::{DOWNLOAD_FILENAME, VIEWER_HEIGHT_PX, download_data_uri, pdf_data_uri};

pub const PAGE_TITLE: &str = "PDF Text &amp; Table Extractor";
pub const UPLOAD_PROMPT: &str = "Please upload a PDF file using the sidebar.";
pub const NO_TEXT_ADVISORY: &str = "No text could be extracted from this PDF.";
pub const NO_TABLES_ADVISORY: &str = "No tables found in this PDF.";
pub const FAILURE_PREFIX: &str = "Could not process this PDF";

/// Form field carrying the current document as base64.
pub const CARRIED_DOCUMENT_FIELD: &str = "doc";
/// Form field carrying the current document's filename.
pub const CARRIED_FILENAME_FIELD: &str = "filename";

/// What the main column shows.
#[derive(Debug, Clone, Copy)]
pub enum PageContent<'a> {
    /// Nothing uploaded yet.
    Prompt,
    /// Upload rejected before extraction (not a PDF, too large, …).
    Rejected(&'a str),
    /// Extraction succeeded.
    Extracted {
        document: &'a UploadedDocument,
        extraction: &'a Extraction,
    },
    /// Extraction failed; the viewer is still shown.
    Failed {
        document: &'a UploadedDocument,
        message: &'a str,
    },
}

impl<'a> PageContent<'a> {
    /// The document being shown, if any.
    pub fn document(&self) -> Option<&'a UploadedDocument> {
        match *self {
            PageContent::Extracted { document, .. } | PageContent::Failed { document, .. } => {
                Some(document)
            }
            PageContent::Prompt | PageContent::Rejected(_) => None,
        }
    }
}

/// Everything needed to render one page.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    /// Form action for the upload form. `None` renders the sidebar read-only.
    pub action: Option<&'a str>,
    /// Current page selection, used to pre-fill the form.
    pub selection: PageSelection,
    pub content: PageContent<'a>,
}

/// Render the complete HTML document.
pub fn render_page(view: &PageView<'_>) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{PAGE_TITLE}</title>");
    out.push_str(STYLE);
    out.push_str("</head>\n<body>\n");

    render_sidebar(&mut out, view);

    out.push_str("<main>\n");
    let _ = writeln!(out, "<h1>{PAGE_TITLE}</h1>");
    match view.content {
        PageContent::Prompt => info(&mut out, UPLOAD_PROMPT),
        PageContent::Rejected(message) => {
            error(&mut out, message);
            info(&mut out, UPLOAD_PROMPT);
        }
        PageContent::Extracted {
            document,
            extraction,
        } => {
            render_viewer(&mut out, document, Some(extraction.page_count));
            render_text(&mut out, &extraction.text);
            render_tables(&mut out, &extraction.tables);
        }
        PageContent::Failed { document, message } => {
            render_viewer(&mut out, document, None);
            error(&mut out, &format!("{FAILURE_PREFIX}: {message}"));
        }
    }
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

const TOGGLE_PAGE: &str = " onchange=\"this.form.page.disabled = this.value !== 'specific'\"";

fn render_sidebar(out: &mut String, view: &PageView<'_>) {
    out.push_str("<aside>\n<h2>Upload PDF</h2>\n");
    let disabled = if view.action.is_some() { "" } else { " disabled" };
    let _ = writeln!(
        out,
        "<form method=\"post\" action=\"{}\" enctype=\"multipart/form-data\">",
        escape_html(view.action.unwrap_or(""))
    );
    let _ = writeln!(
        out,
        "<label>Choose a PDF file<input type=\"file\" name=\"pdf\" accept=\".pdf,application/pdf\"{disabled}></label>"
    );
    if view.action.is_some() {
        if let Some(document) = view.content.document() {
            render_carried_document(out, document);
        }
    }

    let (all_checked, specific_checked) = if view.selection.is_specific() {
        ("", " checked")
    } else {
        (" checked", "")
    };
    out.push_str("<fieldset>\n<legend>Select pages to process:</legend>\n");
    let _ = writeln!(
        out,
        "<label><input type=\"radio\" name=\"mode\" value=\"all\"{all_checked}{disabled}{TOGGLE_PAGE}> All Pages</label>"
    );
    let _ = writeln!(
        out,
        "<label><input type=\"radio\" name=\"mode\" value=\"specific\"{specific_checked}{disabled}{TOGGLE_PAGE}> Specific Page</label>"
    );
    let page_value = view.selection.page_number().unwrap_or(1);
    // The page input only applies in specific mode.
    let page_disabled = if view.action.is_none() || !view.selection.is_specific() {
        " disabled"
    } else {
        ""
    };
    let _ = writeln!(
        out,
        "<label>Enter page number (starting from 1):<input type=\"number\" name=\"page\" min=\"1\" step=\"1\" value=\"{page_value}\"{page_disabled}></label>"
    );
    out.push_str("</fieldset>\n");
    let _ = writeln!(out, "<button type=\"submit\"{disabled}>Extract</button>");
    out.push_str("</form>\n</aside>\n");
}

/// Hidden fields that resubmit the current document when no new file is
/// chosen, so changing the page selection re-runs on the same upload.
fn render_carried_document(out: &mut String, document: &UploadedDocument) {
    let _ = writeln!(
        out,
        "<p class=\"meta\">Current file: {}</p>",
        escape_html(document.filename())
    );
    let _ = writeln!(
        out,
        "<input type=\"hidden\" name=\"{CARRIED_FILENAME_FIELD}\" value=\"{}\">",
        escape_html(document.filename())
    );
    let _ = writeln!(
        out,
        "<input type=\"hidden\" name=\"{CARRIED_DOCUMENT_FIELD}\" value=\"{}\">",
        document.encoded()
    );
}

fn render_viewer(out: &mut String, document: &UploadedDocument, page_count: Option<usize>) {
    out.push_str("<section id=\"viewer\">\n<h2>PDF Viewer</h2>\n");
    let _ = write!(out, "<p class=\"meta\">{}", escape_html(document.filename()));
    if let Some(count) = page_count {
        let noun = if count == 1 { "page" } else { "pages" };
        let _ = write!(out, " &middot; {count} {noun}");
    }
    out.push_str("</p>\n");
    let _ = writeln!(
        out,
        "<iframe src=\"{}\" width=\"100%\" height=\"{VIEWER_HEIGHT_PX}px\" type=\"application/pdf\"></iframe>",
        pdf_data_uri(document.bytes())
    );
    out.push_str("</section>\n");
}

fn render_text(out: &mut String, text: &str) {
    out.push_str("<section id=\"text\">\n<h2>Extracted Text</h2>\n");
    if !has_visible_text(text) {
        warning(out, NO_TEXT_ADVISORY);
    } else {
        out.push_str("<details>\n<summary>Click to view extracted text</summary>\n");
        out.push_str("<div class=\"markdown\">\n");
        out.push_str(&markdown_to_html(&hard_line_breaks(text)));
        out.push_str("</div>\n</details>\n");
    }
    let _ = writeln!(
        out,
        "<a class=\"download\" download=\"{DOWNLOAD_FILENAME}\" href=\"{}\">Download Text as Markdown</a>",
        download_data_uri(text)
    );
    out.push_str("</section>\n");
}

fn render_tables(out: &mut String, tables: &[Table]) {
    out.push_str("<section id=\"tables\">\n<h2>Extracted Tables</h2>\n");
    if tables.is_empty() {
        warning(out, NO_TABLES_ADVISORY);
    }
    for (idx, table) in tables.iter().enumerate() {
        let n = idx + 1;
        let _ = writeln!(out, "<h3>Table {n}</h3>");
        render_grid(out, table);
        let _ = writeln!(
            out,
            "<details>\n<summary>View Markdown for Table {n}</summary>\n<pre><code>{}</code></pre>\n</details>",
            escape_html(&table_to_markdown(table))
        );
    }
    out.push_str("</section>\n");
}

fn render_grid(out: &mut String, table: &Table) {
    out.push_str("<table class=\"grid\">\n<thead><tr>");
    for label in table.column_labels() {
        let _ = write!(out, "<th>{}</th>", escape_html(&label));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in table.value_rows() {
        out.push_str("<tr>");
        for cell in row {
            match cell {
                Some(text) => {
                    let _ = write!(out, "<td>{}</td>", escape_html(text));
                }
                None => out.push_str("<td class=\"absent\"></td>"),
            }
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
}

fn info(out: &mut String, message: &str) {
    let _ = writeln!(out, "<p class=\"info\">{}</p>", escape_html(message));
}

fn warning(out: &mut String, message: &str) {
    let _ = writeln!(out, "<p class=\"warning\">{}</p>", escape_html(message));
}

fn error(out: &mut String, message: &str) {
    let _ = writeln!(out, "<p class=\"error\">{}</p>", escape_html(message));
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const STYLE: &str = "<style>
body { margin: 0; display: flex; font-family: sans-serif; }
aside { width: 18rem; padding: 1rem; background: #f0f2f6; min-height: 100vh; box-sizing: border-box; }
aside label { display: block; margin: 0.5rem 0; }
main { flex: 1; padding: 1rem 2rem; min-width: 0; }
.info { background: #e7f0fb; padding: 0.75rem; }
.warning { background: #fff8e1; padding: 0.75rem; }
.error { background: #fdecea; padding: 0.75rem; }
.meta { color: #555; }
table.grid { border-collapse: collapse; margin-bottom: 0.5rem; }
table.grid th, table.grid td { border: 1px solid #ccc; padding: 0.25rem 0.5rem; }
td.absent { background: #fafafa; }
details { margin: 0.5rem 0; }
</style>
";
