//! Markdown serialization of extracted text and tables.
//!
//! Tables are written as GitHub Flavored Markdown (GFM) pipe tables with no
//! index column. Markdown is turned into HTML with `pulldown-cmark` for the
//! report page.

use pulldown_cmark::{Event, Options, Parser, html};

use crate::table::Table;

/// Convert every `\n` into a markdown hard line break (two spaces + newline),
/// so multi-line text keeps its line structure when rendered.
pub fn hard_line_breaks(text: &str) -> String {
    text.replace('\n', "  \n")
}

/// Serialize a table as a GFM pipe table.
///
/// The header line holds the column labels (`0, 1, …` for positional tables).
/// Absent cells render empty, `|` is escaped and embedded newlines become spaces.
pub fn table_to_markdown(table: &Table) -> String {
    let labels = table.column_labels();
    let mut lines = Vec::with_capacity(table.record_count() + 2);

    let header: Vec<String> = labels.iter().map(|l| escape_cell(l)).collect();
    lines.push(format!("| {} |", header.join(" | ")));

    let sep: Vec<&str> = labels.iter().map(|_| "---").collect();
    lines.push(format!("| {} |", sep.join(" | ")));

    for row in table.value_rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| escape_cell(cell.as_deref().unwrap_or("")))
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }

    lines.join("\n")
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Render markdown to an HTML fragment. Pipe tables are enabled.
///
/// Raw HTML in the input is emitted as escaped text, never as markup.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
