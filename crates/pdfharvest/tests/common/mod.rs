//! PDF fixtures built on the fly with lopdf.

#![allow(dead_code)]

use lopdf::{Object, Stream, dictionary};

/// A 3x2 ruled grid: Name/Age header, then Alice/30 and Bob/25.
pub const PEOPLE_TABLE: &[u8] = b"
    1 w
    100 700 m 300 700 l S
    100 680 m 300 680 l S
    100 660 m 300 660 l S
    100 640 m 300 640 l S
    100 700 m 100 640 l S
    200 700 m 200 640 l S
    300 700 m 300 640 l S
    BT /F1 10 Tf 110 685 Td (Name) Tj ET
    BT /F1 10 Tf 210 685 Td (Age) Tj ET
    BT /F1 10 Tf 110 665 Td (Alice) Tj ET
    BT /F1 10 Tf 210 665 Td (30) Tj ET
    BT /F1 10 Tf 110 645 Td (Bob) Tj ET
    BT /F1 10 Tf 210 645 Td (25) Tj ET
";

/// Content stream drawing a single line of text.
pub fn text_content(text: &str) -> Vec<u8> {
    format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET").into_bytes()
}

/// Build a PDF with one page per content stream.
pub fn pdf_with_pages(contents: &[Vec<u8>]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for content in contents {
        let stream = Stream::new(dictionary! {}, content.clone());
        let content_id = doc.add_object(stream);

        let resources = dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(font_id) },
        };

        let page_dict = dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => resources,
        };
        page_ids.push(doc.add_object(page_dict));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(contents.len() as i64),
    };
    let pages_id = doc.add_object(pages_dict);

    for &pid in &page_ids {
        if let Ok(page_obj) = doc.get_object_mut(pid) {
            if let Ok(dict) = page_obj.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// One page per text; an empty string yields a blank page.
pub fn pdf_with_texts(texts: &[&str]) -> Vec<u8> {
    let contents: Vec<Vec<u8>> = texts
        .iter()
        .map(|t| if t.is_empty() { Vec::new() } else { text_content(t) })
        .collect();
    pdf_with_pages(&contents)
}

pub fn pdf_with_people_table() -> Vec<u8> {
    pdf_with_pages(&[PEOPLE_TABLE.to_vec()])
}

/// A single page with an empty content stream, as a scanned page looks
/// to a text extractor.
pub fn pdf_with_blank_page() -> Vec<u8> {
    pdf_with_pages(&[Vec::new()])
}
