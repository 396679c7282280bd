use std::path::Path;

use lopdf::{Document, Object, Stream, dictionary};

/// Writes a PDF with one page per entry; each `\n`-separated line becomes its
/// own text object so extraction yields one line per entry line.
pub(crate) fn write_text_pdf(path: &Path, pages: &[&str]) {
    let mut doc = Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for text in pages {
        let mut content = String::new();
        for (line_index, line) in text.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let y = 720 - (line_index as i64) * 14;
            content.push_str(&format!(
                "BT /F1 12 Tf 72 {y} Td ({}) Tj ET\n",
                escape_pdf_string(line)
            ));
        }

        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => Object::Reference(font_id) },
            },
        });
        page_ids.push(page_id);
    }

    let kids = page_ids
        .iter()
        .map(|id| Object::Reference(*id))
        .collect::<Vec<Object>>();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(pages.len() as i64),
    });

    for page_id in &page_ids {
        if let Ok(dict) = doc
            .get_object_mut(*page_id)
            .and_then(|object| object.as_dict_mut())
        {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc.save(path).expect("fixture PDF should save");
}

/// `count` pages whose text is their own 0-based index.
pub(crate) fn write_numbered_pdf(path: &Path, count: usize) {
    let texts = (0..count)
        .map(|index| format!("Source page {index}"))
        .collect::<Vec<String>>();
    let pages = texts.iter().map(String::as_str).collect::<Vec<&str>>();
    write_text_pdf(path, &pages);
}

fn escape_pdf_string(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}
