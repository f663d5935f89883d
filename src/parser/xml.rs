//! Reading export documents into an XML tree.

use encoding_rs::{Encoding, UTF_8};
use roxmltree::{Document, Node, ParsingOptions};
use std::path::Path;

use crate::error::{ConvertError, Result};

/// Read a document from disk and decode it to UTF-8 text.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| ConvertError::io(path, e))?;
    decode_document(path, &bytes)
}

/// Decode raw bytes using the BOM or the declared encoding.
///
/// The XML declaration is removed from the result, since the text is no longer in
/// the encoding it names.
pub fn decode_document(path: &Path, bytes: &[u8]) -> Result<String> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => {
            let encoding = match declared_encoding(bytes) {
                Some(label) => Encoding::for_label(label.as_bytes()).ok_or_else(|| {
                    ConvertError::Encoding {
                        path: path.to_path_buf(),
                        label,
                    }
                })?,
                None => UTF_8,
            };
            (encoding, bytes)
        }
    };

    let text = encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| ConvertError::Encoding {
            path: path.to_path_buf(),
            label: format!("invalid {} data", encoding.name()),
        })?;

    Ok(strip_declaration(&text).to_string())
}

/// Parse decoded text into a tree.
pub fn parse_document<'input>(path: &Path, text: &'input str) -> Result<Document<'input>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(text, options).map_err(|source| ConvertError::Xml {
        path: path.to_path_buf(),
        source,
    })
}

/// First child element with the given tag name.
pub fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.has_tag_name(name))
}

/// All child elements with the given tag name, in document order.
pub fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.has_tag_name(name))
}

/// Value of `encoding="..."` in the XML declaration, if any.
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(256)];
    let head = String::from_utf8_lossy(head);
    let declaration = head.strip_prefix("<?xml")?;
    let declaration = &declaration[..declaration.find("?>")?];

    let rest = &declaration[declaration.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &rest[1..];
    let end = value.find(quote)?;
    Some(value[..end].trim().to_string())
}

fn strip_declaration(text: &str) -> &str {
    if text.starts_with("<?xml") {
        if let Some(end) = text.find("?>") {
            return &text[end + 2..];
        }
    }
    text
}
