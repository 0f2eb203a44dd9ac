//! Reverse path: recover the original TeX source from annotated MathML.
//!
//! Documents produced by this engine carry the source in an
//! `annotation encoding="TeX"` element under the `semantics` wrapper.
//! [`get_tex_source`] walks our own tree; [`get_tex_source_from_markup`]
//! scans arbitrary serialized MathML for the same structure, undoing the
//! serializer's escaping.

use crate::mathml_tree::{MathDocument, MathNode, MathNodeType, MathmlNode};
use crate::types::ExtractError;
use crate::utils::unescape;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Returns the TeX source embedded in a document produced by [`crate::parse`].
///
/// Fails with [`ExtractError::NotAnnotated`] when the tree carries no
/// `annotation encoding="TeX"` — a recoverable condition distinct from a
/// parse error.
pub fn get_tex_source(document: &MathDocument) -> Result<String, ExtractError> {
    annotation_of(document.root())
        .map(MathNode::text)
        .ok_or(ExtractError::NotAnnotated)
}

fn annotation_of(root: &MathNode) -> Option<&MathNode> {
    let semantics = root
        .children
        .iter()
        .filter_map(MathmlNode::as_element)
        .find(|el| el.node_type == MathNodeType::Semantics)?;
    semantics
        .children
        .iter()
        .filter_map(MathmlNode::as_element)
        .find(|el| {
            el.node_type == MathNodeType::Annotation && el.attributes.get("encoding") == Some("TeX")
        })
}

fn has_tex_encoding(element: &BytesStart<'_>) -> bool {
    element
        .attributes()
        .flatten()
        .any(|attr| attr.key.as_ref() == b"encoding" && attr.value.as_ref() == b"TeX")
}

/// Extracts the TeX source out of serialized MathML markup: the first
/// `annotation` child with `encoding="TeX"` under a `semantics` wrapper
/// directly under the root element, unescaped back to the original text.
pub fn get_tex_source_from_markup(markup: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(markup);
    let mut stack: Vec<String> = Vec::new();
    let mut capture: Option<String> = None;
    loop {
        match reader.read_event()? {
            Event::Start(element) => {
                let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
                if capture.is_none()
                    && name == "annotation"
                    && stack.len() == 2
                    && stack[1] == "semantics"
                    && has_tex_encoding(&element)
                {
                    capture = Some(String::new());
                }
                stack.push(name);
            }
            Event::Empty(element) => {
                if element.name().as_ref() == b"annotation"
                    && stack.len() == 2
                    && stack[1] == "semantics"
                    && has_tex_encoding(&element)
                {
                    return Ok(String::new());
                }
            }
            Event::Text(text) => {
                if let Some(buffer) = capture.as_mut() {
                    buffer.push_str(&String::from_utf8_lossy(&text));
                }
            }
            Event::End(element) => {
                if element.name().as_ref() == b"annotation"
                    && let Some(raw) = capture.take()
                {
                    return Ok(unescape(&raw));
                }
                stack.pop();
            }
            Event::Eof => return Err(ExtractError::NotAnnotated),
            _ => {}
        }
    }
}
