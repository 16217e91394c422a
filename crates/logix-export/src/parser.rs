// crates/logix-export/src/parser.rs

use crate::error::ExportError;
use crate::l5k;
use crate::model::{self, ROOT_ELEMENT};
use crate::resolver;
use crate::types::{ParseResult, SourceFormat};
use quick_xml::Reader;
use quick_xml::events::Event;

const BOM: char = '\u{feff}';

/// Parses an L5K (plaintext) export.
///
/// # Errors
/// Returns [`ExportError::MissingRootBlock`] if the text has no terminated
/// `CONTROLLER` block. Every other irregularity is resolved by omission.
pub fn load_l5k_from_str(content: &str) -> Result<ParseResult, ExportError> {
    l5k::parse_l5k(content)
}

/// Parses an L5X (XML) export.
///
/// # Errors
/// Returns an `ExportError` if the document is not well-formed XML, if its
/// root element is not `RSLogix5000Content`, or if it has no `Controller`.
pub fn load_l5x_from_str(xml_content: &str) -> Result<ParseResult, ExportError> {
    let xml_content = xml_content.trim_start_matches(BOM);

    // 1. The deserializer ignores the root element's name, so check it first.
    check_root_element(xml_content)?;

    // 2. Deserialize the raw XML string into our internal model.
    let content: model::RsLogixContent = quick_xml::de::from_str(xml_content)?;

    // 3. Map the model onto the public types.
    resolver::resolve_content(content)
}

/// Parses an export in the given format.
///
/// # Errors
/// See [`load_l5k_from_str`] and [`load_l5x_from_str`].
pub fn load_project_from_str(
    content: &str,
    format: SourceFormat,
) -> Result<ParseResult, ExportError> {
    match format {
        SourceFormat::L5k => load_l5k_from_str(content),
        SourceFormat::L5x => load_l5x_from_str(content),
    }
}

/// Verifies that the first element of the document is the export root.
fn check_root_element(xml_content: &str) -> Result<(), ExportError> {
    let mut reader = Reader::from_str(xml_content);
    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element) => {
                return if element.local_name().as_ref() == ROOT_ELEMENT.as_bytes() {
                    Ok(())
                } else {
                    Err(ExportError::MissingElement {
                        element: ROOT_ELEMENT,
                    })
                };
            }
            Event::Eof => {
                return Err(ExportError::MissingElement {
                    element: ROOT_ELEMENT,
                });
            }
            _ => {}
        }
    }
}
