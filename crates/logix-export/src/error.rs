// crates/logix-export/src/error.rs

use core::fmt;
use quick_xml::Error as XmlError;
use quick_xml::errors::serialize::DeError;

/// Fatal errors that abort a parse.
///
/// Only structural problems surface here. Missing attributes, empty lists,
/// and unterminated sub-blocks are resolved by omission and never raised.
#[derive(Debug)]
pub enum ExportError {
    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// An error from the underlying `quick-xml` reader while probing the root element.
    XmlReading(XmlError),

    /// The plaintext export has no top-level block with this keyword (e.g., `CONTROLLER`).
    MissingRootBlock { keyword: &'static str },

    /// A required XML element was missing (e.g., `RSLogix5000Content`, `Controller`).
    MissingElement { element: &'static str },
}

impl ExportError {
    /// Short, stable identifier for the error kind, suitable for recording
    /// against the originating file.
    pub fn kind(&self) -> &'static str {
        match self {
            ExportError::XmlParsing(_) => "XmlParsing",
            ExportError::XmlReading(_) => "XmlReading",
            ExportError::MissingRootBlock { .. } => "MissingRootBlock",
            ExportError::MissingElement { .. } => "MissingElement",
        }
    }
}

impl From<DeError> for ExportError {
    fn from(e: DeError) -> Self {
        ExportError::XmlParsing(e)
    }
}

impl From<XmlError> for ExportError {
    fn from(e: XmlError) -> Self {
        ExportError::XmlReading(e)
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            ExportError::XmlReading(e) => write!(f, "XML reading error: {}", e),
            ExportError::MissingRootBlock { keyword } => {
                write!(f, "Missing required root block: {}", keyword)
            }
            ExportError::MissingElement { element } => {
                write!(f, "Missing required XML element: {}", element)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ExportError {}
