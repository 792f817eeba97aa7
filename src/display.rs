use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    ElementMissing { element_id: String },
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::ElementMissing { element_id } => {
                write!(f, "no element with id '{element_id}'")
            }
        }
    }
}

impl std::error::Error for DisplayError {}

/// Somewhere rendered output can land: a keyed set of display elements
/// whose text content can be replaced.
pub trait DisplaySink {
    /// Replace the text content of the element with the given id.
    /// Writing to an element the sink does not have is an error.
    fn replace_text(&mut self, element_id: &str, text: &str) -> Result<(), DisplayError>;
}

/// In-memory page model mapping element ids to their text content.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    elements: HashMap<String, String>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an (initially empty) element, builder-style.
    pub fn with_element(mut self, element_id: impl Into<String>) -> Self {
        self.elements.insert(element_id.into(), String::new());
        self
    }

    /// Current text content of an element, if the element exists.
    pub fn text(&self, element_id: &str) -> Option<&str> {
        self.elements.get(element_id).map(String::as_str)
    }
}

impl DisplaySink for MemoryPage {
    fn replace_text(&mut self, element_id: &str, text: &str) -> Result<(), DisplayError> {
        match self.elements.get_mut(element_id) {
            Some(content) => {
                *content = text.to_string();
                Ok(())
            }
            None => Err(DisplayError::ElementMissing {
                element_id: element_id.to_string(),
            }),
        }
    }
}
