//! Structural document validation
//!
//! Checks a builder document before compilation:
//! - widget nesting depth (externally authored documents may nest
//!   arbitrarily; conversion recurses once per level)
//! - duplicate page ids
//!
//! Anything beyond structural shape is out of scope here; the converters
//! themselves tolerate malformed field values.

use std::collections::HashSet;

use thiserror::Error;

use crate::document::{BuilderDocument, Widget};

/// Deepest widget nesting the compiler accepts.
pub const MAX_WIDGET_DEPTH: usize = 32;

/// Structural problem found in a builder document.
#[derive(Debug, Error, PartialEq)]
pub enum DocumentError {
    #[error("Widget nesting on page '{page_id}' exceeds maximum depth ({depth} > {max})")]
    MaxDepthExceeded {
        page_id: String,
        depth: usize,
        max: usize,
    },

    #[error("Duplicate page id: {0}")]
    DuplicatePageId(String),
}

// Walks the widget tree iteratively so a hostile document cannot exhaust
// the stack before the depth check fires.
fn check_depth(page_id: &str, widgets: &[Widget]) -> Result<(), DocumentError> {
    let mut stack: Vec<(&Widget, usize)> = widgets.iter().map(|widget| (widget, 1)).collect();
    while let Some((widget, depth)) = stack.pop() {
        if depth > MAX_WIDGET_DEPTH {
            return Err(DocumentError::MaxDepthExceeded {
                page_id: page_id.to_string(),
                depth,
                max: MAX_WIDGET_DEPTH,
            });
        }
        for child in &widget.children {
            stack.push((child, depth + 1));
        }
    }
    Ok(())
}

/// Validates the structural shape of a builder document.
///
/// # Arguments
/// * `document` - The document to check
///
/// # Returns
/// `Ok(())` when the document is structurally sound, or the first
/// [`DocumentError`] encountered
pub fn validate_document(document: &BuilderDocument) -> Result<(), DocumentError> {
    let mut seen_ids = HashSet::new();
    for page in &document.pages {
        if !seen_ids.insert(page.id.as_str()) {
            return Err(DocumentError::DuplicatePageId(page.id.clone()));
        }
        check_depth(&page.id, &page.widgets)?;
    }
    Ok(())
}
