//! Format registry mapping format names to their column layouts
//!
//! The registry is populated by the spec parser and consulted by the data
//! parser. An entry is written once: later registrations under the same name
//! are ignored so that tables created from the first layout stay valid.

use crate::app::models::FormatLayout;
use std::collections::HashMap;
use tracing::debug;

/// Registry providing O(1) layout lookups by format name
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    /// Layouts indexed by format name
    layouts: HashMap<String, FormatLayout>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the layout registered for a format
    pub fn get(&self, format_name: &str) -> Option<&FormatLayout> {
        self.layouts.get(format_name)
    }

    /// Get the ordered column widths registered for a format
    pub fn widths(&self, format_name: &str) -> Option<Vec<usize>> {
        self.get(format_name).map(FormatLayout::widths)
    }

    /// Register a layout unless its format name is already present.
    ///
    /// Returns `true` when the layout was inserted. The first registration wins.
    pub fn put(&mut self, layout: FormatLayout) -> bool {
        if self.layouts.contains_key(&layout.format_name) {
            debug!(
                "Format '{}' already registered, keeping existing layout",
                layout.format_name
            );
            return false;
        }

        debug!(
            "Registering format '{}' with widths {:?}",
            layout.format_name,
            layout.widths()
        );
        self.layouts.insert(layout.format_name.clone(), layout);
        true
    }

    /// Remove a format, returning its layout if it was registered
    pub fn remove(&mut self, format_name: &str) -> Option<FormatLayout> {
        self.layouts.remove(format_name)
    }

    /// Check if a format is registered
    pub fn contains(&self, format_name: &str) -> bool {
        self.layouts.contains_key(format_name)
    }

    /// Number of registered formats
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Registered format names, sorted for stable output
    pub fn format_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.layouts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
