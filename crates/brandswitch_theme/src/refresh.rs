//! Diagnostic display refresh
//!
//! Mirrors resolved CSS custom property values into text nodes so the page
//! shows which tokens the active stylesheet pair produced. Missing elements
//! are skipped silently; nothing here can fail a theme switch.

use crate::config::ComponentToken;
use crate::document::ThemeDocument;
use indexmap::IndexMap;

/// Resolve `variable` on the root element and trim surrounding whitespace
pub fn resolved_value<D: ThemeDocument>(document: &D, variable: &str) -> String {
    document.resolved_property(variable).trim().to_string()
}

/// Update every element tagged with `attribute` to show the value of the
/// variable the attribute names. Returns the number of elements written.
pub fn refresh_swatch_values<D: ThemeDocument>(document: &D, attribute: &str) -> usize {
    let nodes = document.nodes_with_attribute(attribute);
    for (node, variable) in &nodes {
        let value = resolved_value(document, variable);
        tracing::trace!(variable = %variable, value = %value, "swatch");
        document.set_text(node, &value);
    }
    nodes.len()
}

/// Update the fixed component-token table. Rows whose element is absent are
/// skipped. Returns the number of elements written.
pub fn refresh_component_token_values<D: ThemeDocument>(
    document: &D,
    table: &[ComponentToken],
) -> usize {
    let mut written = 0;
    for token in table {
        let Some(node) = document.node_by_id(&token.element_id) else {
            continue;
        };
        let value = resolved_value(document, &token.variable);
        tracing::trace!(element = %token.element_id, value = %value, "component token");
        document.set_text(&node, &value);
        written += 1;
    }
    written
}

/// Write the root element's class attribute verbatim into the label element.
/// Returns `false` when the label is absent.
pub fn refresh_class_label<D: ThemeDocument>(document: &D, label_id: &str) -> bool {
    match document.node_by_id(label_id) {
        Some(node) => {
            document.set_text(&node, &document.root_class_name());
            true
        }
        None => false,
    }
}

/// Snapshot of the component-token table as `variable -> trimmed value`,
/// in table order
pub fn resolved_token_map<D: ThemeDocument>(
    document: &D,
    table: &[ComponentToken],
) -> IndexMap<String, String> {
    table
        .iter()
        .map(|token| {
            (
                token.variable.clone(),
                resolved_value(document, &token.variable),
            )
        })
        .collect()
}
