//! The page the controller drives
//!
//! [`ThemeDocument`] is everything the controller and the display
//! refreshers need from the DOM. The browser backend implements it over
//! `web-sys`; [`HeadlessDocument`](crate::testing::HeadlessDocument)
//! implements it in memory.
//!
//! DOM writes are treated as infallible. Optional diagnostic elements are
//! looked up with `Option` and skipped when absent.

/// DOM contract consumed by the theme controller
pub trait ThemeDocument {
    /// Handle to a diagnostic element
    type Node;

    /// Full `class` attribute of the root element
    fn root_class_name(&self) -> String;

    /// Replace the root element's `class` attribute
    fn set_root_class_name(&self, value: &str);

    /// Resolved value of a custom property on the root element's computed
    /// style, untrimmed. Unknown properties resolve to an empty string.
    fn resolved_property(&self, name: &str) -> String;

    /// Every element carrying `attribute`, paired with that attribute's value
    fn nodes_with_attribute(&self, attribute: &str) -> Vec<(Self::Node, String)>;

    /// Optional element lookup by id
    fn node_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Replace an element's text content
    fn set_text(&self, node: &Self::Node, text: &str);
}
