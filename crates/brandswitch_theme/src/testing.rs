//! In-memory stand-ins for the DOM and browser storage.
//!
//! Useful for:
//! - Unit and integration tests of the controller
//! - Native hosts that want to preview a brand/mode pair
//!
//! [`HeadlessDocument`] models just enough of a page: a root `class`
//! attribute, a list of stylesheet rules keyed by class, and a flat set of
//! elements with ids, attributes and text. Custom properties resolve the way
//! equal-specificity rules cascade: the last rule whose class is on the root
//! wins.

use crate::document::ThemeDocument;
use crate::error::{StoreError, StoreResult};
use crate::store::KeyValueStore;
use indexmap::IndexMap;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

/// Handle to an element in a [`HeadlessDocument`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug, Default)]
struct HeadlessNode {
    id: Option<String>,
    attributes: HashMap<String, String>,
    text: String,
}

/// In-memory page with a root element, stylesheet rules and elements
#[derive(Debug, Default)]
pub struct HeadlessDocument {
    root_class: RefCell<String>,
    rules: IndexMap<String, IndexMap<String, String>>,
    nodes: RefCell<Vec<HeadlessNode>>,
    root_writes: Cell<usize>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing root `class` attribute
    pub fn with_root_class(self, class: &str) -> Self {
        *self.root_class.borrow_mut() = class.to_string();
        self
    }

    /// Add a stylesheet rule `.class { name: value; ... }`. Rules added later
    /// win over earlier ones.
    pub fn with_rule<'a>(
        mut self,
        class: &str,
        properties: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let rule = self.rules.entry(class.to_string()).or_default();
        for (name, value) in properties {
            rule.insert(name.to_string(), value.to_string());
        }
        self
    }

    /// Add an element with an id
    pub fn add_element(&self, id: &str) -> NodeId {
        self.push(HeadlessNode {
            id: Some(id.to_string()),
            ..Default::default()
        })
    }

    /// Add an anonymous element carrying one attribute
    pub fn add_tagged(&self, attribute: &str, value: &str) -> NodeId {
        let mut node = HeadlessNode::default();
        node.attributes
            .insert(attribute.to_string(), value.to_string());
        self.push(node)
    }

    fn push(&self, node: HeadlessNode) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        NodeId(nodes.len() - 1)
    }

    /// Overwrite the root class as unrelated page code would
    pub fn set_root_class_externally(&self, class: &str) {
        *self.root_class.borrow_mut() = class.to_string();
    }

    /// Current text of an element
    pub fn text(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].text.clone()
    }

    /// Text of the element with `id`, if present
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.node_by_id(id).map(|node| self.text(node))
    }

    /// Root class tokens, in attribute order
    pub fn root_classes(&self) -> Vec<String> {
        self.root_class
            .borrow()
            .split_whitespace()
            .map(str::to_owned)
            .collect()
    }

    /// Number of times the controller replaced the root class attribute
    pub fn root_writes(&self) -> usize {
        self.root_writes.get()
    }
}

impl ThemeDocument for HeadlessDocument {
    type Node = NodeId;

    fn root_class_name(&self) -> String {
        self.root_class.borrow().clone()
    }

    fn set_root_class_name(&self, value: &str) {
        *self.root_class.borrow_mut() = value.to_string();
        self.root_writes.set(self.root_writes.get() + 1);
    }

    fn resolved_property(&self, name: &str) -> String {
        let classes = self.root_classes();
        self.rules
            .iter()
            .filter(|(class, _)| classes.iter().any(|c| c == *class))
            .filter_map(|(_, rule)| rule.get(name))
            .last()
            .cloned()
            .unwrap_or_default()
    }

    fn nodes_with_attribute(&self, attribute: &str) -> Vec<(NodeId, String)> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter_map(|(index, node)| {
                node.attributes
                    .get(attribute)
                    .map(|value| (NodeId(index), value.clone()))
            })
            .collect()
    }

    fn node_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .position(|node| node.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.nodes.borrow_mut()[node.0].text = text.to_string();
    }
}

/// In-memory [`KeyValueStore`] that can be told to fail
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    rejected_keys: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an entry
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Every read returns [`StoreError::Unavailable`]
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Every write returns [`StoreError::QuotaExceeded`]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Writes to `key` return [`StoreError::QuotaExceeded`]; other keys work
    pub fn failing_writes_for(mut self, key: &str) -> Self {
        self.rejected_keys.insert(key.to_string());
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw entry, bypassing failure injection
    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_reads {
            return Err(StoreError::Unavailable("reads disabled".into()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes || self.rejected_keys.contains(key) {
            return Err(StoreError::QuotaExceeded(format!("cannot store {key}")));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::Backend(format!("cannot remove {key}")));
        }
        self.entries.remove(key);
        Ok(())
    }
}
