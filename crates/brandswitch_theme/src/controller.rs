//! Theme controller
//!
//! Owns the active [`Selection`] and keeps the root element's class attribute
//! equal to `{base, brand-mode}`. Every change runs the same sequence:
//!
//! 1. rewrite the root class attribute (full replacement)
//! 2. refresh the diagnostic displays from the new computed style
//! 3. notify change listeners
//! 4. persist the selection (user-driven changes only)
//!
//! Any class placed on the root element by other code is removed on every
//! apply.

use crate::classes::ClassList;
use crate::config::ThemeConfig;
use crate::document::ThemeDocument;
use crate::refresh;
use crate::selection::{compute_theme_class, Selection};
use crate::store::{KeyValueStore, PreferenceStore};
use indexmap::IndexMap;

type ChangeListener = Box<dyn FnMut(&Selection)>;

/// Brand/mode theme controller over an injected document and store
pub struct ThemeController<D, S> {
    config: ThemeConfig,
    document: D,
    store: PreferenceStore<S>,
    selection: Selection,
    listeners: Vec<ChangeListener>,
}

impl<D: ThemeDocument, S: KeyValueStore> ThemeController<D, S> {
    /// Create a controller. Nothing touches the document until
    /// [`start`](Self::start) or a selection change.
    pub fn new(config: ThemeConfig, document: D, backend: S) -> Self {
        let store = PreferenceStore::new(backend, config.storage.clone());
        let selection = config.default_selection();
        Self {
            config,
            document,
            store,
            selection,
            listeners: Vec::new(),
        }
    }

    /// Seed the selection from storage (falling back to configured
    /// defaults) and apply it. Does not write storage.
    pub fn start(&mut self) -> Selection {
        let stored = self.store.load();
        if stored.is_empty() {
            tracing::debug!("no stored theme selection, using defaults");
        } else {
            tracing::debug!(brand = ?stored.brand, mode = ?stored.mode, "restoring theme selection");
        }

        let selection = stored.resolve(&self.config.default_selection());
        self.apply_theme(selection.brand(), selection.mode());
        selection
    }

    /// Rewrite the root class list for `brand`/`mode` and refresh the
    /// diagnostic displays. Does not persist.
    pub fn apply_theme(&mut self, brand: &str, mode: &str) -> ClassList {
        let target = compute_theme_class(brand, mode);
        let classes = ClassList::rewrite(
            &self.document.root_class_name(),
            &self.config.base_class,
            &target,
        );
        let attribute = classes.to_attribute();
        self.document.set_root_class_name(&attribute);
        self.selection = Selection::new(brand, mode);

        tracing::debug!(brand, mode, class = %attribute, "applied theme");

        self.refresh_displays();
        for listener in &mut self.listeners {
            listener(&self.selection);
        }
        classes
    }

    /// Apply `selection`, then persist it
    pub fn set_selection(&mut self, selection: Selection) {
        self.apply_theme(selection.brand(), selection.mode());
        self.store.save(selection.brand(), selection.mode());
    }

    /// Brand control changed
    pub fn select_brand(&mut self, brand: &str) {
        self.set_selection(self.selection.with_brand(brand));
    }

    /// Mode control changed
    pub fn select_mode(&mut self, mode: &str) {
        self.set_selection(self.selection.with_mode(mode));
    }

    /// Switch to the next configured mode, wrapping around. A mode missing
    /// from the configured list moves to the first one.
    pub fn cycle_mode(&mut self) -> Selection {
        let modes = &self.config.modes;
        if modes.is_empty() {
            return self.selection.clone();
        }

        let next = match modes.iter().position(|m| m == self.selection.mode()) {
            Some(index) => &modes[(index + 1) % modes.len()],
            None => &modes[0],
        };
        let selection = self.selection.with_mode(next.clone());
        self.set_selection(selection.clone());
        selection
    }

    /// Re-read every diagnostic value from the current computed style
    pub fn refresh_displays(&self) {
        refresh::refresh_swatch_values(&self.document, &self.config.dom.variable_attribute);
        refresh::refresh_component_token_values(&self.document, &self.config.component_tokens);
        refresh::refresh_class_label(&self.document, &self.config.dom.class_label_id);
    }

    /// Current value of every component token, in table order
    pub fn resolved_tokens(&self) -> IndexMap<String, String> {
        refresh::resolved_token_map(&self.document, &self.config.component_tokens)
    }

    /// Register a callback run after every apply
    pub fn on_change(&mut self, listener: impl FnMut(&Selection) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The `brand-mode` class currently applied
    pub fn theme_class(&self) -> String {
        self.selection.theme_class()
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn store(&self) -> &PreferenceStore<S> {
        &self.store
    }
}

impl<D, S> std::fmt::Debug for ThemeController<D, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("selection", &self.selection)
            .field("base_class", &self.config.base_class)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
