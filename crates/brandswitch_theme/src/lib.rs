//! Brandswitch Theme Core
//!
//! Switches a page between pre-built brand/mode design-token stylesheets by
//! rewriting the class list of the document root.
//!
//! # Overview
//!
//! The stylesheet bundle ships one `base` class with default token values
//! and one `brand-mode` class per pair (`Brand-A-Lightmode`,
//! `Brand-B-Darkmode`, ...). Activating a theme means the root element
//! carries exactly those two classes.
//!
//! - [`ThemeController`]: owns the active [`Selection`] and applies it
//! - [`ClassList`]: pure reset-then-set rewrite of the root class attribute
//! - [`refresh`]: mirrors resolved CSS variables into diagnostic text nodes
//! - [`PreferenceStore`]: best-effort persistence of the last selection
//! - [`ThemeConfig`]: class names, element ids, storage keys, token table
//!
//! # Quick Start
//!
//! ```rust
//! use brandswitch_theme::testing::{HeadlessDocument, MemoryStore};
//! use brandswitch_theme::{ThemeConfig, ThemeController};
//!
//! let document = HeadlessDocument::new().with_root_class("js");
//! let mut controller = ThemeController::new(ThemeConfig::default(), document, MemoryStore::new());
//!
//! controller.start();
//! assert_eq!(controller.document().root_classes(), ["base", "Brand-A-Lightmode"]);
//!
//! controller.select_mode("Darkmode");
//! assert_eq!(controller.document().root_classes(), ["base", "Brand-A-Darkmode"]);
//! ```
//!
//! # Platform seams
//!
//! The DOM and the storage medium are injected: implement [`ThemeDocument`]
//! and [`KeyValueStore`] for a host. The `brandswitch_web` extension provides
//! both for the browser; [`testing`] provides in-memory versions.

pub mod classes;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod refresh;
pub mod selection;
pub mod store;
pub mod testing;

// Re-export commonly used types
pub use classes::ClassList;
pub use config::{ComponentToken, DomConfig, StorageConfig, ThemeConfig};
pub use controller::ThemeController;
pub use document::ThemeDocument;
pub use error::{ConfigError, StoreError};
pub use selection::{compute_theme_class, Selection};
pub use store::{KeyValueStore, PreferenceStore, StoredPreference};
