//! Brandswitch browser backend
//!
//! Connects [`brandswitch_theme`] to a real page:
//!
//! - [`WebDocument`]: root class attribute, computed style and element
//!   lookup over `web-sys`
//! - [`LocalStorage`]: `window.localStorage` as the preference medium
//! - [`log`]: `tracing` events forwarded to the browser console
//! - [`start`] / [`start_with_config`]: JS entry points that restore the
//!   stored selection and bind the brand and mode `<select>` controls
//!
//! # Page contract
//!
//! ```html
//! <select id="brand-select">
//!   <option>Brand-A</option><option>Brand-B</option>
//! </select>
//! <select id="mode-select">
//!   <option>Lightmode</option><option>Darkmode</option>
//! </select>
//! <span data-var="--color-primary"></span>
//! <code id="current-class"></code>
//! <script type="module">
//!   import init, { start } from "./brandswitch_web.js";
//!   await init();
//!   const switcher = start();
//! </script>
//! ```
//!
//! A missing root element or select control makes `start` throw.
//!
//! Everything touching `web-sys` is compiled for `wasm32` only.

pub mod error;
pub mod log;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod storage;

pub use error::{Result, WebError};
pub use log::{init_logging, MakeConsoleWriter};

#[cfg(target_arch = "wasm32")]
pub use app::{mount, start, start_with_config, ThemeSwitcher};
#[cfg(target_arch = "wasm32")]
pub use dom::WebDocument;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
