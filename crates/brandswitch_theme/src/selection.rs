//! The active brand/mode pair

use std::fmt::{Display, Formatter};

/// Build the stylesheet class for a brand/mode pair.
///
/// Literal `brand + "-" + mode`, no normalization. Identifiers that match no
/// stylesheet produce a class that simply styles nothing.
pub fn compute_theme_class(brand: &str, mode: &str) -> String {
    let mut class = String::with_capacity(brand.len() + mode.len() + 1);
    class.push_str(brand);
    class.push('-');
    class.push_str(mode);
    class
}

/// Current (brand, mode) selection.
///
/// Replaced as a whole on every change, never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selection {
    brand: String,
    mode: String,
}

impl Selection {
    pub fn new(brand: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            mode: mode.into(),
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Same mode, different brand
    pub fn with_brand(&self, brand: impl Into<String>) -> Self {
        Self::new(brand, self.mode.clone())
    }

    /// Same brand, different mode
    pub fn with_mode(&self, mode: impl Into<String>) -> Self {
        Self::new(self.brand.clone(), mode)
    }

    /// The `brand-mode` class this selection activates
    pub fn theme_class(&self) -> String {
        compute_theme_class(&self.brand, &self.mode)
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.brand, self.mode)
    }
}
