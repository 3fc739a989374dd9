//! Root class list rewrite
//!
//! The root element must carry exactly the base class plus one `brand-mode`
//! class. [`ClassList::rewrite`] computes that token sequence from whatever
//! the attribute currently holds; writing it back is left to the caller.

/// Token sequence for the root element's `class` attribute
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Reset-then-set rewrite of `current` for the given base and target class.
    ///
    /// Every token other than `base` and `target` is dropped, duplicates
    /// collapse, a missing `base` is prepended and a missing `target` appended.
    pub fn rewrite(current: &str, base: &str, target: &str) -> Self {
        let mut tokens: Vec<String> = Vec::with_capacity(2);
        for token in current.split_whitespace() {
            if (token == base || token == target) && !tokens.iter().any(|t| t == token) {
                tokens.push(token.to_owned());
            }
        }

        if !tokens.iter().any(|t| t == base) {
            tokens.insert(0, base.to_owned());
        }
        if !tokens.iter().any(|t| t == target) {
            tokens.push(target.to_owned());
        }

        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn contains(&self, class: &str) -> bool {
        self.tokens.iter().any(|t| t == class)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Join with single spaces for a full attribute replacement
    pub fn to_attribute(&self) -> String {
        self.tokens.join(" ")
    }
}
