//! Name-indexed pattern registry.

use rustc_hash::FxHashMap;

use super::pattern::Pattern;

/// Patterns looked up by name.
#[derive(Clone, Debug, Default)]
pub struct PatternLibrary {
    patterns: FxHashMap<String, Pattern>,
}

impl PatternLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Library holding the built-in patterns (glider, toad, beacon, methuselah).
    pub fn builtin() -> Self {
        let mut library = Self::new();
        for pattern in Pattern::builtins() {
            library.insert(pattern);
        }
        library
    }

    /// Add a pattern, replacing and returning any pattern of the same name.
    pub fn insert(&mut self, pattern: Pattern) -> Option<Pattern> {
        self.patterns.insert(pattern.name.clone(), pattern)
    }

    /// Look up a pattern by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.get(name)
    }

    /// Pattern names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.patterns.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Patterns sorted by name, so random picks over them are reproducible.
    #[must_use]
    pub fn patterns(&self) -> Vec<&Pattern> {
        let mut patterns: Vec<_> = self.patterns.values().collect();
        patterns.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        patterns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
