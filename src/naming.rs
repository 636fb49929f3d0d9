//! Title normalization and run-wide identifier de-duplication.

use regex::Regex;

use crate::translit;

/// Turns display titles into template-safe names.
/// The non-word pattern is compiled once and reused across the whole walk.
pub struct NameNormalizer {
    /// Matches every run of characters outside the word class.
    non_word: Regex,
}

impl NameNormalizer {
    /// # Panics
    ///
    /// Panics if the hardcoded non-word regex is invalid (compile-time invariant).
    pub fn new() -> Self {
        return Self {
            non_word: Regex::new(r"\W+").expect("valid regex"),
        };
    }

    /// Human-readable name: strip non-word runs, keep the original script.
    /// Cyrillic letters count as word characters and survive intact.
    pub fn display_name(&self, title: &str) -> String {
        return self.non_word.replace_all(title, "").into_owned();
    }

    /// Machine identifier: transliterate to Latin, then strip non-word runs.
    /// The result contains only letters, digits, and underscores.
    pub fn host_name(&self, title: &str) -> String {
        let latin = translit::cyrillic_to_latin(title);
        return self.non_word.replace_all(&latin, "").into_owned();
    }
}

/// Every identifier issued during one run, in issue order.
/// This is the only mutable state the traversal carries; it is owned by the
/// walk context, never process-global.
pub struct IdentifierRegistry {
    /// Identifiers already handed out, suffixed forms included.
    issued: Vec<String>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        return Self { issued: Vec::new() };
    }

    /// Return `candidate` untouched on first sight, `candidate_k` on the
    /// k-th literal repeat, and record whichever form was returned.
    ///
    /// Occurrence counting matches the raw candidate literally. Because the
    /// suffixed form is what gets recorded, a third literal repeat counts
    /// only one prior raw occurrence and produces the same `_1` suffix
    /// again; a pre-existing literal `candidate_1` title clashes the same
    /// way. Known limitation, kept for output compatibility.
    pub fn resolve(&mut self, candidate: &str) -> String {
        let seen = self
            .issued
            .iter()
            .filter(|issued| issued.as_str() == candidate)
            .count();
        let resolved = if seen == 0 {
            candidate.to_string()
        } else {
            format!("{candidate}_{seen}")
        };
        self.issued.push(resolved.clone());
        return resolved;
    }
}
