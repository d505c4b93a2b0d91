//! Marker glyphs
//!
//! Diagnostic statements in the scanned sources are tagged with pictographic
//! glyphs (`console.log("🔍 ...")`). The set of glyphs is configuration data:
//! the built-in list below is the default, and config/env/CLI can replace or
//! extend it.
//!
//! Glyphs are configured as strings but matched one `char` at a time, the way
//! a regex character class treats them. A glyph written with a variation
//! selector (`⚠️` is U+26A0 U+FE0F) therefore contributes both code points,
//! and a bare U+FE0F after a `console.log` counts as a marker.

/// Built-in marker glyphs
pub const DEFAULT_GLYPHS: &[&str] = &[
    "🔍", "🆕", "📝", "✅", "🔄", "ℹ\u{fe0f}", "⚠\u{fe0f}", "🎯", "🔧", "🔹", "📊",
    "🗑\u{fe0f}", "✏\u{fe0f}", "🔒", "🔁", "❌", "📍", "📥", "🪑", "💡", "📖", "📅",
    "📋", "🚀", "🔑", "🏁", "🎨",
];

/// Ordered, de-duplicated set of marker code points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    chars: Vec<char>,
}

impl MarkerSet {
    /// A set that matches nothing
    pub fn empty() -> Self {
        Self { chars: Vec::new() }
    }

    /// Build a set from glyph strings; every `char` of every glyph is a marker
    pub fn from_glyphs<I, S>(glyphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        set.extend(glyphs);
        set
    }

    /// Add glyphs to the set, skipping code points already present
    pub fn extend<I, S>(&mut self, glyphs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for glyph in glyphs {
            for ch in glyph.as_ref().chars() {
                if !self.chars.contains(&ch) {
                    self.chars.push(ch);
                }
            }
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// True if any char of `text` is a marker
    pub fn matches_any(&self, text: &str) -> bool {
        text.chars().any(|ch| self.contains(ch))
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::from_glyphs(DEFAULT_GLYPHS)
    }
}
