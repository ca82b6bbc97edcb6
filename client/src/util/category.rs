//! Category badge colors.
//!
//! Lookups never fail: unknown categories get the neutral pair.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

/// Background/text color pair for a category badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeColors {
    pub background: &'static str,
    pub text: &'static str,
}

impl BadgeColors {
    /// Inline style for the badge element.
    #[must_use]
    pub fn style(self) -> String {
        format!("background-color: {}; color: {};", self.background, self.text)
    }
}

pub const DEFAULT_BADGE: BadgeColors = BadgeColors { background: "#f3f4f6", text: "#1f2937" };

const BADGES: [(&str, BadgeColors); 4] = [
    ("Daily Communion", BadgeColors { background: "#dbeafe", text: "#1e40af" }),
    ("GIBC | 2nd Cycle | Topic 101-150", BadgeColors { background: "#dcfce7", text: "#166534" }),
    ("GIBC | 1st Cycle | Topic 1-50", BadgeColors { background: "#f3e8ff", text: "#6b21a8" }),
    ("GIBC | 1st Cycle | Topic 51-100", BadgeColors { background: "#ffedd5", text: "#9a3412" }),
];

/// Resolve the badge colors for a category label (exact match).
#[must_use]
pub fn badge_colors(category: &str) -> BadgeColors {
    BADGES
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(DEFAULT_BADGE, |(_, colors)| *colors)
}
