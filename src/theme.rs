//! Opaque theme color references for status badges.
//!
//! A [`ColorRef`] is an ordered palette of eleven stops (shades 50..950 of a
//! Tailwind-style scale). This module only carries the data; interpreting the
//! stops is the UI consumer's business.

/// Reference to a named badge palette. Ordered lightest to darkest.
pub type ColorRef = &'static [&'static str];

pub const ORANGE: ColorRef = &[
    "#fff7ed", "#ffedd5", "#fed7aa", "#fdba74", "#fb923c", "#f97316",
    "#ea580c", "#c2410c", "#9a3412", "#7c2d12", "#431407",
];

pub const YELLOW: ColorRef = &[
    "#fefce8", "#fef9c3", "#fef08a", "#fde047", "#facc15", "#eab308",
    "#ca8a04", "#a16207", "#854d0e", "#713f12", "#422006",
];

pub const GREEN: ColorRef = &[
    "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e",
    "#16a34a", "#15803d", "#166534", "#14532d", "#052e16",
];

pub const PURPLE: ColorRef = &[
    "#faf5ff", "#f3e8ff", "#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7",
    "#9333ea", "#7e22ce", "#6b21a8", "#581c87", "#3b0764",
];

pub const RED: ColorRef = &[
    "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444",
    "#dc2626", "#b91c1c", "#991b1b", "#7f1d1d", "#450a0a",
];

pub const SKY: ColorRef = &[
    "#f0f9ff", "#e0f2fe", "#bae6fd", "#7dd3fc", "#38bdf8", "#0ea5e9",
    "#0284c7", "#0369a1", "#075985", "#0c4a6e", "#082f49",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_carry_eleven_stops() {
        for palette in [ORANGE, YELLOW, GREEN, PURPLE, RED, SKY] {
            assert_eq!(palette.len(), 11);
        }
    }
}
