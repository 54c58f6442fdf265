//! Marker palette and deterministic per-officer color assignment.
//!
//! The hash reproduces the web console's string hash bit for bit, so an
//! officer keeps the same marker color in every client that renders it.

use serde::{Deserialize, Serialize};

/// Fixed marker palette.
pub const PALETTE: [&str; 20] = [
    "#FF5733", "#FFB900", "#00C853", "#00B8D4", "#2979FF", "#8E24AA", "#FF4081", "#F44336",
    "#FFEB3B", "#43A047", "#1DE9B6", "#3949AB", "#E040FB", "#FF6D00", "#C51162", "#00E676",
    "#0091EA", "#D500F9", "#FFD600", "#76FF03",
];

/// Index into [`PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteIndex(usize);

impl PaletteIndex {
    /// Returns the raw index.
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns the hex color for this index.
    pub fn hex(self) -> &'static str {
        PALETTE[self.0]
    }
}

impl std::fmt::Display for PaletteIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hex())
    }
}

/// String hash over UTF-16 code units.
///
/// Each step is `code_unit + ((int32(hash) << 5) - hash)`: the shift sees the
/// hash truncated to 32 bits, the subtraction sees the full value.
pub fn officer_hash(id: &str) -> i64 {
    id.encode_utf16().fold(0i64, |hash, unit| {
        let shifted = i64::from((hash as i32).wrapping_shl(5));
        i64::from(unit).wrapping_add(shifted.wrapping_sub(hash))
    })
}

/// Maps an officer identifier to its palette entry.
pub fn color_for(id: &str) -> PaletteIndex {
    let len = PALETTE.len() as u64;
    PaletteIndex((officer_hash(id).unsigned_abs() % len) as usize)
}
