//! Colours in ARGB8888 format.

pub const BACKGROUND: u32 = 0xFFEEEEEE;
pub const OUTLINE: u32 = 0xFF000000;
pub const MARKER: u32 = 0xFFD03030;

/// Splits an ARGB8888 colour into its `[r, g, b, a]` bytes.
#[inline]
pub fn to_rgba(color: u32) -> [u8; 4] {
    [
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
        (color >> 24) as u8,
    ]
}
