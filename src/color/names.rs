#![allow(clippy::unreadable_literal)]

use crate::color::{Rgb, rgb_from_u32};

/// Fallback color returned by [`parse`] for names outside the table
pub const FALLBACK_COLOR: Rgb = rgb_from_u32(0xFF0000);

/// Named web colors accepted by [`lookup`], stored lowercase
pub const NAMED_COLORS: &[(&str, Rgb)] = &[
    // Base colors
    ("red", rgb_from_u32(0xFF0000)),
    ("green", rgb_from_u32(0x008000)),
    ("blue", rgb_from_u32(0x0000FF)),
    ("white", rgb_from_u32(0xFFFFFF)),
    ("black", rgb_from_u32(0x000000)),
    ("yellow", rgb_from_u32(0xFFFF00)),
    ("cyan", rgb_from_u32(0x00FFFF)),
    ("magenta", rgb_from_u32(0xFF00FF)),
    ("orange", rgb_from_u32(0xFFA500)),
    ("purple", rgb_from_u32(0x800080)),
    ("pink", rgb_from_u32(0xFFC0CB)),
    ("brown", rgb_from_u32(0xA52A2A)),
    // Light variants
    ("lightgreen", rgb_from_u32(0x90EE90)),
    ("lightblue", rgb_from_u32(0xADD8E6)),
    ("lightpink", rgb_from_u32(0xFFB6C1)),
    ("lightcyan", rgb_from_u32(0xE0FFFF)),
    ("lightyellow", rgb_from_u32(0xFFFFE0)),
    ("lightsteelblue", rgb_from_u32(0xB0C4DE)),
    // Dark variants
    ("darkred", rgb_from_u32(0x8B0000)),
    ("darkgreen", rgb_from_u32(0x006400)),
    ("darkblue", rgb_from_u32(0x00008B)),
    ("darkorange", rgb_from_u32(0xFF8C00)),
    ("darkviolet", rgb_from_u32(0x9400D3)),
    ("darkgray", rgb_from_u32(0xA9A9A9)),
    ("darkgrey", rgb_from_u32(0xA9A9A9)),
    ("darkcyan", rgb_from_u32(0x008B8B)),
    ("darkgoldenrod", rgb_from_u32(0xB8860B)),
    ("darkslateblue", rgb_from_u32(0x483D8B)),
    ("darkturquoise", rgb_from_u32(0x00CED1)),
    ("darkseagreen", rgb_from_u32(0x8FBC8F)),
    // Medium variants
    ("mediumblue", rgb_from_u32(0x0000CD)),
    ("mediumorchid", rgb_from_u32(0xBA55D3)),
    ("mediumspringgreen", rgb_from_u32(0x00FA9A)),
    // Greens and cyans
    ("springgreen", rgb_from_u32(0x00FF7F)),
    ("forestgreen", rgb_from_u32(0x228B22)),
    ("seagreen", rgb_from_u32(0x2E8B57)),
    ("limegreen", rgb_from_u32(0x32CD32)),
    ("lime", rgb_from_u32(0x00FF00)),
    ("aqua", rgb_from_u32(0x00FFFF)),
    ("aquamarine", rgb_from_u32(0x7FFFD4)),
    ("turquoise", rgb_from_u32(0x40E0D0)),
    ("palegreen", rgb_from_u32(0x98FB98)),
    ("paleturquoise", rgb_from_u32(0xAFEEEE)),
    // Blues
    ("powderblue", rgb_from_u32(0xB0E0E6)),
    ("steelblue", rgb_from_u32(0x4682B4)),
    ("royalblue", rgb_from_u32(0x4169E1)),
    ("cornflowerblue", rgb_from_u32(0x6495ED)),
    ("deepskyblue", rgb_from_u32(0x00BFFF)),
    ("dodgerblue", rgb_from_u32(0x1E90FF)),
    ("midnightblue", rgb_from_u32(0x191970)),
    ("navy", rgb_from_u32(0x000080)),
    ("indigo", rgb_from_u32(0x4B0082)),
    // Pinks and violets
    ("violet", rgb_from_u32(0xEE82EE)),
    ("fuchsia", rgb_from_u32(0xFF00FF)),
    ("hotpink", rgb_from_u32(0xFF69B4)),
    ("deeppink", rgb_from_u32(0xFF1493)),
    ("crimson", rgb_from_u32(0xDC143C)),
    // Reds and browns
    ("firebrick", rgb_from_u32(0xB22222)),
    ("maroon", rgb_from_u32(0x800000)),
    ("orangered", rgb_from_u32(0xFF4500)),
    ("tomato", rgb_from_u32(0xFF6347)),
    ("coral", rgb_from_u32(0xFF7F50)),
    ("chocolate", rgb_from_u32(0xD2691E)),
    ("saddlebrown", rgb_from_u32(0x8B4513)),
    ("sienna", rgb_from_u32(0xA0522D)),
    ("peru", rgb_from_u32(0xCD853F)),
    // Yellows
    ("goldenrod", rgb_from_u32(0xDAA520)),
    ("gold", rgb_from_u32(0xFFD700)),
    ("greenyellow", rgb_from_u32(0xADFF2F)),
    ("lemonchiffon", rgb_from_u32(0xFFFACD)),
    // Pales
    ("honeydew", rgb_from_u32(0xF0FFF0)),
    ("lavender", rgb_from_u32(0xE6E6FA)),
    ("thistle", rgb_from_u32(0xD8BFD8)),
    ("aliceblue", rgb_from_u32(0xF0F8FF)),
    // Grays and the rest
    ("gray", rgb_from_u32(0x808080)),
    ("grey", rgb_from_u32(0x808080)),
    ("silver", rgb_from_u32(0xC0C0C0)),
    ("teal", rgb_from_u32(0x008080)),
    ("cadetblue", rgb_from_u32(0x5F9EA0)),
    ("darkslategray", rgb_from_u32(0x2F4F4F)),
    ("darkslategrey", rgb_from_u32(0x2F4F4F)),
    ("indianred", rgb_from_u32(0xCD5C5C)),
];

/// Find a color by name, case-insensitive, surrounding whitespace ignored
///
/// Returns the canonical table entry so callers can keep the `'static`
/// name alongside the value.
pub fn lookup(name: &str) -> Option<(&'static str, Rgb)> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .copied()
}

/// Whether `name` is in the color table
pub fn is_valid(name: &str) -> bool {
    lookup(name).is_some()
}

/// Resolve a name to its RGB value, falling back to [`FALLBACK_COLOR`]
///
/// The fallback is not a success signal; callers that need rejection
/// semantics go through [`lookup`] or [`is_valid`] first.
pub fn parse(name: &str) -> Rgb {
    match lookup(name) {
        Some((_, color)) => color,
        None => FALLBACK_COLOR,
    }
}
