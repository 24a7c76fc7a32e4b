#![allow(clippy::unreadable_literal)]

use crate::color::rgb_from_u32;
use crate::palette::Gradient16;

/// Create a 16-stop ramp from a list of hex colors (0xRRGGBB format)
macro_rules! hex_gradient {
    ($($color:expr),*) => {
        Gradient16::new([
            $(rgb_from_u32($color)),*
        ])
    };
}

// The seven stock ramps carry the FastLED color tables they are named after.

static RAINBOW: Gradient16 = hex_gradient![
    0xFF0000, 0xD52A00, 0xAB5500, 0xAB7F00,
    0xABAB00, 0x56D500, 0x00FF00, 0x00D52A,
    0x00AB55, 0x0056AA, 0x0000FF, 0x2A00D5,
    0x5500AB, 0x7F0081, 0xAB0055, 0xD5002B
];

static PARTY: Gradient16 = hex_gradient![
    0x5500AB, 0x84007C, 0xB5004B, 0xE5001B,
    0xE81700, 0xB84700, 0xAB7700, 0xABAB00,
    0xAB5500, 0xDD2200, 0xF2000E, 0xC2003E,
    0x8F0071, 0x5F00A1, 0x2F00D0, 0x0007F9
];

static OCEAN: Gradient16 = hex_gradient![
    0x191970, 0x00008B, 0x191970, 0x000080,
    0x00008B, 0x0000CD, 0x2E8B57, 0x008080,
    0x5F9EA0, 0x0000FF, 0x008B8B, 0x6495ED,
    0x7FFFD4, 0x2E8B57, 0x00FFFF, 0x87CEFA
];

static FOREST: Gradient16 = hex_gradient![
    0x006400, 0x006400, 0x556B2F, 0x006400,
    0x008000, 0x228B22, 0x6B8E23, 0x008000,
    0x2E8B57, 0x66CDAA, 0x32CD32, 0x9ACD32,
    0x90EE90, 0x7CFC00, 0x66CDAA, 0x228B22
];

static HEAT: Gradient16 = hex_gradient![
    0x000000, 0x330000, 0x660000, 0x990000,
    0xCC0000, 0xFF0000, 0xFF3300, 0xFF6600,
    0xFF9900, 0xFFCC00, 0xFFFF00, 0xFFFF33,
    0xFFFF66, 0xFFFF99, 0xFFFFCC, 0xFFFFFF
];

static CLOUD: Gradient16 = hex_gradient![
    0x0000FF, 0x00008B, 0x00008B, 0x00008B,
    0x00008B, 0x00008B, 0x00008B, 0x00008B,
    0x0000FF, 0x00008B, 0x87CEEB, 0x87CEEB,
    0xADD8E6, 0xFFFFFF, 0xADD8E6, 0x87CEEB
];

static LAVA: Gradient16 = hex_gradient![
    0x000000, 0x800000, 0x000000, 0x800000,
    0x8B0000, 0x800000, 0x8B0000, 0x8B0000,
    0x8B0000, 0xFF0000, 0xFFA500, 0xFFFFFF,
    0xFFA500, 0xFF0000, 0x8B0000, 0x000000
];

// Themed ramps, built from named web colors.

static CHRISTMAS: Gradient16 = hex_gradient![
    0xFF0000, 0x8B0000, 0x008000, 0x006400,
    0xFF0000, 0x008000, 0x8B0000, 0x228B22,
    0xDC143C, 0x32CD32, 0xFF0000, 0x008000,
    0x8B0000, 0x2E8B57, 0xFF0000, 0x006400
];

static AUTUMN: Gradient16 = hex_gradient![
    0xFF8C00, 0xFF4500, 0x800000, 0x8B4513,
    0xFFA500, 0xD2691E, 0xB8860B, 0xB22222,
    0xCD853F, 0xA0522D, 0xFF8C00, 0xA52A2A,
    0xDAA520, 0xCD5C5C, 0xFFA500, 0x8B4513
];

static CYBERPUNK: Gradient16 = hex_gradient![
    0xFF00FF, 0xFF1493, 0x800080, 0x00FFFF,
    0xFF69B4, 0x9400D3, 0x00FFFF, 0xFF00FF,
    0xBA55D3, 0x40E0D0, 0xEE82EE, 0x00BFFF,
    0xFF00FF, 0x800080, 0x00FFFF, 0xFF69B4
];

static HALLOWEEN: Gradient16 = hex_gradient![
    0xFFA500, 0xFF8C00, 0x800080, 0x000000,
    0xFF4500, 0x9400D3, 0xFFA500, 0x4B0082,
    0xD2691E, 0x800080, 0xFF8C00, 0x191970,
    0xFFA500, 0x483D8B, 0x8B4513, 0x800080
];

static WINTER: Gradient16 = hex_gradient![
    0x0000FF, 0x00008B, 0xFFFFFF, 0xB0C4DE,
    0x4682B4, 0xB0E0E6, 0xADD8E6, 0x000080,
    0x6495ED, 0xF0F8FF, 0x4169E1, 0xFFFFFF,
    0x1E90FF, 0xE0FFFF, 0x0000FF, 0x191970
];

static SPRING: Gradient16 = hex_gradient![
    0x90EE90, 0xFFC0CB, 0xFFB6C1, 0x98FB98,
    0x00FF7F, 0xD8BFD8, 0xFFFACD, 0xE0FFFF,
    0x00FA9A, 0xE6E6FA, 0xFFFFE0, 0x7FFFD4,
    0x90EE90, 0xFFC0CB, 0xF0FFF0, 0xAFEEEE
];

static SUNSET: Gradient16 = hex_gradient![
    0xFF0000, 0xFFA500, 0xFFFF00, 0xFFC0CB,
    0xDC143C, 0xFF8C00, 0xFFD700, 0xFF1493,
    0xFF4500, 0xFF7F50, 0xFFA500, 0xFFB6C1,
    0xFF0000, 0xFF6347, 0xFFFF00, 0xFF69B4
];

static DEEP_OCEAN: Gradient16 = hex_gradient![
    0x00008B, 0x191970, 0x000080, 0x483D8B,
    0x4B0082, 0x00CED1, 0x4682B4, 0x008B8B,
    0x0000CD, 0x8FBC8F, 0x5F9EA0, 0x2F4F4F,
    0x00008B, 0x008080, 0x000080, 0x191970
];

static NEON: Gradient16 = hex_gradient![
    0x00FF00, 0x00FFFF, 0xFF00FF, 0xFFFF00,
    0x00FF7F, 0x00FFFF, 0xFF00FF, 0xADFF2F,
    0x32CD32, 0x00BFFF, 0xFF69B4, 0xFFD700,
    0x00FF00, 0x40E0D0, 0xEE82EE, 0xFFFF00
];

static FIRE: Gradient16 = hex_gradient![
    0xFF0000, 0xFF4500, 0xFFA500, 0x8B0000,
    0xDC143C, 0xFF8C00, 0xFFFF00, 0xB22222,
    0xFF0000, 0xFF7F50, 0xFFD700, 0x800000,
    0xFF6347, 0xFFA500, 0xFF0000, 0x8B0000
];

/// Identifier for every fixed ramp in the catalog
///
/// Themed ramps answer to a short code (`u01`), a descriptive alias
/// (`christmas`) and the canonical combined name (`u01_christmas`).
/// `random` is not a catalog entry; it selects the random display mode
/// and is resolved by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteId {
    Rainbow,
    Party,
    Ocean,
    Forest,
    Heat,
    Cloud,
    Lava,
    Christmas,
    Autumn,
    Cyberpunk,
    Halloween,
    Winter,
    Spring,
    Sunset,
    DeepOcean,
    Neon,
    Fire,
}

/// Every accepted spelling, paired with its palette.
const NAMES: &[(&str, PaletteId)] = &[
    ("rainbow", PaletteId::Rainbow),
    ("party", PaletteId::Party),
    ("ocean", PaletteId::Ocean),
    ("forest", PaletteId::Forest),
    ("heat", PaletteId::Heat),
    ("cloud", PaletteId::Cloud),
    ("lava", PaletteId::Lava),
    ("u01", PaletteId::Christmas),
    ("christmas", PaletteId::Christmas),
    ("u01_christmas", PaletteId::Christmas),
    ("u02", PaletteId::Autumn),
    ("autumn", PaletteId::Autumn),
    ("u02_autumn", PaletteId::Autumn),
    ("u03", PaletteId::Cyberpunk),
    ("cyberpunk", PaletteId::Cyberpunk),
    ("u03_cyberpunk", PaletteId::Cyberpunk),
    ("u04", PaletteId::Halloween),
    ("halloween", PaletteId::Halloween),
    ("u04_halloween", PaletteId::Halloween),
    ("u05", PaletteId::Winter),
    ("winter", PaletteId::Winter),
    ("u05_winter", PaletteId::Winter),
    ("u06", PaletteId::Spring),
    ("spring", PaletteId::Spring),
    ("u06_spring", PaletteId::Spring),
    ("u07", PaletteId::Sunset),
    ("sunset", PaletteId::Sunset),
    ("u07_sunset", PaletteId::Sunset),
    ("u08", PaletteId::DeepOcean),
    ("deep_ocean", PaletteId::DeepOcean),
    ("u08_deep_ocean", PaletteId::DeepOcean),
    ("u09", PaletteId::Neon),
    ("neon", PaletteId::Neon),
    ("u09_neon", PaletteId::Neon),
    ("u10", PaletteId::Fire),
    ("fire", PaletteId::Fire),
    ("u10_fire", PaletteId::Fire),
];

impl PaletteId {
    /// All palettes, catalog order
    pub const ALL: [Self; 17] = [
        Self::Rainbow,
        Self::Party,
        Self::Ocean,
        Self::Forest,
        Self::Heat,
        Self::Cloud,
        Self::Lava,
        Self::Christmas,
        Self::Autumn,
        Self::Cyberpunk,
        Self::Halloween,
        Self::Winter,
        Self::Spring,
        Self::Sunset,
        Self::DeepOcean,
        Self::Neon,
        Self::Fire,
    ];

    /// Canonical name, the spelling status snapshots report and the
    /// persisted record stores
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => "rainbow",
            Self::Party => "party",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Heat => "heat",
            Self::Cloud => "cloud",
            Self::Lava => "lava",
            Self::Christmas => "u01_christmas",
            Self::Autumn => "u02_autumn",
            Self::Cyberpunk => "u03_cyberpunk",
            Self::Halloween => "u04_halloween",
            Self::Winter => "u05_winter",
            Self::Spring => "u06_spring",
            Self::Sunset => "u07_sunset",
            Self::DeepOcean => "u08_deep_ocean",
            Self::Neon => "u09_neon",
            Self::Fire => "u10_fire",
        }
    }

    /// Resolve any accepted spelling, case-insensitive, surrounding
    /// whitespace ignored
    pub fn parse_from_str(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        NAMES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, id)| *id)
    }

    /// The ramp this identifier names
    pub fn gradient(self) -> &'static Gradient16 {
        match self {
            Self::Rainbow => &RAINBOW,
            Self::Party => &PARTY,
            Self::Ocean => &OCEAN,
            Self::Forest => &FOREST,
            Self::Heat => &HEAT,
            Self::Cloud => &CLOUD,
            Self::Lava => &LAVA,
            Self::Christmas => &CHRISTMAS,
            Self::Autumn => &AUTUMN,
            Self::Cyberpunk => &CYBERPUNK,
            Self::Halloween => &HALLOWEEN,
            Self::Winter => &WINTER,
            Self::Spring => &SPRING,
            Self::Sunset => &SUNSET,
            Self::DeepOcean => &DEEP_OCEAN,
            Self::Neon => &NEON,
            Self::Fire => &FIRE,
        }
    }
}
