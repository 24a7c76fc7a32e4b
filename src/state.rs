use crate::{
    color::{Rgb, names::FALLBACK_COLOR},
    palette::{Gradient16, PaletteId},
};

/// Output brightness for each user-facing level
///
/// Level 0 exists only as a table entry; the setters accept 1 through 5
/// and power-off is expressed through the enabled flag instead.
pub const BRIGHTNESS_LEVELS: [u8; 6] = [0, 26, 64, 128, 192, 255];

#[allow(clippy::cast_lossless)]
pub const fn level_brightness(level: u8) -> u8 {
    if level as usize >= BRIGHTNESS_LEVELS.len() {
        BRIGHTNESS_LEVELS[BRIGHTNESS_LEVELS.len() - 1]
    } else {
        BRIGHTNESS_LEVELS[level as usize]
    }
}

/// What the strip is showing
///
/// Exactly one source is active at a time. `Random` keeps no payload;
/// the five-second regeneration owns the target ramp while it is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// A fixed ramp from the catalog
    Palette(PaletteId),
    /// A single color across the whole strip
    Solid,
    /// Freshly generated ramps on a fixed cadence
    Random,
}

/// Everything the setters mutate and the persistence layer captures.
#[derive(Debug, Clone)]
pub(crate) struct LedState {
    pub(crate) enabled: bool,
    pub(crate) brightness_level: u8,
    pub(crate) fade_enabled: bool,
    pub(crate) blend_speed: u8,
    pub(crate) mode: DisplayMode,
    pub(crate) solid_color: Rgb,
    pub(crate) solid_color_name: Option<&'static str>,
    pub(crate) max_volts: u8,
    pub(crate) max_milliamps: u32,
    pub(crate) current_palette: Gradient16,
    pub(crate) target_palette: Gradient16,
}

impl LedState {
    pub(crate) fn new() -> Self {
        let boot_palette = *PaletteId::Party.gradient();
        Self {
            enabled: true,
            brightness_level: 3,
            fade_enabled: true,
            blend_speed: 4,
            mode: DisplayMode::Palette(PaletteId::Party),
            solid_color: FALLBACK_COLOR,
            solid_color_name: None,
            max_volts: 5,
            max_milliamps: 500,
            current_palette: boot_palette,
            target_palette: boot_palette,
        }
    }
}

impl Default for LedState {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the displayed colors come from, as reported in a [`Status`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSource {
    Solid {
        color: Rgb,
        /// Set when the color came in by name rather than raw channels
        name: Option<&'static str>,
    },
    /// Canonical palette name, or `"random"`
    Palette(&'static str),
}

/// One-shot snapshot of the user-visible settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub enabled: bool,
    pub brightness_level: u8,
    pub fade_enabled: bool,
    pub blend_speed: u8,
    pub source: StatusSource,
    pub max_volts: u8,
    pub max_milliamps: u32,
}
