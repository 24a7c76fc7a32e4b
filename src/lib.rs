#![no_std]

pub mod blend;
pub mod brightness;
pub mod color;
pub mod controller;
pub mod math8;
pub mod palette;
pub mod persist;
pub mod rand8;
pub mod renderer;
pub mod state;

pub use controller::{SetError, StripController};
pub use state::{BRIGHTNESS_LEVELS, DisplayMode, Status, StatusSource, level_brightness};
pub use persist::{ConfigStorage, PersistedConfig, RECORD_SIZE, StorageError, check_config};
pub use palette::{Gradient16, PaletteId, STOP_COUNT};
pub use renderer::PixelRenderer;
pub use blend::{PaletteBlender, blend_parameters};
pub use brightness::BrightnessGovernor;
pub use rand8::Rand8;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
    /// Apply a global output brightness
    fn set_brightness(&mut self, value: u8);
    /// Apply a supply power budget
    fn set_power_budget(&mut self, volts: u8, milliamps: u32);
}
