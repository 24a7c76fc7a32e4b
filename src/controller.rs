use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use heapless::String;

use crate::OutputDriver;
use crate::blend::PaletteBlender;
use crate::brightness::BrightnessGovernor;
use crate::color::{Rgb, names};
use crate::palette::{Gradient16, PaletteId};
use crate::persist::{ConfigStorage, PersistedConfig, RECORD_SIZE, StorageError};
use crate::renderer::PixelRenderer;
use crate::state::{DisplayMode, LedState, Status, StatusSource, level_brightness};

/// Rejected setter input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// Numeric argument outside its accepted range
    OutOfRange,
    /// Name with no catalog entry
    UnknownName,
}

/// Strip controller - the main orchestrator
///
/// Owns the user-facing settings and the animation machinery, and drives
/// an [`OutputDriver`] from [`update`](Self::update). Setters validate
/// before they mutate, so a rejected call never leaves partial state
/// behind.
pub struct StripController<D: OutputDriver, const MAX_LEDS: usize> {
    driver: D,
    led_count: usize,

    state: LedState,

    governor: BrightnessGovernor,
    blender: PaletteBlender,
    renderer: PixelRenderer,
    frame: [Rgb; MAX_LEDS],
}

impl<D: OutputDriver, const MAX_LEDS: usize> StripController<D, MAX_LEDS> {
    /// Create a controller over `driver` for `led_count` pixels
    ///
    /// A count beyond `MAX_LEDS` is clamped to the frame buffer.
    pub fn new(driver: D, led_count: usize) -> Self {
        let state = LedState::new();
        let governor = BrightnessGovernor::new(level_brightness(state.brightness_level));
        Self {
            driver,
            led_count: led_count.min(MAX_LEDS),
            state,
            governor,
            blender: PaletteBlender::new(),
            renderer: PixelRenderer::new(),
            frame: [Rgb::default(); MAX_LEDS],
        }
    }

    /// Process one frame
    ///
    /// Call this continuously; every time-gated behavior derives its pace
    /// from `now`, not from the call rate.
    pub fn update(&mut self, now: Instant) {
        let level = level_brightness(self.state.brightness_level);
        if let Some(value) = self.governor.tick(now, self.state.enabled, level) {
            self.driver.set_brightness(value);
        }

        let regenerate = matches!(self.state.mode, DisplayMode::Random);
        self.blender.tick(
            now,
            self.state.blend_speed,
            regenerate,
            &mut self.state.current_palette,
            &mut self.state.target_palette,
        );

        self.renderer.render(
            now,
            &self.state.current_palette,
            self.state.fade_enabled,
            &mut self.frame[..self.led_count],
        );
        self.driver.write(&self.frame[..self.led_count]);
    }

    /// Show a single color given as raw channel values
    ///
    /// Channels clamp into 0-255, so any integer input is accepted.
    pub fn set_rgb(&mut self, r: i32, g: i32, b: i32) {
        let color = Rgb {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        };
        self.enter_solid(color, None);
    }

    /// Show a single color given by name
    pub fn set_color(&mut self, name: &str) -> Result<(), SetError> {
        let Some((canonical, color)) = names::lookup(name) else {
            return Err(SetError::UnknownName);
        };
        self.enter_solid(color, Some(canonical));
        Ok(())
    }

    /// Select a brightness level, 1 through 5
    pub fn set_bright(&mut self, level: u8) -> Result<(), SetError> {
        if !(1..=5).contains(&level) {
            return Err(SetError::OutOfRange);
        }
        self.state.brightness_level = level;
        if self.state.enabled {
            self.governor.set_target(level_brightness(level));
        }
        Ok(())
    }

    /// Select a palette blend speed, 1 (slow) through 5 (fast)
    pub fn set_blend_speed(&mut self, speed: u8) -> Result<(), SetError> {
        if !(1..=5).contains(&speed) {
            return Err(SetError::OutOfRange);
        }
        self.state.blend_speed = speed;
        Ok(())
    }

    /// Turn the strip on or off
    ///
    /// Off is an eased ramp to zero, not a blackout; the stored level
    /// survives for the next power-on.
    pub fn set_switch(&mut self, on: bool) {
        self.state.enabled = on;
        let target = if on {
            level_brightness(self.state.brightness_level)
        } else {
            0
        };
        self.governor.set_target(target);
    }

    pub fn set_switch_str(&mut self, value: &str) -> Result<(), SetError> {
        self.set_switch(parse_on_off(value)?);
        Ok(())
    }

    /// Enable or disable the per-pixel brightness shimmer
    pub fn set_fade(&mut self, on: bool) {
        self.state.fade_enabled = on;
    }

    pub fn set_fade_str(&mut self, value: &str) -> Result<(), SetError> {
        self.set_fade(parse_on_off(value)?);
        Ok(())
    }

    /// Select a palette by any accepted spelling, or `random`
    pub fn set_palette(&mut self, name: &str) -> Result<(), SetError> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("random") {
            self.state.mode = DisplayMode::Random;
            #[cfg(feature = "esp32-log")]
            println!("[StripController.set_palette] random mode");
            return Ok(());
        }
        let Some(id) = PaletteId::parse_from_str(name) else {
            return Err(SetError::UnknownName);
        };
        self.state.mode = DisplayMode::Palette(id);
        self.state.target_palette = *id.gradient();
        #[cfg(feature = "esp32-log")]
        println!("[StripController.set_palette] {}", id.as_str());
        Ok(())
    }

    /// Set the power budget forwarded to the driver
    ///
    /// Volts accept 3-24, current 50-20000 mA.
    pub fn set_max_power(&mut self, volts: u8, milliamps: u32) -> Result<(), SetError> {
        if !(3..=24).contains(&volts) || !(50..=20_000).contains(&milliamps) {
            return Err(SetError::OutOfRange);
        }
        self.state.max_volts = volts;
        self.state.max_milliamps = milliamps;
        self.driver.set_power_budget(volts, milliamps);
        Ok(())
    }

    pub const fn rgb(&self) -> Rgb {
        self.state.solid_color
    }

    pub const fn color_name(&self) -> Option<&'static str> {
        self.state.solid_color_name
    }

    pub const fn brightness_level(&self) -> u8 {
        self.state.brightness_level
    }

    pub const fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    pub const fn fade_enabled(&self) -> bool {
        self.state.fade_enabled
    }

    pub const fn blend_speed(&self) -> u8 {
        self.state.blend_speed
    }

    pub const fn max_volts(&self) -> u8 {
        self.state.max_volts
    }

    pub const fn max_milliamps(&self) -> u32 {
        self.state.max_milliamps
    }

    /// Brightness currently applied to the driver, which trails the
    /// selected level while the easing converges
    pub const fn actual_brightness(&self) -> u8 {
        self.governor.actual()
    }

    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Name of the active source: a canonical palette name,
    /// `"solid_color"`, or `"random"`
    pub const fn palette_name(&self) -> &'static str {
        match self.state.mode {
            DisplayMode::Solid => "solid_color",
            DisplayMode::Random => "random",
            DisplayMode::Palette(id) => id.as_str(),
        }
    }

    /// Snapshot of the user-visible settings
    pub const fn status(&self) -> Status {
        let source = match self.state.mode {
            DisplayMode::Solid => StatusSource::Solid {
                color: self.state.solid_color,
                name: self.state.solid_color_name,
            },
            DisplayMode::Random => StatusSource::Palette("random"),
            DisplayMode::Palette(id) => StatusSource::Palette(id.as_str()),
        };
        Status {
            enabled: self.state.enabled,
            brightness_level: self.state.brightness_level,
            fade_enabled: self.state.fade_enabled,
            blend_speed: self.state.blend_speed,
            source,
            max_volts: self.state.max_volts,
            max_milliamps: self.state.max_milliamps,
        }
    }

    /// Write the current settings to `storage`
    pub fn save_config<S: ConfigStorage>(&self, storage: &mut S) -> Result<(), StorageError> {
        let record = self.to_persisted().encode();
        storage.write(&record)
    }

    /// Restore settings from `storage`
    ///
    /// The record is read and decoded in full before anything is applied;
    /// on any error the controller keeps its current settings.
    pub fn load_config<S: ConfigStorage>(&mut self, storage: &mut S) -> Result<(), StorageError> {
        let mut record = [0u8; RECORD_SIZE];
        storage.read(&mut record)?;
        let config = PersistedConfig::decode(&record)?;
        self.apply_config(&config);
        #[cfg(feature = "esp32-log")]
        println!("[StripController.load_config] restored {}", self.palette_name());
        Ok(())
    }

    fn enter_solid(&mut self, color: Rgb, name: Option<&'static str>) {
        self.state.mode = DisplayMode::Solid;
        self.state.solid_color = color;
        self.state.solid_color_name = name;
        self.state.target_palette = Gradient16::solid(color);
    }

    fn to_persisted(&self) -> PersistedConfig {
        PersistedConfig {
            enabled: self.state.enabled,
            brightness_level: self.state.brightness_level,
            fade_enabled: self.state.fade_enabled,
            use_solid_color: matches!(self.state.mode, DisplayMode::Solid),
            solid_color: self.state.solid_color,
            palette_name: String::try_from(self.palette_name()).unwrap_or_default(),
            solid_color_name: String::try_from(self.state.solid_color_name.unwrap_or(""))
                .unwrap_or_default(),
            use_random_palette: matches!(self.state.mode, DisplayMode::Random),
            blend_speed: self.state.blend_speed,
        }
    }

    /// Map a decoded record onto the live state
    ///
    /// Out-of-range numeric fields fall back to their boot defaults. A
    /// stored color name is re-resolved through the catalog, so the name
    /// wins over the raw channels when both are present.
    fn apply_config(&mut self, config: &PersistedConfig) {
        self.state.enabled = config.enabled;
        self.state.fade_enabled = config.fade_enabled;
        self.state.brightness_level = if (1..=5).contains(&config.brightness_level) {
            config.brightness_level
        } else {
            3
        };
        self.state.blend_speed = if (1..=5).contains(&config.blend_speed) {
            config.blend_speed
        } else {
            4
        };

        match names::lookup(&config.solid_color_name) {
            Some((canonical, color)) => {
                self.state.solid_color = color;
                self.state.solid_color_name = Some(canonical);
            }
            None => {
                self.state.solid_color = config.solid_color;
                self.state.solid_color_name = None;
            }
        }

        if config.use_solid_color {
            self.state.mode = DisplayMode::Solid;
            self.state.target_palette = Gradient16::solid(self.state.solid_color);
        } else if config.use_random_palette {
            self.state.mode = DisplayMode::Random;
        } else if let Some(id) = PaletteId::parse_from_str(&config.palette_name) {
            self.state.mode = DisplayMode::Palette(id);
            self.state.target_palette = *id.gradient();
        }

        let target = if self.state.enabled {
            level_brightness(self.state.brightness_level)
        } else {
            0
        };
        self.governor.set_target(target);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn clamp_channel(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

fn parse_on_off(value: &str) -> Result<bool, SetError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("on") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("off") {
        Ok(false)
    } else {
        Err(SetError::UnknownName)
    }
}
