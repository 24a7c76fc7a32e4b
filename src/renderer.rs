use embassy_time::Instant;

use crate::{color::Rgb, math8::sin8, palette::Gradient16, rand8::Rand8};

// Seed restored before every frame so the shimmer pattern stays fixed
// along the strip instead of crawling.
const FADE_PATTERN_SEED: u16 = 535;

// Palette positions advance by this much per pixel, so the full ramp
// spans roughly thirteen pixels before wrapping.
const PALETTE_STRIDE: u8 = 20;

/// Paints the strip from the current palette
///
/// Each pixel samples the ramp at a fixed stride. With fading on, a
/// per-pixel sine wave modulates brightness; the wave period comes from a
/// generator reseeded every frame, which pins each pixel's period while
/// the phase keeps moving with time.
pub struct PixelRenderer {
    pattern_rng: Rand8,
}

impl PixelRenderer {
    pub const fn new() -> Self {
        Self {
            pattern_rng: Rand8::new(FADE_PATTERN_SEED),
        }
    }

    /// Render one frame into `leds`
    #[allow(clippy::cast_possible_truncation)]
    pub fn render(
        &mut self,
        now: Instant,
        palette: &Gradient16,
        fade_enabled: bool,
        leds: &mut [Rgb],
    ) {
        if leds.is_empty() {
            return;
        }
        self.pattern_rng.set_seed(FADE_PATTERN_SEED);
        for (i, led) in leds.iter_mut().enumerate() {
            let fader = if fade_enabled {
                let period = u64::from(self.pattern_rng.in_range(10, 20));
                sin8((now.as_millis() / period) as u8)
            } else {
                255
            };
            *led = palette.sample((i as u8).wrapping_mul(PALETTE_STRIDE), fader);
        }
    }
}

impl Default for PixelRenderer {
    fn default() -> Self {
        Self::new()
    }
}
