mod catalog;

pub use catalog::PaletteId;

use crate::{
    color::{Hsv, Rgb, blend_colors, fill_hsv_gradient_four},
    math8::{approach8, scale8},
    rand8::Rand8,
};

/// Number of stops in a [`Gradient16`]
pub const STOP_COUNT: usize = 16;

/// A 16-stop color ramp sampled over a 0-255 domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient16 {
    stops: [Rgb; STOP_COUNT],
}

impl Gradient16 {
    pub const fn new(stops: [Rgb; STOP_COUNT]) -> Self {
        Self { stops }
    }

    /// Ramp with every stop equal to `color`
    ///
    /// Lets a single color ride the same blend machinery as real palettes.
    pub const fn solid(color: Rgb) -> Self {
        Self {
            stops: [color; STOP_COUNT],
        }
    }

    /// Ramp interpolated through four HSV anchors pinned at thirds
    pub fn from_hsv_anchors(c1: Hsv, c2: Hsv, c3: Hsv, c4: Hsv) -> Self {
        let mut stops = [Rgb::default(); STOP_COUNT];
        fill_hsv_gradient_four(&mut stops, c1, c2, c3, c4);
        Self { stops }
    }

    /// Randomized ramp drawn from `rng`
    ///
    /// Picks a base hue, then four anchors within 32 hue units of it at
    /// saturation 255/255/192/255 and value 128-254, upsampled through the
    /// HSV anchor fill. Every call advances the generator.
    pub fn random(rng: &mut Rand8) -> Self {
        let base_hue = rng.next();
        let mut anchor = |sat: u8| Hsv {
            hue: base_hue.wrapping_add(rng.below(32)),
            sat,
            val: rng.in_range(128, 255),
        };
        let c1 = anchor(255);
        let c2 = anchor(255);
        let c3 = anchor(192);
        let c4 = anchor(255);
        Self::from_hsv_anchors(c1, c2, c3, c4)
    }

    /// Sample the ramp at `position`, scaled by `brightness`
    ///
    /// The high nibble of `position` selects a stop, the low nibble
    /// interpolates linearly toward the next stop, wrapping 15 -> 0.
    /// `brightness` 255 is identity, 0 is black.
    pub fn sample(&self, position: u8, brightness: u8) -> Rgb {
        let slot = (position >> 4) as usize;
        let frac = (position & 0x0F) << 4;

        let mut color = self.stops[slot];
        if frac != 0 {
            let next = self.stops[(slot + 1) % STOP_COUNT];
            color = blend_colors(color, next, frac);
        }
        if brightness == 255 {
            return color;
        }
        Rgb {
            r: scale8(color.r, brightness),
            g: scale8(color.g, brightness),
            b: scale8(color.b, brightness),
        }
    }

    /// Move every channel of every stop toward `target` by at most
    /// `max_step`, without overshoot
    pub fn blend_toward(&mut self, target: &Gradient16, max_step: u8) {
        for (stop, goal) in self.stops.iter_mut().zip(target.stops.iter()) {
            stop.r = approach8(stop.r, goal.r, max_step);
            stop.g = approach8(stop.g, goal.g, max_step);
            stop.b = approach8(stop.b, goal.b, max_step);
        }
    }

    pub const fn stops(&self) -> &[Rgb; STOP_COUNT] {
        &self.stops
    }
}
