use embassy_time::{Duration, Instant};

use crate::{palette::Gradient16, rand8::Rand8};

// Cadence of random target regeneration.
const REGENERATE_INTERVAL: Duration = Duration::from_millis(5000);

// Starting seed of the free-running palette generator.
const PALETTE_SEED: u16 = 1337;

/// Blend pacing for a speed level: how often a step fires and how far
/// each channel may move per firing
///
/// Decoupling the two lets low speeds take rare fine steps and high
/// speeds take frequent coarse ones, neither popping visibly. Out-of-range
/// input falls back to the speed-2 row.
pub fn blend_parameters(speed: u8) -> (Duration, u8) {
    match speed {
        1 => (Duration::from_millis(200), 25),
        2 => (Duration::from_millis(100), 50),
        3 => (Duration::from_millis(50), 75),
        4 => (Duration::from_millis(25), 100),
        5 => (Duration::from_millis(10), 150),
        _ => (Duration::from_millis(100), 50),
    }
}

/// Periodic convergence of the rendered ramp toward its target
///
/// Two independently gated behaviors: a blend step paced by
/// [`blend_parameters`], and a fixed five-second cadence that replaces the
/// target with a random ramp when the display mode asks for one. The
/// palette generator free-runs with time entropy folded in; it is never
/// shared with the renderer's pattern generator.
pub struct PaletteBlender {
    last_blend: Instant,
    last_regenerate: Instant,
    rng: Rand8,
}

impl PaletteBlender {
    pub const fn new() -> Self {
        Self {
            last_blend: Instant::from_millis(0),
            last_regenerate: Instant::from_millis(0),
            rng: Rand8::new(PALETTE_SEED),
        }
    }

    /// Run both gates
    ///
    /// The regeneration gate keeps its cadence in every mode; `regenerate`
    /// only decides whether a firing replaces `target`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick(
        &mut self,
        now: Instant,
        speed: u8,
        regenerate: bool,
        current: &mut Gradient16,
        target: &mut Gradient16,
    ) {
        let (interval, max_step) = blend_parameters(speed);
        if now.duration_since(self.last_blend) >= interval {
            self.last_blend = now;
            current.blend_toward(target, max_step);
        }

        if now.duration_since(self.last_regenerate) >= REGENERATE_INTERVAL {
            self.last_regenerate = now;
            if regenerate {
                self.rng.add_entropy((now.as_millis() & 0xFFFF) as u16);
                *target = Gradient16::random(&mut self.rng);
            }
        }
    }
}

impl Default for PaletteBlender {
    fn default() -> Self {
        Self::new()
    }
}
