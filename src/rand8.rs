/// Small linear-congruential generator producing 8-bit values, ported from
/// FastLED's `random8` family
///
/// Cheap enough to reseed every frame. The low entropy is fine for visual
/// jitter and palette variation; this is not a source of randomness for
/// anything security-related.
pub struct Rand8 {
    seed: u16,
}

impl Rand8 {
    pub const fn new(seed: u16) -> Self {
        Self { seed }
    }

    /// Reset the sequence to a known point.
    pub fn set_seed(&mut self, seed: u16) {
        self.seed = seed;
    }

    /// Fold outside entropy into the sequence.
    pub fn add_entropy(&mut self, entropy: u16) {
        self.seed = self.seed.wrapping_add(entropy);
    }

    fn next16(&mut self) -> u16 {
        self.seed = self.seed.wrapping_mul(2053).wrapping_add(13849);
        self.seed
    }

    /// Next value in `0..=255`
    ///
    /// Sums the high and low bytes of the 16-bit state so consecutive
    /// outputs do not correlate sequentially.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next(&mut self) -> u8 {
        let state = self.next16();
        ((state & 0xFF) as u8).wrapping_add((state >> 8) as u8)
    }

    /// Next value in `0..lim`
    #[allow(clippy::cast_possible_truncation)]
    pub fn below(&mut self, lim: u8) -> u8 {
        ((u16::from(self.next()) * u16::from(lim)) >> 8) as u8
    }

    /// Next value in `min..lim`
    pub fn in_range(&mut self, min: u8, lim: u8) -> u8 {
        min + self.below(lim - min)
    }
}
