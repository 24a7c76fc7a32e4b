/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

// Interleaved (base, slope) pairs for the four sine quarter-wave sections.
const B_M16_INTERLEAVE: [u8; 8] = [0, 49, 49, 41, 90, 27, 117, 10];

/// 8-bit sine approximation, ported from FastLED's `sin8`
///
/// Input covers a full wave in 256 steps; output swings 1-255 around
/// the midpoint 128.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn sin8(theta: u8) -> u8 {
    let mut offset = theta;
    if theta & 0x40 != 0 {
        offset = 255 - offset;
    }
    offset &= 0x3F;

    let mut secoffset = offset & 0x0F;
    if theta & 0x40 != 0 {
        secoffset += 1;
    }

    let section = (offset >> 4) as usize;
    let b = B_M16_INTERLEAVE[section * 2];
    let m16 = B_M16_INTERLEAVE[section * 2 + 1];

    let mx = ((m16 as u16 * secoffset as u16) >> 4) as u8;

    let mut y = mx + b;
    if theta & 0x80 != 0 {
        y = y.wrapping_neg();
    }
    y.wrapping_add(128)
}

/// Move `value` toward `target` by at most `step`, never overshooting
#[inline]
pub const fn approach8(value: u8, target: u8, step: u8) -> u8 {
    if value < target {
        if target - value > step {
            value + step
        } else {
            target
        }
    } else if value - target > step {
        value - step
    } else {
        target
    }
}
