use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

/// Hue travel direction for HSV gradient fills
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum HueDirection {
    Forward,
    Backward,
    Shortest,
}

/// Fill an HSV gradient between two positions using 8.24 fixed-point
/// arithmetic (ported from `FastLED`'s `fill_gradient`)
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::cast_possible_wrap
)]
pub fn fill_hsv_gradient(
    leds: &mut [Rgb],
    start_pos: usize,
    start_color: Hsv,
    end_pos: usize,
    end_color: Hsv,
    direction: HueDirection,
) {
    if leds.is_empty() {
        return;
    }

    // Ensure proper ordering
    let (start_pos, end_pos, mut start_color, mut end_color) = if end_pos < start_pos
    {
        (end_pos, start_pos, end_color, start_color)
    } else {
        (start_pos, end_pos, start_color, end_color)
    };

    // Black and desaturated endpoints have no meaningful hue of their own
    if end_color.val == 0 || end_color.sat == 0 {
        end_color.hue = start_color.hue;
    }
    if start_color.val == 0 || start_color.sat == 0 {
        start_color.hue = end_color.hue;
    }

    // Distances in 8.7 fixed-point
    let sat_distance87 =
        (i16::from(end_color.sat) - i16::from(start_color.sat)) << 7;
    let val_distance87 =
        (i16::from(end_color.val) - i16::from(start_color.val)) << 7;

    let hue_delta = end_color.hue.wrapping_sub(start_color.hue);

    let actual_direction = match direction {
        HueDirection::Shortest => {
            if hue_delta > 127 {
                HueDirection::Backward
            } else {
                HueDirection::Forward
            }
        }
        other => other,
    };

    let hue_distance87: i16 = if actual_direction == HueDirection::Forward {
        i16::from(hue_delta) << 7
    } else {
        let backward_delta = 256u16.wrapping_sub(u16::from(hue_delta)) as u8;
        -((i16::from(backward_delta)) << 7)
    };

    let pixel_distance = end_pos.saturating_sub(start_pos);
    let divisor = if pixel_distance == 0 {
        1
    } else {
        pixel_distance as i32
    };

    // Per-pixel deltas in 8.23 fixed-point
    let hue_delta823 = ((i32::from(hue_distance87) * 65536) / divisor) * 2;
    let sat_delta823 = ((i32::from(sat_distance87) * 65536) / divisor) * 2;
    let val_delta823 = ((i32::from(val_distance87) * 65536) / divisor) * 2;

    // 8.24 accumulators
    let mut hue824 = u32::from(start_color.hue) << 24;
    let mut sat824 = u32::from(start_color.sat) << 24;
    let mut val824 = u32::from(start_color.val) << 24;

    let end_pos = end_pos.min(leds.len() - 1);
    for led in leds.iter_mut().take(end_pos + 1).skip(start_pos) {
        *led = hsv2rgb(Hsv {
            hue: (hue824 >> 24) as u8,
            sat: (sat824 >> 24) as u8,
            val: (val824 >> 24) as u8,
        });
        hue824 = hue824.wrapping_add(hue_delta823 as u32);
        sat824 = sat824.wrapping_add(sat_delta823 as u32);
        val824 = val824.wrapping_add(val_delta823 as u32);
    }
}

/// Fill a four-anchor HSV gradient with anchors pinned at thirds of the span
///
/// Matches `FastLED`'s four-color `fill_gradient`: anchors land at 0,
/// `len / 3`, `2 * len / 3` and `len - 1`, hue taking the shortest path
/// within each segment.
pub fn fill_hsv_gradient_four(leds: &mut [Rgb], c1: Hsv, c2: Hsv, c3: Hsv, c4: Hsv) {
    if leds.is_empty() {
        return;
    }

    let len = leds.len();
    let one_third = len / 3;
    let two_thirds = (len * 2) / 3;
    let last = len - 1;

    fill_hsv_gradient(leds, 0, c1, one_third, c2, HueDirection::Shortest);
    fill_hsv_gradient(leds, one_third, c2, two_thirds, c3, HueDirection::Shortest);
    fill_hsv_gradient(leds, two_thirds, c3, last, c4, HueDirection::Shortest);
}
