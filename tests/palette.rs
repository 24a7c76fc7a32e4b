#[allow(clippy::unreadable_literal)]
mod tests {
    use lumi_strip_engine::{
        Gradient16, PaletteId, Rand8, STOP_COUNT,
        color::{Hsv, Rgb, rgb_from_u32},
    };

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_palette_id_parse_builtins() {
        assert_eq!(PaletteId::parse_from_str("party"), Some(PaletteId::Party));
        assert_eq!(PaletteId::parse_from_str("rainbow"), Some(PaletteId::Rainbow));
        assert_eq!(PaletteId::parse_from_str("heat"), Some(PaletteId::Heat));
    }

    #[test]
    fn test_palette_id_parse_aliases() {
        // Every spelling of a themed ramp lands on the same id.
        assert_eq!(PaletteId::parse_from_str("u01"), Some(PaletteId::Christmas));
        assert_eq!(
            PaletteId::parse_from_str("christmas"),
            Some(PaletteId::Christmas)
        );
        assert_eq!(
            PaletteId::parse_from_str("u01_christmas"),
            Some(PaletteId::Christmas)
        );
        assert_eq!(PaletteId::parse_from_str("u08"), Some(PaletteId::DeepOcean));
        assert_eq!(
            PaletteId::parse_from_str("deep_ocean"),
            Some(PaletteId::DeepOcean)
        );
    }

    #[test]
    fn test_palette_id_parse_is_lenient_about_spelling() {
        assert_eq!(PaletteId::parse_from_str("PARTY"), Some(PaletteId::Party));
        assert_eq!(PaletteId::parse_from_str("  lava  "), Some(PaletteId::Lava));
    }

    #[test]
    fn test_palette_id_parse_rejections() {
        assert_eq!(PaletteId::parse_from_str("disco"), None);
        assert_eq!(PaletteId::parse_from_str(""), None);
        // `random` is a display mode, not a catalog entry.
        assert_eq!(PaletteId::parse_from_str("random"), None);
    }

    #[test]
    fn test_palette_id_as_str() {
        assert_eq!(PaletteId::Party.as_str(), "party");
        assert_eq!(PaletteId::Christmas.as_str(), "u01_christmas");
        assert_eq!(PaletteId::Fire.as_str(), "u10_fire");
    }

    #[test]
    fn test_palette_id_canonical_round_trip() {
        assert_eq!(PaletteId::ALL.len(), 17);
        for id in PaletteId::ALL {
            assert_eq!(PaletteId::parse_from_str(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_catalog_values() {
        assert_eq!(PaletteId::Party.gradient().stops()[0], rgb_from_u32(0x5500AB));
        assert_eq!(PaletteId::Heat.gradient().stops()[0], BLACK);
        assert_eq!(PaletteId::Heat.gradient().stops()[15], WHITE);
    }

    #[test]
    fn test_sample_interpolates_between_stops() {
        let mut stops = [WHITE; STOP_COUNT];
        stops[0] = BLACK;
        let ramp = Gradient16::new(stops);

        assert_eq!(ramp.sample(0, 255), BLACK);
        assert_eq!(
            ramp.sample(8, 255),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(ramp.sample(16, 255), WHITE);
    }

    #[test]
    fn test_sample_wraps_to_first_stop() {
        let mut stops = [WHITE; STOP_COUNT];
        stops[0] = BLACK;
        let ramp = Gradient16::new(stops);

        // Position 248 sits halfway between stop 15 and stop 0.
        assert_eq!(
            ramp.sample(248, 255),
            Rgb {
                r: 127,
                g: 127,
                b: 127
            }
        );
    }

    #[test]
    fn test_sample_applies_brightness() {
        let ramp = Gradient16::solid(rgb_from_u32(0xFF0000));
        assert_eq!(ramp.sample(0, 255), rgb_from_u32(0xFF0000));
        assert_eq!(ramp.sample(0, 128), Rgb { r: 128, g: 0, b: 0 });
        assert_eq!(ramp.sample(100, 0), BLACK);
    }

    #[test]
    fn test_solid_fills_every_stop() {
        let ramp = Gradient16::solid(rgb_from_u32(0x008080));
        for stop in ramp.stops() {
            assert_eq!(*stop, rgb_from_u32(0x008080));
        }
    }

    #[test]
    fn test_from_hsv_anchors_uniform() {
        let anchor = Hsv {
            hue: 96,
            sat: 255,
            val: 255,
        };
        let ramp = Gradient16::from_hsv_anchors(anchor, anchor, anchor, anchor);
        for stop in ramp.stops() {
            assert_eq!(*stop, ramp.stops()[0]);
        }
        assert_ne!(ramp.stops()[0], BLACK);
    }

    #[test]
    fn test_blend_toward_converges_without_overshoot() {
        let mut current = Gradient16::solid(BLACK);
        let target = Gradient16::solid(WHITE);

        current.blend_toward(&target, 25);
        assert_eq!(current.stops()[0], Rgb { r: 25, g: 25, b: 25 });

        for _ in 0..10 {
            current.blend_toward(&target, 25);
        }
        assert_eq!(current, target);

        current.blend_toward(&target, 25);
        assert_eq!(current, target);
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let mut a = Rand8::new(9);
        let mut b = Rand8::new(9);
        assert_eq!(Gradient16::random(&mut a), Gradient16::random(&mut b));

        // Consecutive draws from one generator differ.
        assert_ne!(Gradient16::random(&mut a), Gradient16::random(&mut a));
    }
}
