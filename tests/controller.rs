mod common;

mod tests {
    use embassy_time::Instant;
    use heapless::String;
    use lumi_strip_engine::{
        ConfigStorage, PersistedConfig, Rgb, SetError, StatusSource, StorageError, StripController,
    };

    use crate::common::{MemStorage, MockDriver};

    fn controller() -> StripController<MockDriver, 16> {
        StripController::new(MockDriver::new(), 16)
    }

    #[test]
    fn test_boot_defaults() {
        let c = controller();
        let status = c.status();
        assert_eq!(status.enabled, true);
        assert_eq!(status.brightness_level, 3);
        assert_eq!(status.fade_enabled, true);
        assert_eq!(status.blend_speed, 4);
        assert_eq!(status.source, StatusSource::Palette("party"));
        assert_eq!(status.max_volts, 5);
        assert_eq!(status.max_milliamps, 500);
        assert_eq!(c.palette_name(), "party");
        assert_eq!(c.actual_brightness(), 128);
    }

    #[test]
    fn test_led_count_clamps_to_frame_buffer() {
        let c: StripController<MockDriver, 8> = StripController::new(MockDriver::new(), 100);
        assert_eq!(c.led_count(), 8);
    }

    #[test]
    fn test_set_rgb_clamps_channels() {
        let mut c = controller();
        c.set_rgb(300, -1, 128);
        assert_eq!(c.rgb(), Rgb { r: 255, g: 0, b: 128 });
        assert_eq!(c.color_name(), None);
        assert_eq!(c.palette_name(), "solid_color");
    }

    #[test]
    fn test_set_color_resolves_names() {
        let mut c = controller();
        assert_eq!(c.set_color(" TEAL "), Ok(()));
        assert_eq!(c.rgb(), Rgb { r: 0, g: 128, b: 128 });
        assert_eq!(c.color_name(), Some("teal"));
        assert_eq!(c.palette_name(), "solid_color");

        assert_eq!(c.set_color("not_a_color"), Err(SetError::UnknownName));
        assert_eq!(c.color_name(), Some("teal"));
    }

    #[test]
    fn test_every_named_color_resolves() {
        let mut c = controller();
        for (name, color) in lumi_strip_engine::color::names::NAMED_COLORS {
            assert_eq!(c.set_color(name), Ok(()), "{name}");
            assert_eq!(c.rgb(), *color, "{name}");
            assert_eq!(c.color_name(), Some(*name));
        }
    }

    #[test]
    fn test_set_bright_validates_range() {
        let mut c = controller();
        assert_eq!(c.set_bright(5), Ok(()));
        assert_eq!(c.brightness_level(), 5);

        assert_eq!(c.set_bright(0), Err(SetError::OutOfRange));
        assert_eq!(c.set_bright(6), Err(SetError::OutOfRange));
        assert_eq!(c.brightness_level(), 5);
    }

    #[test]
    fn test_set_blend_speed_validates_range() {
        let mut c = controller();
        assert_eq!(c.set_blend_speed(1), Ok(()));
        assert_eq!(c.blend_speed(), 1);

        assert_eq!(c.set_blend_speed(0), Err(SetError::OutOfRange));
        assert_eq!(c.set_blend_speed(6), Err(SetError::OutOfRange));
        assert_eq!(c.blend_speed(), 1);
    }

    #[test]
    fn test_switch_and_fade_accept_on_off_strings() {
        let mut c = controller();
        assert_eq!(c.set_switch_str(" OFF "), Ok(()));
        assert_eq!(c.is_enabled(), false);
        assert_eq!(c.set_switch_str("on"), Ok(()));
        assert_eq!(c.is_enabled(), true);
        assert_eq!(c.set_switch_str("maybe"), Err(SetError::UnknownName));
        assert_eq!(c.is_enabled(), true);

        assert_eq!(c.set_fade_str("Off"), Ok(()));
        assert_eq!(c.fade_enabled(), false);
        assert_eq!(c.set_fade_str("1"), Err(SetError::UnknownName));
        assert_eq!(c.fade_enabled(), false);
    }

    #[test]
    fn test_set_palette_accepts_all_spellings() {
        let mut c = controller();
        assert_eq!(c.set_palette("ocean"), Ok(()));
        assert_eq!(c.palette_name(), "ocean");

        assert_eq!(c.set_palette("U01"), Ok(()));
        assert_eq!(c.palette_name(), "u01_christmas");

        assert_eq!(c.set_palette("random"), Ok(()));
        assert_eq!(c.palette_name(), "random");

        assert_eq!(c.set_palette("bogus"), Err(SetError::UnknownName));
        assert_eq!(c.palette_name(), "random");
    }

    #[test]
    fn test_display_sources_are_exclusive() {
        let mut c = controller();
        c.set_palette("ocean").unwrap();
        c.set_rgb(1, 2, 3);
        assert_eq!(c.palette_name(), "solid_color");

        c.set_palette("random").unwrap();
        assert_eq!(c.palette_name(), "random");

        c.set_color("red").unwrap();
        assert_eq!(c.palette_name(), "solid_color");

        c.set_palette("party").unwrap();
        assert_eq!(c.palette_name(), "party");
    }

    #[test]
    fn test_set_max_power_validates_and_forwards() {
        let mut c = controller();
        assert_eq!(c.set_max_power(2, 100), Err(SetError::OutOfRange));
        assert_eq!(c.set_max_power(25, 500), Err(SetError::OutOfRange));
        assert_eq!(c.set_max_power(5, 49), Err(SetError::OutOfRange));
        assert_eq!(c.set_max_power(5, 20_001), Err(SetError::OutOfRange));
        assert!(c.driver().power_budgets.is_empty());

        assert_eq!(c.set_max_power(3, 50), Ok(()));
        assert_eq!(c.set_max_power(24, 20_000), Ok(()));
        assert_eq!(c.driver().power_budgets, vec![(3, 50), (24, 20_000)]);
        assert_eq!(c.max_volts(), 24);
        assert_eq!(c.max_milliamps(), 20_000);
    }

    #[test]
    fn test_update_writes_frames_and_brightness() {
        let mut c: StripController<MockDriver, 8> = StripController::new(MockDriver::new(), 5);

        c.update(Instant::from_millis(0));
        assert_eq!(c.driver().frames.len(), 1);
        assert_eq!(c.driver().last_frame().len(), 5);
        // The brightness gate has not opened yet.
        assert!(c.driver().brightness_calls.is_empty());

        c.update(Instant::from_millis(20));
        assert_eq!(c.driver().brightness_calls, vec![128]);
    }

    #[test]
    fn test_solid_color_reaches_the_frame() {
        let mut c: StripController<MockDriver, 8> = StripController::new(MockDriver::new(), 8);
        c.set_rgb(0, 0, 255);
        c.set_fade(false);

        // Three blend firings at the default speed cover any channel gap.
        c.update(Instant::from_millis(25));
        c.update(Instant::from_millis(50));
        c.update(Instant::from_millis(75));

        for led in c.driver().last_frame() {
            assert_eq!(*led, Rgb { r: 0, g: 0, b: 255 });
        }
    }

    #[test]
    fn test_switch_off_eases_to_dark() {
        let mut c = controller();
        c.set_switch(false);
        assert_eq!(c.actual_brightness(), 128);

        let mut now = 20;
        for _ in 0..50 {
            c.update(Instant::from_millis(now));
            now += 20;
        }
        assert_eq!(c.actual_brightness(), 0);
        assert_eq!(c.driver().brightness_calls.last(), Some(&0));
        // Frames keep flowing while dark.
        assert_eq!(c.driver().frames.len(), 50);
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut saved = controller();
        saved.set_color("teal").unwrap();
        saved.set_bright(2).unwrap();
        saved.set_fade(false);
        saved.set_blend_speed(5).unwrap();
        saved.set_switch(false);

        let mut storage = MemStorage::new();
        saved.save_config(&mut storage).unwrap();

        let mut restored = controller();
        restored.load_config(&mut storage).unwrap();
        assert_eq!(restored.status(), saved.status());
        assert_eq!(restored.rgb(), saved.rgb());
        assert_eq!(restored.color_name(), Some("teal"));
    }

    #[test]
    fn test_palette_selection_round_trips() {
        let mut saved = controller();
        saved.set_palette("u03").unwrap();
        let mut storage = MemStorage::new();
        saved.save_config(&mut storage).unwrap();

        let mut restored = controller();
        restored.load_config(&mut storage).unwrap();
        assert_eq!(restored.palette_name(), "u03_cyberpunk");

        saved.set_palette("random").unwrap();
        saved.save_config(&mut storage).unwrap();
        restored.load_config(&mut storage).unwrap();
        assert_eq!(restored.palette_name(), "random");
    }

    #[test]
    fn test_power_budget_is_not_persisted() {
        let mut saved = controller();
        saved.set_max_power(12, 2000).unwrap();
        let mut storage = MemStorage::new();
        saved.save_config(&mut storage).unwrap();

        let mut restored = controller();
        restored.load_config(&mut storage).unwrap();
        assert_eq!(restored.max_volts(), 5);
        assert_eq!(restored.max_milliamps(), 500);
    }

    #[test]
    fn test_load_rejects_blank_storage() {
        let mut c = controller();
        c.set_palette("lava").unwrap();

        let mut storage = MemStorage::new();
        assert_eq!(
            c.load_config(&mut storage),
            Err(StorageError::InvalidMagicHeader)
        );
        assert_eq!(c.palette_name(), "lava");
    }

    #[test]
    fn test_load_reports_driver_failure() {
        let mut c = controller();
        let mut storage = MemStorage::new();
        storage.fail_reads = true;
        assert_eq!(c.load_config(&mut storage), Err(StorageError::DriverError));
    }

    #[test]
    fn test_load_sanitizes_stored_fields() {
        let config = PersistedConfig {
            enabled: true,
            brightness_level: 9,
            fade_enabled: true,
            use_solid_color: false,
            solid_color: Rgb { r: 0, g: 0, b: 0 },
            palette_name: String::try_from("mystery_ramp").unwrap(),
            solid_color_name: String::new(),
            use_random_palette: false,
            blend_speed: 0,
        };
        let mut storage = MemStorage::new();
        storage.write(&config.encode()).unwrap();

        let mut c = controller();
        c.load_config(&mut storage).unwrap();
        assert_eq!(c.brightness_level(), 3);
        assert_eq!(c.blend_speed(), 4);
        assert_eq!(c.palette_name(), "party");
    }

    #[test]
    fn test_stored_color_name_wins_over_channels() {
        let config = PersistedConfig {
            enabled: true,
            brightness_level: 3,
            fade_enabled: true,
            use_solid_color: true,
            solid_color: Rgb { r: 1, g: 2, b: 3 },
            palette_name: String::try_from("solid_color").unwrap(),
            solid_color_name: String::try_from("blue").unwrap(),
            use_random_palette: false,
            blend_speed: 4,
        };
        let mut storage = MemStorage::new();
        storage.write(&config.encode()).unwrap();

        let mut c = controller();
        c.load_config(&mut storage).unwrap();
        assert_eq!(c.rgb(), Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(c.color_name(), Some("blue"));
        assert_eq!(c.palette_name(), "solid_color");
    }
}
