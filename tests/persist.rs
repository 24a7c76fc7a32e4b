mod common;

mod tests {
    use heapless::String;
    use lumi_strip_engine::{
        ConfigStorage, PersistedConfig, RECORD_SIZE, Rgb, StorageError, check_config,
    };

    use crate::common::MemStorage;

    fn sample_config() -> PersistedConfig {
        PersistedConfig {
            enabled: true,
            brightness_level: 2,
            fade_enabled: false,
            use_solid_color: true,
            solid_color: Rgb {
                r: 10,
                g: 20,
                b: 30,
            },
            palette_name: String::try_from("solid_color").unwrap(),
            solid_color_name: String::try_from("teal").unwrap(),
            use_random_palette: false,
            blend_speed: 5,
        }
    }

    #[test]
    fn test_record_layout() {
        let record = sample_config().encode();
        assert_eq!(record.len(), RECORD_SIZE);
        assert_eq!(RECORD_SIZE, 77);

        assert_eq!(&record[0..4], &[0x49, 0x4D, 0x55, 0x4C]);
        assert_eq!(record[4], 1);
        assert_eq!(record[5], 2);
        assert_eq!(record[6], 0);
        assert_eq!(record[7], 1);
        assert_eq!(&record[8..11], &[10, 20, 30]);
        assert_eq!(&record[11..22], b"solid_color");
        assert_eq!(record[22], 0);
        assert_eq!(&record[43..47], b"teal");
        assert_eq!(record[47], 0);
        assert_eq!(record[75], 0);
        assert_eq!(record[76], 5);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let config = sample_config();
        let decoded = PersistedConfig::decode(&config.encode()).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_decode_rejects_short_record() {
        let record = sample_config().encode();
        assert_eq!(
            PersistedConfig::decode(&record[..RECORD_SIZE - 1]),
            Err(StorageError::InvalidData)
        );
    }

    #[test]
    fn test_decode_rejects_bad_magic() {
        let mut record = sample_config().encode();
        record[0] ^= 0xFF;
        assert_eq!(
            PersistedConfig::decode(&record),
            Err(StorageError::InvalidMagicHeader)
        );
    }

    #[test]
    fn test_decode_rejects_invalid_name_bytes() {
        let mut record = sample_config().encode();
        record[11] = 0xC3;
        record[12] = 0x28;
        record[13] = 0;
        assert_eq!(
            PersistedConfig::decode(&record),
            Err(StorageError::InvalidData)
        );
    }

    #[test]
    fn test_decode_tolerates_nonzero_bool_bytes() {
        let mut record = sample_config().encode();
        record[6] = 7;
        let decoded = PersistedConfig::decode(&record).unwrap();
        assert_eq!(decoded.fade_enabled, true);
    }

    #[test]
    fn test_name_content_caps_at_31_bytes() {
        let mut config = sample_config();
        config.palette_name = String::try_from("abcdefghijklmnopqrstuvwxyz012345").unwrap();
        let decoded = PersistedConfig::decode(&config.encode()).unwrap();
        assert_eq!(decoded.palette_name.as_str(), "abcdefghijklmnopqrstuvwxyz01234");
    }

    #[test]
    fn test_check_config() {
        let mut storage = MemStorage::new();
        assert_eq!(check_config(&mut storage), Err(StorageError::InvalidMagicHeader));

        storage.write(&sample_config().encode()).unwrap();
        assert_eq!(check_config(&mut storage), Ok(()));

        storage.fail_reads = true;
        assert_eq!(check_config(&mut storage), Err(StorageError::DriverError));
    }
}
