mod tests {
    use embassy_time::Duration;
    use ohm_led::{
        ConfigError, ConfigStore, DeviceConfig, load_or_default, parse_config, write_config,
    };

    const MAX_LEDS: usize = 300;

    struct MemoryStore {
        stored: Option<DeviceConfig>,
    }

    impl ConfigStore for MemoryStore {
        type Error = ();

        fn load(&mut self) -> Option<DeviceConfig> {
            self.stored.clone()
        }

        fn save(&mut self, config: &DeviceConfig) -> Result<(), Self::Error> {
            self.stored = Some(config.clone());
            Ok(())
        }
    }

    #[test]
    fn test_default_is_valid() {
        let config = DeviceConfig::default();
        assert_eq!(config.validate(MAX_LEDS), Ok(()));
        assert_eq!(config.name.as_str(), "ohm-led");
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_new_validates_lengths() {
        let name = "n".repeat(31);
        assert!(DeviceConfig::new(&name, "ssid", "secret", 10, MAX_LEDS).is_ok());

        let name = "n".repeat(32);
        assert_eq!(
            DeviceConfig::new(&name, "ssid", "secret", 10, MAX_LEDS),
            Err(ConfigError::NameTooLong)
        );
        assert_eq!(
            DeviceConfig::new("led", &"s".repeat(32), "secret", 10, MAX_LEDS),
            Err(ConfigError::SsidTooLong)
        );
        assert_eq!(
            DeviceConfig::new("led", "ssid", &"p".repeat(64), 10, MAX_LEDS),
            Err(ConfigError::PassphraseTooLong)
        );
    }

    #[test]
    fn test_new_validates_led_count() {
        assert_eq!(
            DeviceConfig::new("led", "ssid", "secret", 0, MAX_LEDS),
            Err(ConfigError::InvalidLedCount)
        );
        assert_eq!(
            DeviceConfig::new("led", "ssid", "secret", 301, MAX_LEDS),
            Err(ConfigError::InvalidLedCount)
        );
        let config = DeviceConfig::new("led", "ssid", "secret", 300, MAX_LEDS).unwrap();
        assert_eq!(config.led_count(), 300);
    }

    #[test]
    fn test_zero_fps_is_invalid() {
        let mut config = DeviceConfig::default();
        config.fps = 0;
        assert_eq!(config.validate(MAX_LEDS), Err(ConfigError::InvalidFrameRate));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ConfigError::NameTooLong.to_string(), "Name is too big.");
        assert_eq!(
            ConfigError::InvalidLedCount.to_string(),
            "Invalid number of LEDs."
        );
    }

    #[test]
    fn test_write_default_config() {
        let mut buf = [0u8; 128];
        let len = write_config(&DeviceConfig::default(), &mut buf).unwrap();
        assert_eq!(
            &buf[..len],
            br#"{"name":"ohm-led","ssid":"","passphrase":"","led_count":30,"fps":60}"#
        );

        let mut small = [0u8; 16];
        assert_eq!(
            write_config(&DeviceConfig::default(), &mut small),
            Err(ConfigError::BufferTooSmall)
        );
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = DeviceConfig::new("porch", "home", "hunter22", 120, MAX_LEDS).unwrap();
        let mut buf = [0u8; 256];
        let len = write_config(&config, &mut buf).unwrap();
        assert_eq!(parse_config(&buf[..len], MAX_LEDS), Ok(config));
    }

    #[test]
    fn test_parse_config_rejects_long_name() {
        // fits the field but leaves no terminator byte
        let body = format!(
            r#"{{"name":"{}","ssid":"","passphrase":"","led_count":30,"fps":60}}"#,
            "n".repeat(32)
        );
        assert_eq!(
            parse_config(body.as_bytes(), MAX_LEDS),
            Err(ConfigError::NameTooLong)
        );

        let body = format!(
            r#"{{"name":"{}","ssid":"","passphrase":"","led_count":30,"fps":60}}"#,
            "n".repeat(40)
        );
        assert_eq!(
            parse_config(body.as_bytes(), MAX_LEDS),
            Err(ConfigError::Malformed)
        );
    }

    #[test]
    fn test_parse_config_rejects_bad_led_count() {
        let body = br#"{"name":"led","ssid":"","passphrase":"","led_count":0,"fps":60}"#;
        assert_eq!(parse_config(body, MAX_LEDS), Err(ConfigError::InvalidLedCount));

        let body = br#"{"name":"led","ssid":"","passphrase":"","led_count":301,"fps":60}"#;
        assert_eq!(parse_config(body, MAX_LEDS), Err(ConfigError::InvalidLedCount));
    }

    #[test]
    fn test_parse_config_rejects_malformed_json() {
        assert_eq!(parse_config(b"{", MAX_LEDS), Err(ConfigError::Malformed));
        assert_eq!(
            parse_config(br#"{"name":"led"}"#, MAX_LEDS),
            Err(ConfigError::Malformed)
        );
    }

    #[test]
    fn test_load_or_default() {
        let mut store = MemoryStore { stored: None };
        assert_eq!(load_or_default(&mut store, MAX_LEDS), DeviceConfig::default());

        let config = DeviceConfig::new("porch", "home", "hunter22", 120, MAX_LEDS).unwrap();
        store.save(&config).unwrap();
        assert_eq!(load_or_default(&mut store, MAX_LEDS), config);

        // stored for a longer strip than this build supports
        assert_eq!(load_or_default(&mut store, 60), DeviceConfig::default());
    }
}
