mod tests {
    use embassy_time::{Duration, Instant};
    use ohm_led::math8::{blend8, scale8, triangle8, triangle_position};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
        assert_eq!(scale8(255, 240), 240);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_triangle8() {
        let period = Duration::from_millis(1000);
        assert_eq!(triangle8(Instant::from_millis(0), period), 255);
        assert_eq!(triangle8(Instant::from_millis(250), period), 127);
        assert_eq!(triangle8(Instant::from_millis(500), period), 0);
        assert_eq!(triangle8(Instant::from_millis(750), period), 127);
    }

    #[test]
    fn test_triangle8_is_periodic() {
        let period = Duration::from_millis(777);
        for t in (0..3000).step_by(13) {
            assert_eq!(
                triangle8(Instant::from_millis(t), period),
                triangle8(Instant::from_millis(t + 777), period)
            );
        }
    }

    #[test]
    fn test_triangle8_zero_period() {
        assert_eq!(
            triangle8(Instant::from_millis(123), Duration::from_millis(0)),
            0
        );
    }

    #[test]
    fn test_triangle_position() {
        let period = Duration::from_millis(1000);
        assert_eq!(triangle_position(Instant::from_millis(0), period, 10), 9);
        assert_eq!(triangle_position(Instant::from_millis(250), period, 10), 5);
        assert_eq!(triangle_position(Instant::from_millis(500), period, 10), 0);
        assert_eq!(triangle_position(Instant::from_millis(750), period, 10), 5);
        assert_eq!(triangle_position(Instant::from_millis(999), period, 10), 9);
    }

    #[test]
    fn test_triangle_position_stays_on_strip() {
        let period = Duration::from_millis(333);
        for len in 1..20 {
            for t in 0..700 {
                assert!(triangle_position(Instant::from_millis(t), period, len) < len);
            }
        }
    }
}
