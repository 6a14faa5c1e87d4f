mod tests {
    use ws2812b_pwm::math8::{fade_down, fade_up, percent_of, scale_brightness};

    #[test]
    fn test_scale_brightness() {
        assert_eq!(scale_brightness(255, 255), 255);
        assert_eq!(scale_brightness(255, 0), 0);
        assert_eq!(scale_brightness(0, 255), 0);
        assert_eq!(scale_brightness(255, 30), 30);
        assert_eq!(scale_brightness(100, 30), 11);
        assert_eq!(scale_brightness(128, 128), 64);
        assert_eq!(scale_brightness(191, 50), 37);
    }

    #[test]
    fn test_scale_brightness_bounded_and_monotonic() {
        for value in 0..=255u8 {
            for brightness in 0..=255u8 {
                let scaled = scale_brightness(value, brightness);
                assert!(scaled <= value);
                assert_eq!(
                    u32::from(scaled),
                    u32::from(value) * u32::from(brightness) / 255
                );
                if value < 255 {
                    assert!(scale_brightness(value + 1, brightness) >= scaled);
                }
                if brightness < 255 {
                    assert!(scale_brightness(value, brightness + 1) >= scaled);
                }
            }
        }
    }

    #[test]
    fn test_fade_clamps() {
        assert_eq!(fade_up(250, 5), 255);
        assert_eq!(fade_up(253, 5), 255);
        assert_eq!(fade_up(0, 5), 5);
        assert_eq!(fade_down(5, 5), 0);
        assert_eq!(fade_down(3, 5), 0);
        assert_eq!(fade_down(255, 5), 250);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(100, 68), 68);
        assert_eq!(percent_of(100, 32), 32);
        assert_eq!(percent_of(150, 68), 102);
        assert_eq!(percent_of(150, 32), 48);
        assert_eq!(percent_of(u16::MAX, 100), u16::MAX);
    }

    #[test]
    fn test_percent_of_clamps_above_100() {
        assert_eq!(percent_of(u16::MAX, 200), u16::MAX);
        assert_eq!(percent_of(100, 255), 100);
    }
}
