mod tests {
    use ohm_led::color::{
        BLACK, HEAT_PALETTE, Hsv, Rgb, blend_colors, color_from_palette, fade_to_black_by,
        fill_rainbow, hsv2rgb, rgb_from_u32,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
        assert_eq!(blend_colors(WHITE, BLACK, 0), WHITE);
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFF_33_00), Rgb::new(255, 51, 0));
    }

    #[test]
    fn test_heat_palette_endpoints() {
        assert_eq!(color_from_palette(&HEAT_PALETTE, 0), BLACK);
        assert_eq!(color_from_palette(&HEAT_PALETTE, 16), Rgb::new(0x33, 0, 0));
        assert_eq!(color_from_palette(&HEAT_PALETTE, 240), WHITE);
    }

    #[test]
    fn test_heat_palette_blends_between_entries() {
        assert_eq!(color_from_palette(&HEAT_PALETTE, 8), Rgb::new(26, 0, 0));
        let color = color_from_palette(&HEAT_PALETTE, 0x58);
        assert_eq!(color.r, 255);
        assert!(color.g > 0 && color.g < 0x33);
        assert_eq!(color.b, 0);
    }

    #[test]
    fn test_fade_to_black_by() {
        let mut leds = [WHITE, RED];
        fade_to_black_by(&mut leds, 0);
        assert_eq!(leds, [WHITE, RED]);

        fade_to_black_by(&mut leds, 128);
        assert_eq!(leds, [Rgb::new(127, 127, 127), Rgb::new(127, 0, 0)]);

        fade_to_black_by(&mut leds, 255);
        assert_eq!(leds, [BLACK, BLACK]);
    }

    #[test]
    fn test_fill_rainbow() {
        let mut leds = [BLACK; 4];
        fill_rainbow(&mut leds, 250, 10);
        let hues = [250u8, 4, 14, 24];
        for (led, hue) in leds.iter().zip(hues) {
            assert_eq!(
                *led,
                hsv2rgb(Hsv {
                    hue,
                    sat: 255,
                    val: 255
                })
            );
        }
    }
}
