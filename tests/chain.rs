mod tests {
    use segment_light_composer::color::{blend_linear, rgb_from_u32, wheel};
    use segment_light_composer::glyph::{SegmentCode, lookup};
    use segment_light_composer::{
        ChainConfig, DisplayChain, Error, LedTransport, Rgb, TransportError,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[derive(Default)]
    struct Recorder {
        fail_setup: bool,
        frames: Vec<Vec<Rgb>>,
    }

    impl Recorder {
        fn last_frame(&self) -> &[Rgb] {
            self.frames.last().unwrap()
        }
    }

    impl LedTransport for Recorder {
        fn begin(&mut self) -> Result<(), TransportError> {
            if self.fail_setup {
                return Err(TransportError::Setup);
            }
            Ok(())
        }

        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    fn ready_chain(units: usize) -> DisplayChain<Recorder, 8> {
        let config = ChainConfig {
            units,
            ..ChainConfig::default()
        };
        let mut chain = DisplayChain::new(&config, Recorder::default()).unwrap();
        chain.begin(255).unwrap();
        chain
    }

    fn unit(leds: &[Rgb], index: usize) -> &[Rgb] {
        &leds[index * 15..(index + 1) * 15]
    }

    #[test]
    fn test_new_rejects_bad_unit_counts() {
        let zero = ChainConfig {
            units: 0,
            ..ChainConfig::default()
        };
        assert_eq!(
            DisplayChain::<Recorder, 4>::new(&zero, Recorder::default()).err(),
            Some(Error::ZeroUnits)
        );

        let too_many = ChainConfig {
            units: 5,
            ..ChainConfig::default()
        };
        assert_eq!(
            DisplayChain::<Recorder, 4>::new(&too_many, Recorder::default()).err(),
            Some(Error::CapacityExceeded {
                requested: 5,
                capacity: 4
            })
        );
    }

    #[test]
    fn test_render_before_begin_is_noop() {
        let mut chain =
            DisplayChain::<Recorder, 4>::new(&ChainConfig::default(), Recorder::default()).unwrap();
        assert!(!chain.is_ready());
        assert_eq!(chain.led_count(), 60);
        assert_eq!(chain.brightness(), 90);

        chain.render_solid("8888", RED);
        chain.render_clock(10, 30, 0, RED, RED);
        assert!(chain.leds().iter().all(|led| *led == BLACK));
        assert!(chain.transport().frames.is_empty());
        assert!(chain.segment_codes().is_empty());
    }

    #[test]
    fn test_failed_begin_leaves_chain_not_ready() {
        let transport = Recorder {
            fail_setup: true,
            ..Recorder::default()
        };
        let mut chain = DisplayChain::<Recorder, 4>::new(&ChainConfig::default(), transport).unwrap();
        assert_eq!(
            chain.begin(255),
            Err(Error::Transport(TransportError::Setup))
        );
        assert!(!chain.is_ready());

        chain.render_solid("8", RED);
        assert!(chain.transport().frames.is_empty());
    }

    #[test]
    fn test_begin_flushes_blank_frame() {
        let chain = ready_chain(2);
        assert!(chain.is_ready());
        assert_eq!(chain.brightness(), 255);
        assert_eq!(chain.transport().frames.len(), 1);
        assert_eq!(chain.transport().last_frame(), &[BLACK; 30]);
    }

    #[test]
    fn test_render_solid() {
        let mut chain = ready_chain(2);
        chain.render_solid("8", RED);

        let leds = chain.leds();
        assert_eq!(leds.len(), 30);
        assert!(unit(leds, 0)[..14].iter().all(|led| *led == RED));
        assert_eq!(unit(leds, 0)[14], BLACK);
        assert!(unit(leds, 1).iter().all(|led| *led == BLACK));
        assert_eq!(chain.transport().last_frame(), leds);
    }

    #[test]
    fn test_render_solid_decimal_point() {
        let mut chain = ready_chain(2);
        chain.render_solid("1.", RED);

        let first = unit(chain.leds(), 0);
        // '1' lights segments B and C only
        assert_eq!(first[0], BLACK);
        assert_eq!(first[2], RED);
        assert_eq!(first[5], RED);
        assert_eq!(first[6], BLACK);
        assert_eq!(first[14], RED);
        assert_eq!(chain.segment_codes().len(), 1);
    }

    #[test]
    fn test_render_clamps_to_chain() {
        let mut chain = ready_chain(4);
        chain.render_solid("TOOLONG", RED);

        assert_eq!(chain.leds().len(), 60);
        assert_eq!(chain.segment_codes().len(), 4);
        // 'T' is not in the alphabet
        assert!(unit(chain.leds(), 0).iter().all(|led| *led == BLACK));
        // Lower-case 'o' lights segments C, D, E and G
        assert_eq!(unit(chain.leds(), 1)[0], BLACK);
        assert_eq!(unit(chain.leds(), 1)[4], RED);
        assert_eq!(unit(chain.leds(), 1)[12], RED);
    }

    #[test]
    fn test_unsupported_character_renders_blank() {
        let mut chain = ready_chain(2);
        chain.render_solid("z8", RED);
        assert_eq!(chain.segment_codes()[0], SegmentCode::BLANK);
        assert!(unit(chain.leds(), 0).iter().all(|led| *led == BLACK));
        assert_eq!(unit(chain.leds(), 1)[0], RED);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut chain = ready_chain(3);
        chain.render_horizontal_gradient("1.2", RED, WHITE);
        let first = chain.transport().last_frame().to_vec();
        chain.render_horizontal_gradient("1.2", RED, WHITE);
        assert_eq!(chain.transport().last_frame(), first.as_slice());
        assert_eq!(chain.glyph_cache().generation(), 1);
    }

    #[test]
    fn test_modes_share_resolved_glyphs() {
        let mut chain = ready_chain(2);
        chain.render_solid("12", RED);
        chain.render_color_cycle("12", 3);
        chain.render_vertical_gradient("12", RED, WHITE);
        assert_eq!(chain.glyph_cache().generation(), 1);
    }

    #[test]
    fn test_brightness_is_applied_at_flush() {
        let mut chain = ready_chain(1);
        chain.set_brightness(128);
        chain.render_solid("8", WHITE);

        assert_eq!(chain.leds()[0], WHITE);
        assert_eq!(chain.transport().last_frame()[0], Rgb::new(128, 128, 128));

        chain.set_brightness(0);
        chain.show();
        assert_eq!(chain.transport().last_frame()[0], BLACK);
        assert_eq!(chain.leds()[0], WHITE);
        assert_eq!(chain.glyph_cache().generation(), 1);
    }

    #[test]
    fn test_gamma_correct_at_flush() {
        let config = ChainConfig {
            units: 1,
            gamma_correct: true,
            ..ChainConfig::default()
        };
        let mut chain = DisplayChain::<Recorder, 1>::new(&config, Recorder::default()).unwrap();
        chain.begin(255).unwrap();
        chain.render_solid("8", Rgb::new(128, 128, 128));

        assert_eq!(chain.leds()[0], Rgb::new(128, 128, 128));
        assert_eq!(chain.transport().last_frame()[0], Rgb::new(42, 42, 42));

        chain.set_gamma_correct(false);
        chain.show();
        assert_eq!(chain.transport().last_frame()[0], Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_vertical_gradient() {
        let mut chain = ready_chain(2);
        let top = Rgb::new(100, 0, 0);
        let bottom = Rgb::new(0, 0, 200);
        chain.render_vertical_gradient("88", top, bottom);

        let leds = chain.leds();
        assert_eq!(unit(leds, 0)[0], top);
        assert_eq!(unit(leds, 0)[2], Rgb::new(90, 0, 20));
        assert_eq!(unit(leds, 0)[6], Rgb::new(40, 0, 120));
        // Rows repeat on every unit
        assert_eq!(unit(leds, 1), unit(leds, 0));
    }

    #[test]
    fn test_horizontal_gradient() {
        let mut chain = ready_chain(2);
        let left = Rgb::new(100, 0, 0);
        let right = Rgb::new(0, 0, 200);
        chain.render_horizontal_gradient("88", left, right);

        let leds = chain.leds();
        assert_eq!(unit(leds, 0)[0], Rgb::new(91, 0, 16));
        assert_eq!(unit(leds, 1)[2], Rgb::new(25, 0, 150));
        assert_eq!(unit(leds, 0)[10], left);
    }

    #[test]
    fn test_color_cycle() {
        let mut chain = ready_chain(2);
        chain.render_color_cycle("88", 0);

        let leds = chain.leds().to_vec();
        assert_eq!(unit(&leds, 0)[0], Rgb::new(255, 0, 0));
        assert_eq!(unit(&leds, 0)[1], Rgb::new(228, 27, 0));
        assert_eq!(unit(&leds, 0)[13], Rgb::new(0, 159, 96));
        // Every unit restarts at the offset
        assert_eq!(unit(&leds, 1), unit(&leds, 0));

        chain.render_color_cycle("88", 9);
        assert_eq!(unit(chain.leds(), 0)[0], unit(&leds, 0)[1]);
    }

    #[test]
    fn test_vertical_gradient_decimal_point_uses_own_row() {
        let mut chain = ready_chain(1);
        let top = Rgb::new(100, 0, 0);
        let bottom = Rgb::new(0, 0, 200);
        chain.render_vertical_gradient("8.", top, bottom);

        let leds = chain.leds();
        assert_eq!(leds[14], blend_linear(top, bottom, 7, 10));
        assert_eq!(leds[14], Rgb::new(30, 0, 140));
        assert_ne!(leds[14], leds[13]);
    }

    #[test]
    fn test_horizontal_gradient_decimal_point_uses_own_column() {
        let mut chain = ready_chain(2);
        let left = Rgb::new(100, 0, 0);
        let right = Rgb::new(0, 0, 200);
        chain.render_horizontal_gradient("8.8.", left, right);

        let leds = chain.leds();
        assert_eq!(unit(leds, 0)[14], Rgb::new(66, 0, 66));
        assert_eq!(unit(leds, 1)[14], blend_linear(left, right, 10, 12));
        assert_ne!(unit(leds, 0)[14], unit(leds, 0)[13]);
    }

    #[test]
    fn test_color_cycle_decimal_point_uses_own_wheel_index() {
        let mut chain = ready_chain(1);
        chain.render_color_cycle("8.", 0);
        assert_eq!(chain.leds()[14], rgb_from_u32(wheel(126)));
        assert_eq!(chain.leds()[14], Rgb::new(0, 132, 123));
        assert_ne!(chain.leds()[14], chain.leds()[13]);

        chain.render_color_cycle("8.", 5);
        assert_eq!(chain.leds()[14], rgb_from_u32(wheel(131)));
    }

    #[test]
    fn test_clock_blinks_minutes() {
        let hours = Rgb::new(0, 255, 0);
        let minutes = Rgb::new(200, 100, 50);
        let mut chain = ready_chain(4);

        chain.render_clock(10, 30, 1, hours, minutes);
        assert_eq!(
            chain.segment_codes(),
            &[
                lookup('1', false).unwrap(),
                lookup('0', false).unwrap(),
                lookup('3', false).unwrap(),
                lookup('0', false).unwrap()
            ]
        );
        assert_eq!(unit(chain.leds(), 0)[2], hours);
        assert_eq!(unit(chain.leds(), 2)[0], Rgb::new(100, 50, 25));

        chain.render_clock(10, 30, 2, hours, minutes);
        assert_eq!(unit(chain.leds(), 2)[0], minutes);
        assert_eq!(unit(chain.leds(), 3)[0], minutes);
    }

    #[test]
    fn test_clock_pads_to_chain_length() {
        let mut chain = ready_chain(6);
        chain.render_clock(9, 5, 0, RED, WHITE);

        assert_eq!(chain.segment_codes().len(), 6);
        assert_eq!(chain.segment_codes()[0], SegmentCode::BLANK);
        assert_eq!(chain.segment_codes()[1], SegmentCode::BLANK);
        assert_eq!(chain.segment_codes()[2], lookup('0', false).unwrap());
        assert_eq!(chain.segment_codes()[3], lookup('9', false).unwrap());
        assert_eq!(chain.segment_codes()[5], lookup('5', false).unwrap());
        // Only the last two units take the minute color
        assert_eq!(unit(chain.leds(), 3)[2], RED);
        assert_eq!(unit(chain.leds(), 4)[0], WHITE);
    }

    #[test]
    fn test_clock_right_aligns_on_long_chain() {
        let config = ChainConfig {
            units: 40,
            ..ChainConfig::default()
        };
        let mut chain = DisplayChain::<Recorder, 40>::new(&config, Recorder::default()).unwrap();
        chain.begin(255).unwrap();
        let hours = Rgb::new(0, 255, 0);
        let minutes = Rgb::new(200, 100, 50);
        chain.render_clock(10, 38, 2, hours, minutes);

        let codes = chain.segment_codes();
        assert_eq!(codes.len(), 40);
        assert_eq!(codes[35], SegmentCode::BLANK);
        assert_eq!(codes[36], lookup('1', false).unwrap());
        assert_eq!(codes[37], lookup('0', false).unwrap());
        assert_eq!(codes[38], lookup('3', false).unwrap());
        assert_eq!(codes[39], lookup('8', false).unwrap());

        let leds = chain.leds();
        assert_eq!(unit(leds, 37)[2], hours);
        assert_eq!(unit(leds, 38)[0], minutes);
        assert_eq!(unit(leds, 39)[0], minutes);
    }

    #[test]
    fn test_clock_on_short_chain_keeps_leading_digits() {
        let hours = Rgb::new(0, 255, 0);
        let minutes = Rgb::new(200, 100, 50);
        let mut chain = ready_chain(3);
        chain.render_clock(10, 38, 0, hours, minutes);

        assert_eq!(
            chain.segment_codes(),
            &[
                lookup('1', false).unwrap(),
                lookup('0', false).unwrap(),
                lookup('3', false).unwrap()
            ]
        );
        // The second hour digit keeps the hour color
        assert_eq!(unit(chain.leds(), 1)[2], hours);
        assert_eq!(unit(chain.leds(), 2)[0], minutes);
    }

    #[test]
    fn test_force_uppercase() {
        let mut chain = ready_chain(1);
        chain.render_solid("b", RED);
        assert_eq!(chain.segment_codes()[0].bits(), 0b0111_1100);

        chain.set_force_uppercase(true);
        assert!(chain.is_force_uppercase());
        chain.render_solid("b", RED);
        assert_eq!(chain.segment_codes()[0].bits(), 0b0111_1111);
    }

    #[test]
    fn test_introspection() {
        let chain = ready_chain(1);
        assert_eq!(chain.alphabet_size(), 32);
        assert_eq!(chain.glyph_at(10), Some('a'));
        assert_eq!(chain.glyph_at(99), None);
        assert_eq!(chain.unit_count(), 1);
    }
}
