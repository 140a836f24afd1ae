#[cfg(test)]
mod tests {
    use crate::Color;
    use crate::Error;
    use crate::Font;
    use crate::Rect;
    use crate::Vec2;
    use crate::animation::*;
    use crate::image::*;
    use crate::signal::*;
    use web_time::{Duration, Instant};

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let called = std::rc::Rc::new(std::cell::RefCell::new(false));

        let called_clone = called.clone();
        sig.subscribe(move |_| {
            *called_clone.borrow_mut() = true;
        });

        sig.set(42);
        assert!(*called.borrow());
    }

    #[test]
    fn test_signal_subscriber_can_read_back() {
        let sig = signal(String::new());
        let echoed = std::rc::Rc::new(std::cell::RefCell::new(String::new()));

        let reader = sig.clone();
        let echoed_clone = echoed.clone();
        sig.subscribe(move |_| {
            *echoed_clone.borrow_mut() = reader.get();
        });

        sig.set("abc".to_string());
        assert_eq!(*echoed.borrow(), "abc");
    }

    #[test]
    fn test_signal_unsubscribe() {
        let sig = signal(1);
        let hits = std::rc::Rc::new(std::cell::Cell::new(0));
        let first = {
            let hits = hits.clone();
            sig.subscribe(move |_| hits.set(hits.get() + 1))
        };
        let second = {
            let hits = hits.clone();
            sig.subscribe(move |_| hits.set(hits.get() + 10))
        };
        assert_ne!(first, second);

        sig.set(2);
        assert_eq!(hits.get(), 11);

        assert!(sig.unsubscribe(first));
        assert!(!sig.unsubscribe(first));
        sig.set(3);
        assert_eq!(hits.get(), 21);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("nope"), Color::BLACK);
    }

    #[test]
    fn test_color_try_from_hex_rejects_garbage() {
        assert_eq!(
            Color::try_from_hex("#12345"),
            Err(Error::InvalidHexColor("#12345".to_string()))
        );
        assert!(Color::try_from_hex("#GG0000").is_err());
        assert_eq!(Color::from_hex(&Color::COMPLETED.to_hex()), Color::COMPLETED);
    }

    #[test]
    fn test_color_presets_and_fade() {
        assert_eq!(Color::COMPLETED.to_hex(), "#128F54");
        assert_eq!(Color::from_hex("#FC291C"), Color::ERROR);
        assert_eq!(Color::DISABLED, Color::from_rgb(224, 224, 224));
        assert_eq!(Color::WHITE.fade(0.5).3, 128);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 60.0);
    }

    #[test]
    fn test_font_line_height() {
        assert!((Font::system(10.0).line_height() - 13.0).abs() < 0.001);
        assert_eq!(Font::system(-4.0).line_height(), 0.0);
    }

    #[test]
    fn test_image_ref_parse() {
        assert_eq!(
            "bundled:success".parse::<ImageRef>(),
            Ok(ImageRef::Bundled(BundledIcon::Success))
        );
        assert_eq!(
            "thumb_up".parse::<ImageRef>(),
            Ok(ImageRef::named("thumb_up"))
        );
        assert_eq!(
            "bundled:sparkle".parse::<ImageRef>(),
            Err(Error::UnknownBundledIcon("sparkle".to_string()))
        );
    }

    #[test]
    fn test_animation_deterministic() {
        let t0 = Instant::now();
        set_clock(TestClock { t: t0 });

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0);
        // advance 250ms
        set_clock(TestClock {
            t: t0 + Duration::from_millis(250),
        });
        assert!(a.update());
        assert!((*a.get() - 2.5).abs() < 0.01);

        set_clock(TestClock {
            t: t0 + Duration::from_millis(1000),
        });
        let cont = a.update();
        assert!(!cont);
        assert!((*a.get() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_set_clock_replaces_installed_clock() {
        let t0 = Instant::now();
        set_clock(TestClock {
            t: t0 + Duration::from_secs(10),
        });
        set_clock(TestClock { t: t0 });

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0);
        set_clock(TestClock {
            t: t0 + Duration::from_millis(250),
        });
        assert!(a.update());
        assert!((*a.get() - 2.5).abs() < 0.01);
    }

    #[test]
    fn test_animation_retarget_starts_from_current_value() {
        let t0 = Instant::now();
        set_clock(TestClock { t: t0 });

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0);

        set_clock(TestClock {
            t: t0 + Duration::from_millis(500),
        });
        a.update();
        assert!((*a.get() - 5.0).abs() < 0.01);

        a.set_target(0.0);
        set_clock(TestClock {
            t: t0 + Duration::from_millis(750),
        });
        assert!(a.update());
        assert!((*a.get() - 3.75).abs() < 0.01);
    }

    #[test]
    fn test_snap_spec_finishes_on_first_update() {
        let t0 = Instant::now();
        set_clock(TestClock { t: t0 });

        let mut a = AnimatedValue::new(Color::BLACK, AnimationSpec::snap());
        a.set_target(Color::WHITE);
        assert!(a.is_animating());
        assert!(!a.update());
        assert_eq!(*a.get(), Color::WHITE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_color_serde_as_hex_string() {
        let c: Color = serde_json::from_str("\"#128F54\"").unwrap();
        assert_eq!(c, Color::COMPLETED);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#128F54\"");
        assert!(serde_json::from_str::<Color>("\"#12\"").is_err());
    }
}
