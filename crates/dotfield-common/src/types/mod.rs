mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_size_backing_rounds_up() {
        let size = CanvasSize {
            width: 200.5,
            height: 100.0,
            dpr: 2.0,
        };
        assert_eq!(size.backing_size(), (401, 200));

        let size = CanvasSize {
            width: 333.0,
            height: 10.0,
            dpr: 1.5,
        };
        assert_eq!(size.backing_size(), (500, 15));
    }

    #[test]
    fn canvas_size_empty() {
        let size = CanvasSize {
            width: 0.0,
            height: 10.0,
            dpr: 1.0,
        };
        assert!(size.is_empty());
    }

    #[test]
    fn canvas_size_serialization() {
        let size = CanvasSize {
            width: 1920.0,
            height: 1080.0,
            dpr: 2.0,
        };
        let json = serde_json::to_string(&size).unwrap();
        let parsed: CanvasSize = serde_json::from_str(&json).unwrap();
        assert_eq!(size, parsed);
    }

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        assert!((a.distance_to(Point::new(3.0, 4.0)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn theme_signal_falls_back_to_light() {
        assert_eq!(Theme::from_signal("dark"), Theme::Dark);
        assert_eq!(Theme::from_signal("light"), Theme::Light);
        assert_eq!(Theme::from_signal("system"), Theme::Light);
        assert_eq!(Theme::from_signal(""), Theme::Light);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::rgb(255.0, 136.0, 0.0));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c.to_rgba8(), [255, 136, 0, 128]);
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_from_css_rgb_and_rgba() {
        assert_eq!(
            Color::from_css("rgb(0, 0, 0)"),
            Some(Color::rgb(0.0, 0.0, 0.0))
        );
        assert_eq!(
            Color::from_css("rgba(255, 255, 255, 0.5)"),
            Some(Color::from_rgba(255.0, 255.0, 255.0, 0.5))
        );
        assert_eq!(
            Color::from_css("#ffffff"),
            Some(Color::rgb(255.0, 255.0, 255.0))
        );
    }

    #[test]
    fn color_from_css_rejects_garbage() {
        assert!(Color::from_css("rgb(0, 0)").is_none());
        assert!(Color::from_css("rgba(0, 0, 0)").is_none());
        assert!(Color::from_css("rgb(300, 0, 0)").is_none());
        assert!(Color::from_css("rgba(0, 0, 0, 2)").is_none());
        assert!(Color::from_css("hsl(0, 0%, 0%)").is_none());
    }

    #[test]
    fn color_lerp_endpoints_and_midpoint() {
        let a = Color::from_rgba(0.0, 0.0, 0.0, 0.0);
        let b = Color::from_rgba(200.0, 100.0, 50.0, 1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid, Color::from_rgba(100.0, 50.0, 25.0, 0.5));
        assert_eq!(a.lerp(b, 3.0), b);
    }

    #[test]
    fn color_to_css_formats_at_draw_time() {
        let c = Color::from_rgba(99.6, 100.0, 254.9, 0.8);
        assert_eq!(c.to_css(), "rgba(100, 100, 255, 0.8)");
    }

    #[test]
    fn color_max_channel_delta() {
        let a = Color::rgb(10.0, 20.0, 30.0);
        let b = Color::from_rgba(10.0, 25.0, 30.0, 1.0);
        assert!((a.max_channel_delta(&b) - 5.0).abs() < 1e-6);
    }
}
