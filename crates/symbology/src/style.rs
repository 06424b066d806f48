use crate::color::Rgb;
use crate::scale::LinearColorScale;

/// Fill color at the shallow end of the depth domain.
pub const SHALLOW_COLOR: Rgb = Rgb::new(0x00, 0xFF, 0x00);

/// Fill color at the deep end of the depth domain.
pub const DEEP_COLOR: Rgb = Rgb::new(0x88, 0x08, 0x08);

/// Depth domain in kilometers. Depths outside it clamp to the endpoints.
pub const DEPTH_DOMAIN: [f64; 2] = [-10.0, 90.0];

/// The one depth scale markers and the legend both sample, so their colors
/// agree for any given depth.
pub fn depth_scale() -> LinearColorScale {
    LinearColorScale::new(DEPTH_DOMAIN, [SHALLOW_COLOR, DEEP_COLOR])
}

/// Marker fill color for an event at `depth_km`.
pub fn depth_color(depth_km: f64) -> Rgb {
    depth_scale().sample(depth_km)
}

/// Marker radius in pixels for an event magnitude.
///
/// No validation: zero or negative magnitude passes through as a degenerate
/// radius, which the caller must guard against if that is unacceptable.
pub fn marker_radius(magnitude: f64) -> f64 {
    magnitude * 5.0
}

#[cfg(test)]
mod tests {
    use super::{DEEP_COLOR, SHALLOW_COLOR, depth_color, marker_radius};

    #[test]
    fn radius_scales_magnitude_by_five() {
        assert_eq!(marker_radius(0.0), 0.0);
        assert_eq!(marker_radius(2.0), 10.0);
        assert_eq!(marker_radius(5.0), 25.0);
    }

    #[test]
    fn negative_magnitude_is_passed_through() {
        assert_eq!(marker_radius(-1.0), -5.0);
    }

    #[test]
    fn shallow_and_deep_depths_hit_the_endpoints() {
        assert_eq!(depth_color(-10.0), SHALLOW_COLOR);
        assert_eq!(depth_color(90.0), DEEP_COLOR);
    }

    #[test]
    fn depths_outside_the_domain_clamp() {
        assert_eq!(depth_color(-50.0), depth_color(-10.0));
        assert_eq!(depth_color(150.0), depth_color(90.0));
    }

    #[test]
    fn color_reddens_monotonically_with_depth() {
        let mut prev = depth_color(-10.0);
        let mut depth = -10.0;
        while depth <= 90.0 {
            let c = depth_color(depth);
            assert!(c.r >= prev.r, "red dropped at depth {depth}");
            assert!(c.g <= prev.g, "green rose at depth {depth}");
            prev = c;
            depth += 0.5;
        }
    }
}
