use crate::color::Rgb;

/// Linear interpolation between two colors over a numeric domain.
///
/// Inputs below the domain start return the start color and inputs above the
/// domain end return the end color. The clamp lives here, explicitly, rather
/// than being assumed of some host interpolation primitive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearColorScale {
    domain: [f64; 2],
    range: [Rgb; 2],
}

impl LinearColorScale {
    pub const fn new(domain: [f64; 2], range: [Rgb; 2]) -> Self {
        Self { domain, range }
    }

    pub fn sample(&self, x: f64) -> Rgb {
        let [d0, d1] = self.domain;
        let span = d1 - d0;
        let t = if span == 0.0 {
            0.0
        } else {
            ((x - d0) / span).clamp(0.0, 1.0)
        };

        let [c0, c1] = self.range;
        Rgb::new(
            lerp_channel(c0.r, c1.r, t),
            lerp_channel(c0.g, c1.g, t),
            lerp_channel(c0.b, c1.b, t),
        )
    }
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::LinearColorScale;
    use crate::color::Rgb;

    fn scale() -> LinearColorScale {
        LinearColorScale::new([0.0, 100.0], [Rgb::new(0, 255, 0), Rgb::new(136, 8, 8)])
    }

    #[test]
    fn domain_edges_hit_the_endpoint_colors() {
        assert_eq!(scale().sample(0.0), Rgb::new(0, 255, 0));
        assert_eq!(scale().sample(100.0), Rgb::new(136, 8, 8));
    }

    #[test]
    fn out_of_domain_inputs_clamp() {
        let s = scale();
        assert_eq!(s.sample(-40.0), s.sample(0.0));
        assert_eq!(s.sample(160.0), s.sample(100.0));
    }

    #[test]
    fn midpoint_interpolates_each_channel() {
        // 0..136 -> 68, 255..8 -> 131.5 rounded to 132, 0..8 -> 4.
        assert_eq!(scale().sample(50.0), Rgb::new(68, 132, 4));
    }

    #[test]
    fn degenerate_domain_returns_start_color() {
        let s = LinearColorScale::new([5.0, 5.0], [Rgb::new(10, 20, 30), Rgb::new(1, 2, 3)]);
        assert_eq!(s.sample(5.0), Rgb::new(10, 20, 30));
        assert_eq!(s.sample(99.0), Rgb::new(10, 20, 30));
    }
}
