use feed::Earthquake;
use symbology::{depth_color, marker_radius};

/// Stroke color for every marker.
pub const STROKE_COLOR: &str = "#000000";

/// Stroke width in pixels for every marker.
pub const STROKE_WEIGHT: f64 = 0.5;

/// Markers render fully opaque.
pub const MARKER_OPACITY: f64 = 1.0;
pub const MARKER_FILL_OPACITY: f64 = 1.0;

/// One feed record's position plus its computed visual attributes, ready for
/// the map widget. Derived deterministically from one `Earthquake` and never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub radius: f64,
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
    pub popup_text: String,
}

/// Style one event: radius from magnitude, fill from depth, fixed stroke.
pub fn style_quake(quake: &Earthquake) -> StyledPoint {
    StyledPoint {
        lon_deg: quake.lon_deg,
        lat_deg: quake.lat_deg,
        radius: marker_radius(quake.magnitude),
        fill_color: depth_color(quake.depth_km).to_hex(),
        stroke_color: STROKE_COLOR.to_string(),
        stroke_weight: STROKE_WEIGHT,
        opacity: MARKER_OPACITY,
        fill_opacity: MARKER_FILL_OPACITY,
        popup_text: popup_text(quake),
    }
}

/// Style every event: one output per input, in input order. No filtering,
/// no deduplication, no error skipping.
pub fn style_quakes(quakes: &[Earthquake]) -> Vec<StyledPoint> {
    quakes.iter().map(style_quake).collect()
}

fn popup_text(quake: &Earthquake) -> String {
    format!(
        "Place: {} | Time: {} | Magnitude: {} | Depth: {}",
        quake.place, quake.time_ms, quake.magnitude, quake.depth_km
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{style_quake, style_quakes};
    use feed::Earthquake;
    use symbology::depth_color;

    fn quake(place: &str, magnitude: f64, depth_km: f64) -> Earthquake {
        Earthquake {
            place: place.to_string(),
            time_ms: 1000,
            magnitude,
            depth_km,
            lon_deg: 1.0,
            lat_deg: 2.0,
        }
    }

    #[test]
    fn styles_one_event_end_to_end() {
        let styled = style_quakes(&[quake("Test", 2.0, 40.0)]);
        assert_eq!(styled.len(), 1);

        let point = &styled[0];
        assert_eq!(point.radius, 10.0);
        assert_eq!(point.fill_color, depth_color(40.0).to_hex());
        assert_eq!(
            point.popup_text,
            "Place: Test | Time: 1000 | Magnitude: 2 | Depth: 40"
        );
        assert_eq!((point.lon_deg, point.lat_deg), (1.0, 2.0));
    }

    #[test]
    fn stroke_and_opacity_are_fixed() {
        let point = style_quake(&quake("anywhere", 3.0, 12.0));
        assert_eq!(point.stroke_color, "#000000");
        assert_eq!(point.stroke_weight, 0.5);
        assert_eq!(point.opacity, 1.0);
        assert_eq!(point.fill_opacity, 1.0);
    }

    #[test]
    fn fractional_values_keep_their_decimals_in_the_popup() {
        let point = style_quake(&quake("offshore", 4.35, 11.6));
        assert_eq!(
            point.popup_text,
            "Place: offshore | Time: 1000 | Magnitude: 4.35 | Depth: 11.6"
        );
    }

    #[test]
    fn output_is_one_to_one_and_ordered() {
        let quakes = vec![
            quake("first", 1.0, 5.0),
            quake("second", 2.0, 35.0),
            quake("third", 3.0, 95.0),
        ];
        let styled = style_quakes(&quakes);
        assert_eq!(styled.len(), quakes.len());
        for (point, source) in styled.iter().zip(quakes.iter()) {
            assert!(point.popup_text.contains(&source.place));
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(style_quakes(&[]).is_empty());
    }
}
