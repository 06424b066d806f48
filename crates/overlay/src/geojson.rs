use serde_json::{Map, Value, json};
use symbology::LegendRow;

use crate::marker::StyledPoint;

/// Media type for the styled overlay responses.
pub const GEOJSON_CONTENT_TYPE: &str = "application/geo+json";

/// Emit the styled overlay as a GeoJSON FeatureCollection.
///
/// Each feature carries a Point geometry (`[lon, lat]`) and, under
/// `properties`, the popup text plus a `style` object keyed the way the map
/// widget's circle markers expect its options.
pub fn overlay_value(points: &[StyledPoint]) -> Value {
    let features: Vec<Value> = points.iter().map(feature_value).collect();

    let mut root = Map::new();
    root.insert(
        "type".to_string(),
        Value::String("FeatureCollection".to_string()),
    );
    root.insert("features".to_string(), Value::Array(features));
    Value::Object(root)
}

fn feature_value(point: &StyledPoint) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [point.lon_deg, point.lat_deg]
        },
        "properties": {
            "popup": point.popup_text,
            "style": {
                "radius": point.radius,
                "fillColor": point.fill_color,
                "color": point.stroke_color,
                "weight": point.stroke_weight,
                "opacity": point.opacity,
                "fillOpacity": point.fill_opacity,
                "stroke": true
            }
        }
    })
}

/// Emit legend rows for the wire. JSON has no `Infinity`, so the open-ended
/// last row omits `max` instead of inventing a sentinel.
pub fn legend_value(rows: &[LegendRow]) -> Value {
    let entries: Vec<Value> = rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            obj.insert("min".to_string(), Value::from(row.min));
            if row.max.is_finite() {
                obj.insert("max".to_string(), Value::from(row.max));
            }
            obj.insert("label".to_string(), Value::String(row.label.clone()));
            obj.insert("color".to_string(), Value::String(row.color.to_hex()));
            Value::Object(obj)
        })
        .collect();
    Value::Array(entries)
}
