use serde_json::Value;

use crate::model::{Earthquake, FeedMetadata, QuakeFeed};

#[derive(Debug)]
pub enum FeedError {
    /// The body was not JSON at all.
    Parse(String),
    /// The top level was not a GeoJSON FeatureCollection.
    NotAFeatureCollection,
    /// One feature was missing a field the styling pass reads. Nothing is
    /// skipped or defaulted; the first bad feature fails the whole feed.
    BadQuake { index: usize, reason: String },
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Parse(msg) => write!(f, "feed is not valid JSON: {msg}"),
            FeedError::NotAFeatureCollection => {
                write!(f, "expected a GeoJSON FeatureCollection")
            }
            FeedError::BadQuake { index, reason } => {
                write!(f, "malformed feature at index {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for FeedError {}

impl QuakeFeed {
    pub fn from_geojson_str(payload: &str) -> Result<Self, FeedError> {
        let value: Value =
            serde_json::from_str(payload).map_err(|e| FeedError::Parse(e.to_string()))?;
        Self::from_geojson_value(&value)
    }

    pub fn from_geojson_value(value: &Value) -> Result<Self, FeedError> {
        let obj = value.as_object().ok_or(FeedError::NotAFeatureCollection)?;
        let ty = obj
            .get("type")
            .and_then(Value::as_str)
            .ok_or(FeedError::NotAFeatureCollection)?;
        if ty != "FeatureCollection" {
            return Err(FeedError::NotAFeatureCollection);
        }

        let features = obj
            .get("features")
            .and_then(Value::as_array)
            .ok_or(FeedError::NotAFeatureCollection)?;

        let mut quakes = Vec::with_capacity(features.len());
        for (index, feature) in features.iter().enumerate() {
            quakes.push(parse_quake(index, feature)?);
        }

        let metadata = obj.get("metadata").and_then(parse_metadata);
        Ok(QuakeFeed { metadata, quakes })
    }
}

fn parse_quake(index: usize, feature: &Value) -> Result<Earthquake, FeedError> {
    let bad = |reason: &str| FeedError::BadQuake {
        index,
        reason: reason.to_string(),
    };

    let obj = feature
        .as_object()
        .ok_or_else(|| bad("feature must be an object"))?;
    let properties = obj
        .get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| bad("feature missing properties"))?;

    let place = properties
        .get("place")
        .and_then(Value::as_str)
        .ok_or_else(|| bad("properties.place missing or not a string"))?
        .to_string();
    let time_ms = properties
        .get("time")
        .and_then(Value::as_i64)
        .ok_or_else(|| bad("properties.time missing or not an integer"))?;
    let magnitude = properties
        .get("mag")
        .and_then(Value::as_f64)
        .ok_or_else(|| bad("properties.mag missing or not a number"))?;

    let coords = obj
        .get("geometry")
        .and_then(|g| g.get("coordinates"))
        .and_then(Value::as_array)
        .ok_or_else(|| bad("geometry.coordinates missing"))?;
    if coords.len() < 3 {
        return Err(bad("geometry.coordinates must hold [lon, lat, depth]"));
    }
    let lon_deg = coords[0]
        .as_f64()
        .ok_or_else(|| bad("coordinates[0] must be a number"))?;
    let lat_deg = coords[1]
        .as_f64()
        .ok_or_else(|| bad("coordinates[1] must be a number"))?;
    let depth_km = coords[2]
        .as_f64()
        .ok_or_else(|| bad("coordinates[2] must be a number"))?;

    Ok(Earthquake {
        place,
        time_ms,
        magnitude,
        depth_km,
        lon_deg,
        lat_deg,
    })
}

// The metadata block is informational only, so unlike features it parses
// leniently: absent or oddly shaped fields default instead of failing.
fn parse_metadata(value: &Value) -> Option<FeedMetadata> {
    let obj = value.as_object()?;
    Some(FeedMetadata {
        generated_ms: obj.get("generated").and_then(Value::as_i64).unwrap_or(0),
        title: obj
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string(),
        count: obj.get("count").and_then(Value::as_u64).unwrap_or(0),
    })
}
