/// The USGS all-week summary feed, the default data source.
pub const USGS_ALL_WEEK_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// One earthquake event from the summary feed.
///
/// Immutable; constructed from a parsed feed and discarded after the single
/// styling pass. There is no retention and no identity beyond the fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Earthquake {
    pub place: String,
    /// Event time, epoch milliseconds.
    pub time_ms: i64,
    pub magnitude: f64,
    pub depth_km: f64,
    pub lon_deg: f64,
    pub lat_deg: f64,
}

/// Feed-level metadata block. The feed may omit it entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedMetadata {
    /// Feed generation time, epoch milliseconds.
    pub generated_ms: i64,
    pub title: String,
    pub count: u64,
}

/// A parsed feed: every event, in feed order.
#[derive(Debug, Clone, PartialEq)]
pub struct QuakeFeed {
    pub metadata: Option<FeedMetadata>,
    pub quakes: Vec<Earthquake>,
}
