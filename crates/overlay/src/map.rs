use serde::{Deserialize, Serialize};

/// A selectable background tile source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BaseLayer {
    /// Display name in the layer control.
    pub name: String,
    /// XYZ tile URL template ({s}/{z}/{x}/{y} placeholders).
    pub url_template: String,
    /// Attribution HTML shown by the widget.
    pub attribution: String,
}

/// Screen corner for a map control.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Static configuration for the interactive map.
///
/// Constructed once at startup and handed to the widget as-is; the widget
/// performs no styling decisions of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    /// Initial view center, `[lat, lon]` in the widget's convention.
    pub center: [f64; 2],
    pub zoom: u8,
    pub base_layers: Vec<BaseLayer>,
    /// Name of the base layer enabled on load.
    pub default_base: String,
    /// Display name of the earthquake overlay in the layer control.
    pub overlay_name: String,
    pub legend_position: ControlPosition,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: [37.09, -95.71],
            zoom: 5,
            base_layers: vec![
                BaseLayer {
                    name: "Street Map".to_string(),
                    url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
                    attribution: concat!(
                        "&copy; <a href=\"https://www.openstreetmap.org/copyright\">",
                        "OpenStreetMap</a> contributors"
                    )
                    .to_string(),
                },
                BaseLayer {
                    name: "Topographic Map".to_string(),
                    url_template: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png".to_string(),
                    attribution: concat!(
                        "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">",
                        "OpenStreetMap</a> contributors, ",
                        "<a href=\"http://viewfinderpanoramas.org\">SRTM</a> | Map style: &copy; ",
                        "<a href=\"https://opentopomap.org\">OpenTopoMap</a> ",
                        "(<a href=\"https://creativecommons.org/licenses/by-sa/3.0/\">CC-BY-SA</a>)"
                    )
                    .to_string(),
                },
            ],
            default_base: "Street Map".to_string(),
            overlay_name: "Earthquakes".to_string(),
            legend_position: ControlPosition::BottomRight,
        }
    }
}
