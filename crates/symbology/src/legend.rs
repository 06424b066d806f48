use crate::color::Rgb;
use crate::style::depth_scale;

/// Depth buckets shown in the legend, in ascending order. The last bucket is
/// open-ended.
pub const DEPTH_BINS: [[f64; 2]; 6] = [
    [-10.0, 10.0],
    [10.0, 30.0],
    [30.0, 50.0],
    [50.0, 70.0],
    [70.0, 90.0],
    [90.0, f64::INFINITY],
];

/// One legend entry: a labeled depth range and its representative color.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub min: f64,
    pub max: f64,
    pub label: String,
    pub color: Rgb,
}

/// Build the legend rows, one per bucket, in bucket order.
///
/// Each row's color is the depth scale sampled at the bucket minimum. Rows
/// are derived fresh on every call; nothing is cached.
pub fn legend_rows() -> Vec<LegendRow> {
    let scale = depth_scale();
    DEPTH_BINS
        .iter()
        .map(|&[min, max]| LegendRow {
            min,
            max,
            label: bucket_label(min, max),
            color: scale.sample(min),
        })
        .collect()
}

fn bucket_label(min: f64, max: f64) -> String {
    if max.is_infinite() {
        format!("{min}+")
    } else {
        format!("{min}-{max}")
    }
}

#[cfg(test)]
mod tests {
    use super::{DEPTH_BINS, legend_rows};
    use crate::style::depth_color;

    #[test]
    fn one_row_per_bucket_in_ascending_order() {
        let rows = legend_rows();
        assert_eq!(rows.len(), DEPTH_BINS.len());
        for (row, bin) in rows.iter().zip(DEPTH_BINS.iter()) {
            assert_eq!(row.min, bin[0]);
            assert_eq!(row.max, bin[1]);
        }
    }

    #[test]
    fn labels_render_bounds_and_open_end() {
        let labels: Vec<String> = legend_rows().into_iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            ["-10-10", "10-30", "30-50", "50-70", "70-90", "90+"]
        );
    }

    #[test]
    fn last_label_never_renders_the_infinite_bound() {
        let last = legend_rows().pop().unwrap();
        assert_eq!(last.label, "90+");
        assert!(last.max.is_infinite());
    }

    #[test]
    fn row_colors_match_the_marker_color_at_each_minimum() {
        for row in legend_rows() {
            assert_eq!(row.color, depth_color(row.min));
        }
    }

    #[test]
    fn row_colors_at_known_depths() {
        let hex: Vec<String> = legend_rows().iter().map(|r| r.color.to_hex()).collect();
        assert_eq!(
            hex,
            [
                "#00FF00", "#1BCE02", "#369C03", "#526B05", "#6D3906", "#880808"
            ]
        );
    }

    #[test]
    fn rows_are_rebuilt_fresh_each_call() {
        assert_eq!(legend_rows(), legend_rows());
    }
}
