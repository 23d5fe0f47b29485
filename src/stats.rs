//! Per-batch aggregation and anchor normalization.

use crate::parser::TimelinePoint;

/// Arithmetic means per query term across all valid points of one batch.
///
/// Entries keep the request's query order, anchor last.
#[derive(Debug)]
pub struct BatchMeans {
    means: Vec<(String, f64)>,
}

impl BatchMeans {
    /// Aggregates timeline points into per-term means.
    ///
    /// Points without a values array do not contribute. Returns `None` when
    /// no point contributed at all, in which case the whole batch is dropped
    /// rather than reported as zeros.
    pub fn from_points(queries: &[String], points: &[TimelinePoint]) -> Option<Self> {
        let mut sums = vec![0i64; queries.len()];
        let mut valid_points = 0usize;

        for point in points {
            let Some(values) = &point.values else {
                continue;
            };
            valid_points += 1;
            for (idx, value) in values.iter().enumerate().take(sums.len()) {
                sums[idx] += value;
            }
        }

        if valid_points == 0 {
            return None;
        }

        let means = queries
            .iter()
            .zip(&sums)
            .map(|(query, &sum)| (query.clone(), sum as f64 / valid_points as f64))
            .collect();

        Some(Self { means })
    }

    /// Mean for a single query term, if the term is part of this batch.
    pub fn get(&self, query: &str) -> Option<f64> {
        self.means
            .iter()
            .find(|(q, _)| q == query)
            .map(|(_, mean)| *mean)
    }

    /// Rescales every non-anchor mean against the anchor mean:
    /// `mean / anchor_mean * visual_scale`, unrounded.
    ///
    /// Returns `None` when the anchor mean is zero or the anchor term is
    /// absent from the batch, guarding the division. The caller drops the
    /// batch with a warning.
    pub fn normalize(&self, anchor_query: &str, visual_scale: f64) -> Option<Vec<(String, f64)>> {
        let anchor = self.get(anchor_query).unwrap_or(0.0);
        if anchor == 0.0 {
            return None;
        }

        Some(
            self.means
                .iter()
                .filter(|(query, _)| query != anchor_query)
                .map(|(query, mean)| (query.clone(), mean / anchor * visual_scale))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queries(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn point(values: Option<Vec<i64>>) -> TimelinePoint {
        TimelinePoint { date: None, values }
    }

    #[test]
    fn test_means_over_valid_points() {
        let q = queries(&["a", "b"]);
        let points = vec![
            point(Some(vec![40, 80])),
            point(Some(vec![60, 100])),
        ];

        let means = BatchMeans::from_points(&q, &points).unwrap();
        assert_eq!(means.get("a"), Some(50.0));
        assert_eq!(means.get("b"), Some(90.0));
        assert_eq!(means.get("missing"), None);
    }

    #[test]
    fn test_invalid_points_are_excluded() {
        let q = queries(&["a"]);
        let points = vec![
            point(None),
            point(Some(vec![30])),
            point(None),
            point(Some(vec![50])),
        ];

        // Mean over the two valid points only
        let means = BatchMeans::from_points(&q, &points).unwrap();
        assert_eq!(means.get("a"), Some(40.0));
    }

    #[test]
    fn test_zero_valid_points_drops_batch() {
        let q = queries(&["a", "b"]);
        let points = vec![point(None), point(None)];

        assert!(BatchMeans::from_points(&q, &points).is_none());
        assert!(BatchMeans::from_points(&q, &[]).is_none());
    }

    #[test]
    fn test_short_values_array_counts_missing_as_zero() {
        let q = queries(&["a", "b"]);
        let points = vec![point(Some(vec![10, 20])), point(Some(vec![30]))];

        let means = BatchMeans::from_points(&q, &points).unwrap();
        assert_eq!(means.get("a"), Some(20.0));
        assert_eq!(means.get("b"), Some(10.0));
    }

    #[test]
    fn test_normalization_against_anchor() {
        let q = queries(&["a", "b", "anchor"]);
        let points = vec![point(Some(vec![50, 25, 100]))];

        let means = BatchMeans::from_points(&q, &points).unwrap();
        let normalized = means.normalize("anchor", 5.0).unwrap();

        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0], ("a".to_string(), 2.5));
        assert_eq!(normalized[1], ("b".to_string(), 1.25));
    }

    #[test]
    fn test_zero_anchor_drops_batch() {
        let q = queries(&["a", "anchor"]);
        let points = vec![point(Some(vec![50, 0]))];

        let means = BatchMeans::from_points(&q, &points).unwrap();
        assert!(means.normalize("anchor", 5.0).is_none());
    }

    #[test]
    fn test_absent_anchor_drops_batch() {
        let q = queries(&["a", "b"]);
        let points = vec![point(Some(vec![50, 25]))];

        let means = BatchMeans::from_points(&q, &points).unwrap();
        assert!(means.normalize("anchor", 5.0).is_none());
    }
}
