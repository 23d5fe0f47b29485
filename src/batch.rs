//! Batch planning for outbound trends requests.

use crate::query::build_query;

/// One outbound request: up to [`crate::scan::BATCH_SIZE`] destination terms
/// plus the anchor term as the final element.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub queries: Vec<String>,
}

/// Splits the ordered city list into contiguous groups of at most `size`
/// (the last group may be shorter) and maps each group to its query terms
/// with `anchor_query` appended.
///
/// The anchor rides along in every batch so that indices normalized in
/// different batches stay comparable without one oversized request.
pub fn plan_batches(cities: &[&str], size: usize, anchor_query: &str) -> Vec<Batch> {
    cities
        .chunks(size)
        .map(|chunk| {
            let mut queries: Vec<String> = chunk.iter().map(|city| build_query(city)).collect();
            queries.push(anchor_query.to_string());
            Batch { queries }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::clean_query_name;

    const ANCHOR: &str = "Voli Roma + Hotel Roma";

    #[test]
    fn test_five_cities_make_two_batches() {
        let cities = ["Londra", "Parigi", "Barcellona", "Amsterdam", "Tokyo"];
        let batches = plan_batches(&cities, 4, ANCHOR);

        assert_eq!(batches.len(), 2);
        // 4 cities + anchor, then 1 city + anchor
        assert_eq!(batches[0].queries.len(), 5);
        assert_eq!(batches[1].queries.len(), 2);
    }

    #[test]
    fn test_anchor_is_always_last() {
        let cities = ["Londra", "Parigi", "Barcellona", "Amsterdam", "Tokyo"];
        for batch in plan_batches(&cities, 4, ANCHOR) {
            assert_eq!(batch.queries.last().map(String::as_str), Some(ANCHOR));
        }
    }

    #[test]
    fn test_chunks_reconstruct_original_order() {
        let cities = ["A", "B", "C", "D", "E", "F", "G"];
        let batches = plan_batches(&cities, 3, ANCHOR);

        let recovered: Vec<String> = batches
            .iter()
            .flat_map(|b| &b.queries[..b.queries.len() - 1])
            .map(|q| clean_query_name(q))
            .collect();
        assert_eq!(recovered, cities);

        for (i, batch) in batches.iter().enumerate() {
            let chunk_len = batch.queries.len() - 1;
            if i + 1 < batches.len() {
                assert_eq!(chunk_len, 3);
            } else {
                assert!(chunk_len >= 1 && chunk_len <= 3);
            }
        }
    }

    #[test]
    fn test_empty_city_list() {
        let batches = plan_batches(&[], 4, ANCHOR);
        assert!(batches.is_empty());
    }
}
