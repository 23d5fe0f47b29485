//! Query term construction for the trends provider.
//!
//! Each destination is searched as a compound flights-plus-hotel term so the
//! interest signal reflects travel intent rather than generic city searches.

/// Builds the compound search term for a city, e.g.
/// `"Voli Milano + Hotel Milano"`.
pub fn build_query(city: &str) -> String {
    format!("Voli {city} + Hotel {city}")
}

/// Recovers the display city name from a term produced by [`build_query`].
///
/// Only defined for builder-produced terms; anything else comes back mangled
/// rather than failing.
pub fn clean_query_name(query: &str) -> String {
    query
        .split(" +")
        .next()
        .unwrap_or("")
        .replace("Voli ", "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_template() {
        assert_eq!(build_query("Milano"), "Voli Milano + Hotel Milano");
    }

    #[test]
    fn test_round_trip_simple_name() {
        assert_eq!(clean_query_name(&build_query("Londra")), "Londra");
    }

    #[test]
    fn test_round_trip_multi_word_name() {
        assert_eq!(clean_query_name(&build_query("New York")), "New York");
        assert_eq!(
            clean_query_name(&build_query("Sharm el-Sheikh")),
            "Sharm el-Sheikh"
        );
    }

    #[test]
    fn test_clean_tolerates_foreign_input() {
        // Not builder-produced: the result is mangled, not an error
        assert_eq!(clean_query_name("just a string"), "just a string");
        assert_eq!(clean_query_name(""), "");
    }
}
