//! City Feed
//!
//! City list for the selected UF. Each refetch takes a new token; only the
//! response carrying the latest token may replace the list.

use crate::models::City;

/// Identifies one cities request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityFeed {
    cities: Vec<City>,
    latest: u64,
}

impl CityFeed {
    /// Start a refetch: the current list is invalidated immediately
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        self.cities.clear();
        RequestToken(self.latest)
    }

    /// Apply a response. Returns false (and changes nothing) when a newer
    /// request has been started since `token` was issued.
    pub fn resolve(&mut self, token: RequestToken, cities: Vec<City>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.cities = cities;
        true
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(id: u32, name: &str) -> City {
        City { id, name: name.to_string() }
    }

    #[test]
    fn test_resolve_replaces_whole_list() {
        let mut feed = CityFeed::default();
        let first = feed.begin();
        assert!(feed.resolve(first, vec![city(1, "Santos"), city(2, "Campinas")]));

        let second = feed.begin();
        assert!(feed.resolve(second, vec![city(3, "Niterói")]));
        assert_eq!(feed.cities(), [city(3, "Niterói")]);
    }

    #[test]
    fn test_begin_clears_previous_state_list() {
        let mut feed = CityFeed::default();
        let token = feed.begin();
        feed.resolve(token, vec![city(1, "Santos")]);

        feed.begin();
        assert!(feed.cities().is_empty());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut feed = CityFeed::default();
        let sp = feed.begin();
        let rj = feed.begin();

        assert!(feed.resolve(rj, vec![city(3, "Niterói")]));
        // SP answers late
        assert!(!feed.resolve(sp, vec![city(1, "Santos")]));
        assert_eq!(feed.cities(), [city(3, "Niterói")]);
    }

    #[test]
    fn test_tokens_increase() {
        let mut feed = CityFeed::default();
        let a = feed.begin();
        let b = feed.begin();
        assert!(b > a);
        assert!(!feed.is_current(a));
        assert!(feed.is_current(b));
    }
}
