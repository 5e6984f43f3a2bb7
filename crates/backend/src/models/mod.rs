//! Entity records returned by the backends and the DTOs sent to them.
//!
//! Records tolerate unknown fields; optional fields default to `None`.

pub mod agency;
pub mod artist;
pub mod audit;
pub mod conflict;
pub mod libretime;
pub mod notification;
pub mod order;
pub mod rights;
pub mod sales_team;
pub mod spot;
pub mod station;
pub mod statistics;
pub mod submission;

/// Builder for the query pairs forwarded to a backend list endpoint.
///
/// `None` values are skipped so the backend applies its own defaults.
#[derive(Debug, Default)]
pub struct QueryPairs(Vec<(&'static str, String)>);

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key=value` when `value` is present.
    pub fn opt<T: ToString>(mut self, key: &'static str, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.0.push((key, v.to_string()));
        }
        self
    }

    /// Add `key=value` unconditionally.
    pub fn with<T: ToString>(mut self, key: &'static str, value: T) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    pub fn into_vec(self) -> Vec<(&'static str, String)> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_absent_values() {
        let pairs = QueryPairs::new()
            .opt("status", Some("active"))
            .opt::<i64>("station_id", None)
            .with("limit", 50)
            .into_vec();
        assert_eq!(
            pairs,
            vec![("status", "active".to_string()), ("limit", "50".to_string())]
        );
    }
}
