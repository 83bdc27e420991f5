use crate::domain::ports::DataSource;

#[derive(Debug, Default, Clone, Copy)]
pub struct Database;

impl DataSource for Database {
    fn fetch_data(&self) -> String {
        tracing::debug!("Fetching data from the database backend");
        "Data from the database".to_string()
    }
}

/// Canned stand-in for a remote API; never opens a connection.
#[derive(Debug, Default, Clone, Copy)]
pub struct Api;

impl DataSource for Api {
    fn fetch_data(&self) -> String {
        tracing::debug!("Fetching data from the API backend");
        "Data from the API".to_string()
    }
}

/// Returns a fixed payload supplied at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSource {
    payload: String,
}

impl StaticSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl DataSource for StaticSource {
    fn fetch_data(&self) -> String {
        self.payload.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_payloads() {
        assert_eq!(Database.fetch_data(), "Data from the database");
        assert_eq!(Api.fetch_data(), "Data from the API");
        assert_eq!(StaticSource::new("hello").fetch_data(), "hello");
    }

    #[test]
    fn test_fetch_is_repeatable() {
        let source = StaticSource::new("same");
        assert_eq!(source.fetch_data(), source.fetch_data());
    }
}
