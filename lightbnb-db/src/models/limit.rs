//! Result-count cap for list queries

/// Maximum rows a single list query may return
pub const MAX_LIMIT: u32 = 100;

/// Rows returned when the caller does not say
pub const DEFAULT_LIMIT: u32 = 10;

/// Row cap bound into `LIMIT`, clamped to `1..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(u32);

impl Limit {
    pub fn new(n: u32) -> Self {
        Self(n.clamp(1, MAX_LIMIT))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Value bound into SQL (`LIMIT` takes BIGINT)
    pub fn as_i64(self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten() {
        assert_eq!(Limit::default().get(), 10);
    }

    #[test]
    fn clamps() {
        assert_eq!(Limit::new(0).get(), 1);
        assert_eq!(Limit::new(25).get(), 25);
        assert_eq!(Limit::new(999).get(), 100);
    }

    #[test]
    fn binds_as_bigint() {
        assert_eq!(Limit::new(7).as_i64(), 7i64);
    }
}
