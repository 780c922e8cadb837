//! Port traits for infrastructure boundaries.
//!
//! The calculation engine is pure, so the only port left is randomness:
//! stat rolls and biography picks come from a `RandomPort` so tests can
//! script them.

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform integer in `min..=max`.
    fn gen_range(&self, min: i32, max: i32) -> i32;
}

/// Borrow a port as the domain's `RandomSource`.
pub fn random_source(port: &dyn RandomPort) -> impl FnMut(i32, i32) -> i32 + '_ {
    move |min, max| port.gen_range(min, max)
}
