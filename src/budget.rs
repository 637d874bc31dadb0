//! Optional resource caps shared by every search strategy.

use std::time::Duration;

/// Resource budget for a search
///
/// Three independent, composable limits: recursion depth, iteration count,
/// and wall-clock time. An unset limit is unbounded. The deterministic
/// searches consult the depth cap; the Monte Carlo loop polls the iteration
/// and time caps.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use nrow_search::SearchBudget;
///
/// let budget = SearchBudget::default()
///     .with_max_depth(6)
///     .with_max_iterations(10_000)
///     .with_max_time(Duration::from_millis(250));
///
/// assert!(budget.exceeds_max_depth(7));
/// assert!(!budget.exceeds_max_depth(6));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBudget {
    max_depth: Option<usize>,
    max_iterations: Option<usize>,
    max_time: Option<Duration>,
}

impl SearchBudget {
    /// Creates a fully unbounded budget
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Sets the maximum recursion depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Sets the maximum number of iterations
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    /// Sets the maximum search time
    pub fn with_max_time(mut self, duration: Duration) -> Self {
        self.max_time = Some(duration);
        self
    }

    /// Sets the maximum search time in milliseconds
    pub fn with_max_time_millis(self, millis: u64) -> Self {
        self.with_max_time(Duration::from_millis(millis))
    }

    /// Returns true if the depth is past the configured cap
    pub fn exceeds_max_depth(&self, depth: usize) -> bool {
        match self.max_depth {
            Some(max) => depth > max,
            None => false,
        }
    }

    /// Returns true if the iteration count is past the configured cap
    pub fn exceeds_max_iterations(&self, iterations: usize) -> bool {
        match self.max_iterations {
            Some(max) => iterations > max,
            None => false,
        }
    }

    /// Returns true if the elapsed time is past the configured cap
    pub fn exceeds_max_time(&self, elapsed: Duration) -> bool {
        match self.max_time {
            Some(max) => elapsed > max,
            None => false,
        }
    }
}
