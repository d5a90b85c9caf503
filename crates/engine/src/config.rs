//! Engine configuration.

/// Knobs for a single engine run.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    /// Rounds to run beyond `ceil(log2(participants))`.
    ///
    /// The reduction is converged after the computed round count; extra
    /// rounds must not change any weight. Tests use this to assert
    /// convergence stability.
    pub extra_rounds: u32,
}

impl EngineConfig {
    /// Set the number of extra rounds.
    pub fn with_extra_rounds(mut self, extra_rounds: u32) -> Self {
        self.extra_rounds = extra_rounds;
        self
    }
}
