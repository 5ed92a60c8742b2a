/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every assignment notified, including fixed assignments.
    pub assignments: usize,

    /// A count of backtracks.
    pub backtracks: usize,

    /// A count of columns examined by bitwise propagation.
    pub columns: usize,

    /// A count of literals propagated.
    pub propagations: usize,

    /// A count of contradictions found by bitwise or wordwise propagation.
    pub conflicts: usize,

    /// A count of sum equations refined by wordwise propagation.
    pub derivations: usize,

    /// A count of checks of two-bit equations.
    pub two_bit_checks: usize,

    /// A count of blocking clauses found by checks of two-bit equations.
    pub two_bit_conflicts: usize,

    /// A count of decisions made.
    pub decisions: usize,

    /// A count of reason clauses given.
    pub reasons: usize,
}
