/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [bitwise propagation](crate::procedures::bitwise) and the [propagation driver](crate::procedures::propagate).
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [wordwise propagation](crate::procedures::wordwise).
    pub const WORDWISE: &str = "wordwise";

    /// Logs related to [two-bit consistency](crate::procedures::two_bit).
    pub const TWO_BIT: &str = "two_bit";

    /// Logs related to the [trail](crate::db::trail) and [backjumping](crate::procedures::backjump).
    pub const TRAIL: &str = "trail";

    /// Logs related to [branching](crate::procedures::decision).
    pub const BRANCHING: &str = "branching";

    /// Logs related to [building](crate::builder) a topology.
    pub const BUILDER: &str = "builder";

    /// Logs related to the [propagation caches](crate::db::cache).
    pub const CACHE: &str = "cache";

    /// Logs related to [refreshing](crate::procedures::refresh) symbols.
    pub const REFRESH: &str = "refresh";

    /// Logs related to the [callback protocol](crate::ipasir_up).
    pub const CALLBACK: &str = "callback";
}
