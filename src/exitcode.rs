//! Exit codes (BSD sysexits.h compatible subset)

/// Command line usage error
pub const USAGE: i32 = 64;

/// Input outside the domain of the algorithm (e.g. a negative number)
pub const DATAERR: i32 = 65;

/// Configuration error
pub const CONFIG: i32 = 78;
