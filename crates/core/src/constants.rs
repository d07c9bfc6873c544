//! Application-wide constants.

/// Flat transport cost per mile of distance to the auction site, in dollars.
/// Folded into the max-bid derivation; not configurable per inquiry.
pub const TRANSPORT_COST_PER_MILE: f64 = 0.4;

/// File name of the on-disk store, relative to the app data directory.
pub const DB_FILE_NAME: &str = "lotledger.db";
