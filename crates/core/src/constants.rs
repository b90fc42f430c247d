/// Page size used when a caller does not pass one
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Offset used when a caller does not pass one
pub const DEFAULT_PAGE_OFFSET: u32 = 0;

/// Storage format of calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage format of budget month keys
pub const MONTH_FORMAT: &str = "%Y-%m";
