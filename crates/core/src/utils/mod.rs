pub mod decimal_utils;
pub mod time_utils;

pub use decimal_utils::{checked_add, checked_sub, checked_sum};
pub use time_utils::{current_month, month_bounds, month_key, parse_month};
