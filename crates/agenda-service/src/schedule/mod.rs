pub mod localdate;

pub use localdate::{RangeError, UtcRange, is_within_local_date, resolve_local_date_range};
