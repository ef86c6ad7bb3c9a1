pub mod event;

pub use event::{Event, NewEvent, utc_millis};
