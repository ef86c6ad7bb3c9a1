//! Integration tests for the event API HTTP surface.
//!
//! Each test builds its own service with an empty store, so tests run in
//! parallel without contention.


mod events;
mod healthcheck;
