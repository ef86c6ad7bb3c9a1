//! Agenda event server - integration test support.
//!
//! This crate re-exports the workspace crates to support integration tests
//! that use `agenda_test::` paths.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    // Re-export core and service modules at the component level
    pub use agenda_core::*;
    pub use agenda_service::*;

    // Re-export the store crate with its public modules
    pub mod store {
        pub use agenda_store::model;
        pub use agenda_store::store::*;
    }

    // Re-export config from both core and app
    pub mod config {
        pub use agenda_app::config::ConfigHandler;
        pub use agenda_core::config::*;
    }
}

// Re-export top-level modules for convenience
pub mod app {
    pub use agenda_app::*;

    pub mod api {
        pub use agenda_app::app::api::*;
    }
}
