//! Parkside park catalog - integration test support.
//!
//! This crate re-exports the workspace crates to support integration tests
//! that use `parkside::` paths.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    // Re-export core and service modules at the component level
    pub use parkside_core::*;
    pub use parkside_service::*;

    // Re-export db crate with all its public modules
    pub mod db {
        pub use parkside_db::db::*;

        // Additional db handlers from the API crate
        pub mod connection {
            pub use parkside_api::db_handler::DbProviderHandler;
            pub use parkside_db::db::connection::*;
        }
    }

    // Re-export models
    pub mod model {
        pub use parkside_db::model::*;
    }

    // Re-export API middleware and handlers
    pub mod middleware {
        pub use parkside_api::middleware::*;
    }

    // Re-export config from both core and the API crate
    pub mod config {
        pub use parkside_api::config::ConfigHandler;
        pub use parkside_core::config::*;
    }
}

// Re-export top-level modules for convenience
pub mod app {
    pub use parkside_api::*;

    pub mod api {
        pub use parkside_api::api::*;
    }
}
