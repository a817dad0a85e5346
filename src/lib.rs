pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;
pub use config::ServiceConfig;

pub use adapters::InMemoryMeterStore;
pub use core::dispatcher::{QueryArguments, QueryDispatcher, QueryOperation, QueryOutcome};
pub use core::schema::{build_schema, MeterSchema};
pub use domain::{model::Meter, ports::MeterLookup};
pub use utils::error::{Result, ServiceError};
