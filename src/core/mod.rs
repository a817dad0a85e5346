pub mod dispatcher;
pub mod query;
pub mod schema;
pub mod server;

pub use crate::domain::model::Meter;
pub use crate::domain::ports::MeterLookup;
pub use crate::utils::error::Result;
