// Adapters layer: concrete MeterLookup implementations.

pub mod memory;

pub use memory::InMemoryMeterStore;
