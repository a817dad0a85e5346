// Domain layer: the meter model and the lookup port.

pub mod model;
pub mod ports;
