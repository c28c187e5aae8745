// Domain layer: records, gateway event shapes and the ports the core depends on.

pub mod event;
pub mod model;
pub mod ports;
