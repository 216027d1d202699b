// Domain layer: value objects and ports. No I/O here.

pub mod batch;
pub mod intake;
pub mod model;
pub mod ports;
