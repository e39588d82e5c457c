// Domain layer: request model and ports. No transport details here.

pub mod model;
pub mod ports;
