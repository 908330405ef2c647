// Domain layer: save dump model and the ports the processor talks through.

pub mod model;
pub mod ports;
