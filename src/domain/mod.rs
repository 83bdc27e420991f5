// Domain layer: capability contracts (ports) and the plain data they exchange.

pub mod model;
pub mod ports;
