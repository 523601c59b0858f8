// Domain layer: value types and the backend port. No HTTP here.

pub mod model;
pub mod ports;
