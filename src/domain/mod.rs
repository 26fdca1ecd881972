// Domain layer: the book model and the ports the adapters implement.

pub mod model;
pub mod ports;
