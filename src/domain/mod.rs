// Domain layer: value models and ports (interfaces) for the race-data client.

pub mod model;
pub mod ports;
