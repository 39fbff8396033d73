// Domain layer: records and the ports the board talks through.

pub mod model;
pub mod ports;
