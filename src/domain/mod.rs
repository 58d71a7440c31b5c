// Domain layer: the report records and the optimizer port.

pub mod model;
pub mod ports;
