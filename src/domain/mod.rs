// Domain layer: value types and ports. The resolver talks to the network only through `Transport`.

pub mod model;
pub mod ports;
