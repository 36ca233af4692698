// Domain layer: quote models and ports. No dependencies beyond serde and chrono.

pub mod model;
pub mod ports;
