use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,  // In signed degrees
    pub longitude: f64, // In signed degrees
}
