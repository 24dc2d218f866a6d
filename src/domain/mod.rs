pub mod actions;
mod coordinates;

pub use coordinates::Coordinates;
