mod fetcher;
mod geofence;
mod http;
mod provider;

pub use fetcher::{LATITUDE_FIELD, LONGITUDE_FIELD, fetch_location};
pub use geofence::{Geofence, GeofenceError, distance_km};
pub use http::HttpPositionProvider;
pub use provider::{PositionError, PositionProvider};
