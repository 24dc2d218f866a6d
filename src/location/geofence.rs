use crate::app_config::GeofenceConfig;
use crate::domain::Coordinates;
use thiserror::Error;

const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Allowed check-in area: a radius around the office location. An
/// out-of-range position is a reportable outcome, not a fault, and never
/// blocks the field write that precedes the check.
#[derive(Clone, Copy, Debug)]
pub struct Geofence {
    office: Coordinates,
    radius_km: f64,
}

impl Geofence {
    pub fn new(office: Coordinates, radius_km: f64) -> Self {
        Geofence { office, radius_km }
    }

    pub fn from_config(config: &GeofenceConfig) -> Self {
        Geofence {
            office: Coordinates {
                latitude: config.latitude(),
                longitude: config.longitude(),
            },
            radius_km: config.radius_km(),
        }
    }

    pub fn validate(&self, position: &Coordinates) -> Result<(), GeofenceError> {
        let distance_km = distance_km(&self.office, position);
        if distance_km > self.radius_km {
            return Err(GeofenceError::OutOfRange {
                distance_km,
                radius_km: self.radius_km,
            });
        }

        Ok(())
    }
}

/// Great-circle distance between two coordinates (haversine).
pub fn distance_km(a: &Coordinates, b: &Coordinates) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[derive(Error, Debug)]
pub enum GeofenceError {
    #[error("position is {distance_km:.2} km from the office, outside the allowed {radius_km:.2} km")]
    OutOfRange { distance_km: f64, radius_km: f64 },
}
