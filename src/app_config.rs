use config::Config;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    camera: Camera,
    location: Option<LocationApi>,
    geofence: Option<GeofenceConfig>,
    form: FormConfig,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// None means no positioning capability is configured for this kiosk.
    pub fn location(&self) -> Option<&LocationApi> {
        self.location.as_ref()
    }

    pub fn geofence(&self) -> Option<&GeofenceConfig> {
        self.geofence.as_ref()
    }

    pub fn form(&self) -> &FormConfig {
        &self.form
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    action_buffer_size: usize,
}

impl Core {
    pub fn action_buffer_size(&self) -> usize {
        self.action_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Camera {
    device_index: u32,
    frame_buffer_size: usize,
}

impl Camera {
    pub fn device_index(&self) -> u32 {
        self.device_index
    }

    pub fn frame_buffer_size(&self) -> usize {
        self.frame_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct LocationApi {
    url: String,
}

impl LocationApi {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Deserialize)]
pub struct GeofenceConfig {
    latitude: f64,
    longitude: f64,
    radius_km: f64,
}

impl GeofenceConfig {
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }
}

#[derive(Debug, Deserialize)]
pub struct FormConfig {
    fields: Vec<FieldConfig>,
}

impl FormConfig {
    pub fn fields(&self) -> &[FieldConfig] {
        &self.fields
    }
}

#[derive(Debug, Deserialize)]
pub struct FieldConfig {
    id: String,
    #[serde(default)]
    required: bool,
}

impl FieldConfig {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn required(&self) -> bool {
        self.required
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { action_buffer_size: 16 },
                camera: Camera {
                    device_index: 0,
                    frame_buffer_size: 4,
                },
                location: Some(LocationApi {
                    url: "https://position.url/".to_string(),
                }),
                geofence: Some(GeofenceConfig {
                    latitude: -6.2088,
                    longitude: 106.8456,
                    radius_km: 0.5,
                }),
                form: FormConfig {
                    fields: vec![
                        FieldConfig {
                            id: "employee_id".to_string(),
                            required: true,
                        },
                        FieldConfig {
                            id: "latitude".to_string(),
                            required: true,
                        },
                        FieldConfig {
                            id: "longitude".to_string(),
                            required: true,
                        },
                        FieldConfig {
                            id: "notes".to_string(),
                            required: false,
                        },
                    ],
                },
            },
        }
    }

    pub fn location_url(mut self, url: String) -> Self {
        self.config.location = Some(LocationApi { url });
        self
    }

    pub fn without_location(mut self) -> Self {
        self.config.location = None;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
