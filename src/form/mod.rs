mod field;
mod validator;

pub use field::Field;
pub use validator::validate;

use crate::app_config::FormConfig;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

/// The form is shared between the synchronous validator and the spawned
/// location fetcher, so it lives behind a lock.
pub type SharedForm = Arc<RwLock<Form>>;

#[derive(Debug, Default)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Form { fields }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        let fields = config
            .fields()
            .iter()
            .map(|field| {
                if field.required() {
                    Field::required(field.id())
                } else {
                    Field::optional(field.id())
                }
            })
            .collect();

        Form { fields }
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.id() == id)
    }

    /// Overwrites the value of the identified field. Returns false when the
    /// form has no such field.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|field| field.id() == id) {
            Some(field) => {
                field.set_value(value);
                true
            }
            None => {
                warn!("⚠️ Form has no field '{}'", id);
                false
            }
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_config_preserves_order_and_required_flags() {
        let config = AppConfigBuilder::new().build();
        let form = Form::from_config(config.form());

        let ids = form.fields().map(|field| field.id().to_string()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["employee_id", "latitude", "longitude", "notes"]);

        assert!(form.field("employee_id").unwrap().is_required());
        assert!(form.field("latitude").unwrap().is_required());
        assert!(form.field("longitude").unwrap().is_required());
        assert!(!form.field("notes").unwrap().is_required());
    }

    #[test]
    fn set_value_reports_unknown_fields() {
        let mut form = Form::new(vec![Field::required("employee_id")]);

        assert!(form.set_value("employee_id", "E-1042"));
        assert!(!form.set_value("badge", "7"));
        assert_eq!(form.field("employee_id").unwrap().value(), "E-1042");
    }
}
