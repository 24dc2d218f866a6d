/// A single form input. The error indicator is the presentational "this field
/// is missing" marker the UI renders; it carries no meaning beyond that.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    id: String,
    value: String,
    required: bool,
    error: bool,
}

impl Field {
    pub fn required(id: impl Into<String>) -> Self {
        Field {
            id: id.into(),
            value: String::new(),
            required: true,
            error: false,
        }
    }

    pub fn optional(id: impl Into<String>) -> Self {
        Field {
            id: id.into(),
            value: String::new(),
            required: false,
            error: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn mark_error(&mut self) {
        self.error = true;
    }

    pub fn clear_error(&mut self) {
        self.error = false;
    }
}
