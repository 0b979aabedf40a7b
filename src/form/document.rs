//! The page elements the submit handler touches.

pub const FORM_ID: &str = "form";
pub const MESSAGE_ID: &str = "msg";

/// Input controls captured into the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Extra,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Extra];

    /// Element id of the control.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Extra => "extra",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Extra => "Extra",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Name | Field::Extra => "text",
        }
    }
}

/// Access to the page, handed to the submitter explicitly.
pub trait Document {
    /// Current value of an input control.
    fn field_value(&self, field: Field) -> String;

    /// Replace the text content of the message element.
    fn set_message(&mut self, text: &str);

    /// Full navigation, replacing the current location.
    fn replace_location(&mut self, path: &str);
}

/// The submit event. Default navigation must always be suppressed.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// In-memory page for driving the submitter outside a browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessDocument {
    pub name: String,
    pub email: String,
    pub extra: String,
    /// Text content of `#msg`; `None` until written.
    pub message: Option<String>,
    /// Last location navigated to.
    pub location: Option<String>,
}

impl HeadlessDocument {
    pub fn new(name: &str, email: &str, extra: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            extra: extra.to_string(),
            message: None,
            location: None,
        }
    }
}

impl Document for HeadlessDocument {
    fn field_value(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Email => self.email.clone(),
            Field::Extra => self.extra.clone(),
        }
    }

    fn set_message(&mut self, text: &str) {
        self.message = Some(text.to_string());
    }

    fn replace_location(&mut self, path: &str) {
        self.location = Some(path.to_string());
    }
}
