use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Plain `{"message": "..."}` acknowledgement body.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GenericMessage {
    pub message: String,
}

impl GenericMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
