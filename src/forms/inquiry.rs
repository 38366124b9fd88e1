use serde::Deserialize;
use validator::Validate;

use crate::domain::inquiry::NewReply;
use crate::forms::rules::required;
use crate::forms::{FormError, FormModel};

#[derive(Clone, Debug, Default, Deserialize, Validate)]
/// Form data for replying to an inquiry.
pub struct ReplyForm {
    #[validate(custom(function = "required"))]
    pub message: String,
}

impl FormModel for ReplyForm {
    type Output = NewReply;

    const FIELDS: &'static [&'static str] = &["message"];

    fn label(_field: &str) -> &'static str {
        "Message"
    }

    fn field(&self, name: &str) -> Option<&str> {
        (name == "message").then_some(self.message.as_str())
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError> {
        if name != "message" {
            return Err(FormError::UnknownField(name.to_string()));
        }
        self.message = value;
        Ok(())
    }

    fn to_output(&self) -> Result<NewReply, FormError> {
        Ok(NewReply::new(&self.message))
    }
}
