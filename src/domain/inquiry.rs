use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::Record;
use crate::domain::types::{InquiryId, InquiryStatus};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Inquiry {
    pub id: InquiryId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: InquiryStatus,
    pub received_at: NaiveDateTime,
    #[serde(default)]
    pub replies: Vec<InquiryReply>,
}

impl Record for Inquiry {
    type Id = InquiryId;

    fn id(&self) -> InquiryId {
        self.id
    }
}

/// A response sent back to the author of an inquiry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InquiryReply {
    pub message: String,
    pub sent_at: NaiveDateTime,
}

/// Validated reply payload.
#[derive(Clone, Debug, PartialEq)]
pub struct NewReply {
    pub message: String,
}

impl NewReply {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            message: ammonia::clean(message).trim().to_string(),
        }
    }
}
