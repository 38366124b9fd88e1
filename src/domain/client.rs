use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::Record;
use crate::domain::types::{ClientId, ClientKind, VisaStatus, non_blank, normalize_email};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub kind: ClientKind,
    pub profession: Option<String>,
    pub country: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub visa_status: VisaStatus,
    /// Number of visa applications filed for this client.
    pub applications: u32,
    /// Free-form notes, sanitized before storage.
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Record for Client {
    type Id = ClientId;

    fn id(&self) -> ClientId {
        self.id
    }
}

/// Validated client fields used both for creation and for updates.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientDraft {
    pub name: String,
    pub kind: ClientKind,
    pub profession: Option<String>,
    pub country: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub visa_status: VisaStatus,
    pub applications: u32,
    pub notes: Option<String>,
}

impl ClientDraft {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        name: &str,
        kind: ClientKind,
        profession: &str,
        country: &str,
        email: &str,
        phone: &str,
        location: &str,
        visa_status: VisaStatus,
        applications: u32,
        notes: &str,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            kind,
            profession: non_blank(profession),
            country: non_blank(country),
            email: normalize_email(email),
            phone: non_blank(phone),
            location: non_blank(location),
            visa_status,
            applications,
            notes: non_blank(&ammonia::clean(notes)),
        }
    }

    /// Materializes the draft as a stored client.
    pub fn into_client(self, id: ClientId, created_at: NaiveDateTime) -> Client {
        Client {
            id,
            name: self.name,
            kind: self.kind,
            profession: self.profession,
            country: self.country,
            email: self.email,
            phone: self.phone,
            location: self.location,
            visa_status: self.visa_status,
            applications: self.applications,
            notes: self.notes,
            created_at,
        }
    }
}
