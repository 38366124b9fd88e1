use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::client::{Client, ClientDraft};
use crate::domain::types::{ClientKind, VisaStatus};
use crate::forms::rules::{EMAIL_SHAPE, choice, required, whole_number};
use crate::forms::{FormError, FormModel};

fn client_kind(value: &str) -> Result<(), ValidationError> {
    choice::<ClientKind>(value)
}

fn visa_status(value: &str) -> Result<(), ValidationError> {
    choice::<VisaStatus>(value)
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for the add/edit client modal.
pub struct ClientForm {
    #[validate(custom(function = "required"))]
    pub name: String,
    #[validate(custom(function = "client_kind"))]
    pub r#type: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub country: String,
    #[validate(
        custom(function = "required"),
        regex(path = *EMAIL_SHAPE, code = "email", message = "Enter a valid email address")
    )]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[validate(custom(function = "visa_status"))]
    pub visa_status: String,
    #[serde(default)]
    #[validate(custom(function = "whole_number"))]
    pub applications: String,
    #[serde(default)]
    pub notes: String,
}

impl Default for ClientForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            r#type: ClientKind::Individual.as_str().to_string(),
            profession: String::new(),
            country: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            visa_status: VisaStatus::NotApplied.as_str().to_string(),
            applications: "0".to_string(),
            notes: String::new(),
        }
    }
}

impl From<&Client> for ClientForm {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            r#type: client.kind.as_str().to_string(),
            profession: client.profession.clone().unwrap_or_default(),
            country: client.country.clone().unwrap_or_default(),
            email: client.email.clone(),
            phone: client.phone.clone().unwrap_or_default(),
            location: client.location.clone().unwrap_or_default(),
            visa_status: client.visa_status.as_str().to_string(),
            applications: client.applications.to_string(),
            notes: client.notes.clone().unwrap_or_default(),
        }
    }
}

impl FormModel for ClientForm {
    type Output = ClientDraft;

    const FIELDS: &'static [&'static str] = &[
        "name",
        "type",
        "profession",
        "country",
        "email",
        "phone",
        "location",
        "visa_status",
        "applications",
        "notes",
    ];

    fn label(field: &str) -> &'static str {
        match field {
            "name" => "Name",
            "type" => "Client type",
            "profession" => "Profession",
            "country" => "Country",
            "email" => "Email",
            "phone" => "Phone",
            "location" => "Location",
            "visa_status" => "Visa status",
            "applications" => "Applications",
            "notes" => "Notes",
            _ => "Field",
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "type" => Some(&self.r#type),
            "profession" => Some(&self.profession),
            "country" => Some(&self.country),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            "location" => Some(&self.location),
            "visa_status" => Some(&self.visa_status),
            "applications" => Some(&self.applications),
            "notes" => Some(&self.notes),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError> {
        let slot = match name {
            "name" => &mut self.name,
            "type" => &mut self.r#type,
            "profession" => &mut self.profession,
            "country" => &mut self.country,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "location" => &mut self.location,
            "visa_status" => &mut self.visa_status,
            "applications" => &mut self.applications,
            "notes" => &mut self.notes,
            _ => return Err(FormError::UnknownField(name.to_string())),
        };
        *slot = value;
        Ok(())
    }

    fn to_output(&self) -> Result<ClientDraft, FormError> {
        let kind = self
            .r#type
            .parse::<ClientKind>()
            .map_err(|err| FormError::InvalidValue {
                field: "type",
                reason: err.to_string(),
            })?;
        let visa_status =
            self.visa_status
                .parse::<VisaStatus>()
                .map_err(|err| FormError::InvalidValue {
                    field: "visa_status",
                    reason: err.to_string(),
                })?;
        let applications = match self.applications.trim() {
            "" => 0,
            raw => raw.parse::<u32>().map_err(|err| FormError::InvalidValue {
                field: "applications",
                reason: err.to_string(),
            })?,
        };

        Ok(ClientDraft::new(
            &self.name,
            kind,
            &self.profession,
            &self.country,
            &self.email,
            &self.phone,
            &self.location,
            visa_status,
            applications,
            &self.notes,
        ))
    }
}
