//! JSON seed data for the in-memory repository.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::client::Client;
use crate::domain::inquiry::Inquiry;
use crate::domain::settings::Profile;
use crate::domain::user::User;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub const USERS_FILE: &str = "users.json";
pub const CLIENTS_FILE: &str = "clients.json";
pub const INQUIRIES_FILE: &str = "inquiries.json";
pub const PROFILE_FILE: &str = "profile.json";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub inquiries: Vec<Inquiry>,
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl Fixtures {
    /// Reads every fixture file from `dir`. Missing files yield empty collections.
    pub fn load(dir: impl AsRef<Path>) -> RepositoryResult<Self> {
        let dir = dir.as_ref();

        let fixtures = Self {
            users: read_optional(&dir.join(USERS_FILE))?.unwrap_or_default(),
            clients: read_optional(&dir.join(CLIENTS_FILE))?.unwrap_or_default(),
            inquiries: read_optional(&dir.join(INQUIRIES_FILE))?.unwrap_or_default(),
            profile: read_optional(&dir.join(PROFILE_FILE))?,
        };

        log::info!(
            "Loaded fixtures from {}: {} users, {} clients, {} inquiries",
            dir.display(),
            fixtures.users.len(),
            fixtures.clients.len(),
            fixtures.inquiries.len()
        );

        Ok(fixtures)
    }
}

fn read_optional<T: DeserializeOwned>(path: &Path) -> RepositoryResult<Option<T>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("Fixture file {} not found, skipping", path.display());
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    serde_json::from_str(&raw).map(Some).map_err(|err| {
        log::error!("Failed to parse {}: {err}", path.display());
        RepositoryError::from(err)
    })
}
