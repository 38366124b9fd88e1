#![allow(dead_code)]

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use crm_admin::domain::types::{UserId, UserRole, UserStatus};
use crm_admin::domain::user::User;
use crm_admin::fixtures::Fixtures;
use crm_admin::repository::InMemoryRepository;
use serde_json::json;
use tempfile::TempDir;

/// Temporary fixtures directory removed on drop.
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    /// Writes the standard seed files.
    pub fn new() -> Self {
        let fixture = Self::empty();
        fixture.write("users.json", &users_json());
        fixture.write(
            "clients.json",
            &json!([
                {"id": 1, "name": "Amara Obi", "kind": "individual", "profession": "Nurse",
                 "country": "Nigeria", "email": "amara@example.com", "phone": null,
                 "location": "Lagos", "visa_status": "in_review", "applications": 1,
                 "notes": null, "created_at": "2024-03-02T10:00:00"},
                {"id": 2, "name": "Northwind Logistics", "kind": "business", "profession": null,
                 "country": "Canada", "email": "hr@northwind.example.com", "phone": null,
                 "location": "Vancouver", "visa_status": "approved", "applications": 4,
                 "notes": null, "created_at": "2024-03-09T13:30:00"}
            ]),
        );
        fixture.write(
            "inquiries.json",
            &json!([
                {"id": 1, "name": "Fatima Zahra", "email": "fatima@example.com",
                 "subject": "Student visa", "message": "Which documents?", "status": "new",
                 "received_at": "2024-06-01T08:12:00"}
            ]),
        );
        fixture.write(
            "profile.json",
            &json!({"name": "Sarah Johnson", "email": "sarah.johnson@example.com",
                    "phone": null, "password_changed_at": null,
                    "updated_at": "2024-06-01T00:00:00"}),
        );
        fixture
    }

    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, value: &serde_json::Value) {
        self.write_raw(name, &value.to_string());
    }

    pub fn write_raw(&self, name: &str, contents: &str) {
        fs::write(self.dir.path().join(name), contents).expect("write fixture file");
    }

    pub fn repository(&self) -> InMemoryRepository {
        InMemoryRepository::from_fixtures(Fixtures::load(self.path()).expect("load fixtures"))
    }
}

fn users_json() -> serde_json::Value {
    let names = [
        "Sarah Johnson",
        "Michael Chen",
        "Priya Patel",
        "David Okafor",
        "Elena Rossi",
        "James Walker",
    ];
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            json!({
                "id": index + 1,
                "name": name,
                "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
                "phone": null,
                "role": if index == 0 { "admin" } else { "consultant" },
                "status": if index == 3 { "inactive" } else { "active" },
                "created_at": "2024-01-15T09:30:00"
            })
        })
        .collect()
}

pub fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .expect("valid timestamp")
}

/// Six users, the third of which is "Sarah Johnson".
pub fn six_users() -> Vec<User> {
    [
        "Michael Chen",
        "Priya Patel",
        "Sarah Johnson",
        "David Okafor",
        "Elena Rossi",
        "James Walker",
    ]
    .iter()
    .enumerate()
    .map(|(index, name)| User {
        id: UserId::new(index as i32 + 1).expect("valid id"),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: None,
        role: if index == 2 { UserRole::Admin } else { UserRole::Consultant },
        status: UserStatus::Active,
        created_at: timestamp(),
    })
    .collect()
}
