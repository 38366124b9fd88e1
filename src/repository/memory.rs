//! In-memory persistence collaborator used by the admin pages.
//!
//! Every write sleeps for the configured latency before touching state and
//! appends one entry to the activity log.

use std::cell::RefCell;
use std::thread;
use std::time::Duration;

use chrono::{NaiveDateTime, Utc};

use crate::domain::activity::LogEntry;
use crate::domain::client::{Client, ClientDraft};
use crate::domain::inquiry::{Inquiry, InquiryReply, NewReply};
use crate::domain::settings::{PasswordChange, Profile, UpdateProfile};
use crate::domain::types::{ActivityKind, ClientId, InquiryId, InquiryStatus, LogEntryId, UserId};
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::fixtures::Fixtures;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    ActivityReader, ClientReader, ClientWriter, InquiryReader, InquiryWriter, SettingsReader,
    SettingsWriter, UserReader, UserWriter,
};

#[derive(Debug)]
struct MemoryState {
    users: Vec<User>,
    clients: Vec<Client>,
    inquiries: Vec<Inquiry>,
    activity: Vec<LogEntry>,
    profile: Profile,
    last_user_id: i32,
    last_client_id: i32,
    last_log_id: i32,
}

impl MemoryState {
    fn record(
        &mut self,
        action: ActivityKind,
        subject: String,
        details: String,
    ) -> RepositoryResult<()> {
        let id = LogEntryId::new(take_id(&mut self.last_log_id)?)?;
        log::debug!("activity #{id}: {action} {subject}");
        self.activity.push(LogEntry {
            id,
            action,
            subject,
            details,
            at: now(),
        });
        Ok(())
    }

    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.users
            .iter()
            .any(|user| user.email == email && Some(user.id) != except)
    }
}

/// Store backed by plain vectors behind a `RefCell`.
#[derive(Debug)]
pub struct InMemoryRepository {
    state: RefCell<MemoryState>,
    latency: Duration,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::from_fixtures(Fixtures::default())
    }
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store. Id counters continue after the highest seeded id.
    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        let last_user_id = highest(fixtures.users.iter().map(|u| u.id.get()));
        let last_client_id = highest(fixtures.clients.iter().map(|c| c.id.get()));

        Self {
            state: RefCell::new(MemoryState {
                users: fixtures.users,
                clients: fixtures.clients,
                inquiries: fixtures.inquiries,
                activity: Vec::new(),
                profile: fixtures.profile.unwrap_or_else(default_profile),
                last_user_id,
                last_client_id,
                last_log_id: 0,
            }),
            latency: Duration::ZERO,
        }
    }

    /// Sets the simulated round-trip delay applied to every write.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Advances `last` and returns the new id.
fn take_id(last: &mut i32) -> RepositoryResult<i32> {
    let id = last
        .checked_add(1)
        .ok_or_else(|| RepositoryError::Unexpected("id space exhausted".to_string()))?;
    *last = id;
    Ok(id)
}

fn highest(ids: impl Iterator<Item = i32>) -> i32 {
    ids.max().unwrap_or(0)
}

fn default_profile() -> Profile {
    Profile {
        name: "Administrator".to_string(),
        email: "admin@example.com".to_string(),
        phone: None,
        password_changed_at: None,
        updated_at: now(),
    }
}

fn duplicate_email(email: &str) -> RepositoryError {
    RepositoryError::ConstraintViolation(format!("email {email} is already in use"))
}

impl UserReader for InMemoryRepository {
    fn list_users(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.state.borrow().users.clone())
    }

    fn get_user(&self, id: UserId) -> RepositoryResult<Option<User>> {
        Ok(self.state.borrow().users.iter().find(|u| u.id == id).cloned())
    }
}

impl UserWriter for InMemoryRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        self.simulate_latency();
        let mut state = self.state.borrow_mut();

        if state.email_taken(&new_user.email, None) {
            return Err(duplicate_email(&new_user.email));
        }

        let user = User {
            id: UserId::new(take_id(&mut state.last_user_id)?)?,
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            phone: new_user.phone.clone(),
            role: new_user.role,
            status: new_user.status,
            created_at: now(),
        };
        state.users.push(user.clone());
        state.record(
            ActivityKind::Created,
            format!("user #{}", user.id),
            format!("Added {} as {}", user.name, user.role),
        )?;

        Ok(user)
    }

    fn update_user(&self, id: UserId, updates: &UpdateUser) -> RepositoryResult<User> {
        self.simulate_latency();
        let mut state = self.state.borrow_mut();

        if state.email_taken(&updates.email, Some(id)) {
            return Err(duplicate_email(&updates.email));
        }

        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepositoryError::NotFound)?;
        user.name = updates.name.clone();
        user.email = updates.email.clone();
        user.phone = updates.phone.clone();
        user.role = updates.role;
        user.status = updates.status;
        let user = user.clone();

        state.record(
            ActivityKind::Updated,
            format!("user #{id}"),
            format!("Updated {}", user.name),
        )?;

        Ok(user)
    }

    fn delete_user(&self, id: UserId) -> RepositoryResult<()> {
        self.simulate_latency();
        let mut state = self.state.borrow_mut();

        let position = state
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(RepositoryError::NotFound)?;
        let user = state.users.remove(position);

        state.record(
            ActivityKind::Deleted,
            format!("user #{id}"),
            format!("Removed {}", user.name),
        )
    }
}

impl ClientReader for InMemoryRepository {
    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        Ok(self.state.borrow().clients.clone())
    }

    fn get_client(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        Ok(self.state.borrow().clients.iter().find(|c| c.id == id).cloned())
    }
}

impl ClientWriter for InMemoryRepository {
    fn create_client(&self, draft: &ClientDraft) -> RepositoryResult<Client> {
        self.simulate_latency();
        let mut state = self.state.borrow_mut();

        let id = ClientId::new(take_id(&mut state.last_client_id)?)?;
        let client = draft.clone().into_client(id, now());
        state.clients.push(client.clone());
        state.record(
            ActivityKind::Created,
            format!("client #{id}"),
            format!("Added {}", client.name),
        )?;

        Ok(client)
    }

    fn update_client(&self, id: ClientId, draft: &ClientDraft) -> RepositoryResult<Client> {
        self.simulate_latency();
        let mut state = self.state.borrow_mut();

        let client = state
            .clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)?;
        *client = draft.clone().into_client(id, client.created_at);
        let client = client.clone();

        state.record(
            ActivityKind::Updated,
            format!("client #{id}"),
            format!("Updated {} ({})", client.name, client.visa_status),
        )?;

        Ok(client)
    }

    fn delete_client(&self, id: ClientId) -> RepositoryResult<()> {
        self.simulate_latency();
        let mut state = self.state.borrow_mut();

        let position = state
            .clients
            .iter()
            .position(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)?;
        let client = state.clients.remove(position);

        state.record(
            ActivityKind::Deleted,
            format!("client #{id}"),
            format!("Removed {}", client.name),
        )
    }
}

impl InquiryReader for InMemoryRepository {
    fn list_inquiries(&self) -> RepositoryResult<Vec<Inquiry>> {
        Ok(self.state.borrow().inquiries.clone())
    }

    fn get_inquiry(&self, id: InquiryId) -> RepositoryResult<Option<Inquiry>> {
        Ok(self.state.borrow().inquiries.iter().find(|i| i.id == id).cloned())
    }
}

impl InquiryWriter for InMemoryRepository {
    fn reply_to_inquiry(&self, id: InquiryId, reply: &NewReply) -> RepositoryResult<Inquiry> {
        self.simulate_latency();
        let mut state = self.state.borrow_mut();

        let inquiry = state
            .inquiries
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(RepositoryError::NotFound)?;
        inquiry.replies.push(InquiryReply {
            message: reply.message.clone(),
            sent_at: now(),
        });
        if inquiry.status == InquiryStatus::New {
            inquiry.status = InquiryStatus::InProgress;
        }
        let inquiry = inquiry.clone();

        state.record(
            ActivityKind::Replied,
            format!("inquiry #{id}"),
            format!("Replied to {}", inquiry.email),
        )?;

        Ok(inquiry)
    }

    fn set_inquiry_status(
        &self,
        id: InquiryId,
        status: InquiryStatus,
    ) -> RepositoryResult<Inquiry> {
        self.simulate_latency();
        let mut state = self.state.borrow_mut();

        let inquiry = state
            .inquiries
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(RepositoryError::NotFound)?;
        inquiry.status = status;
        let inquiry = inquiry.clone();

        state.record(
            ActivityKind::Updated,
            format!("inquiry #{id}"),
            format!("Marked as {status}"),
        )?;

        Ok(inquiry)
    }

    fn delete_inquiry(&self, id: InquiryId) -> RepositoryResult<()> {
        self.simulate_latency();
        let mut state = self.state.borrow_mut();

        let position = state
            .inquiries
            .iter()
            .position(|i| i.id == id)
            .ok_or(RepositoryError::NotFound)?;
        let inquiry = state.inquiries.remove(position);

        state.record(
            ActivityKind::Deleted,
            format!("inquiry #{id}"),
            format!("Removed \"{}\"", inquiry.subject),
        )
    }
}

impl SettingsReader for InMemoryRepository {
    fn get_profile(&self) -> RepositoryResult<Profile> {
        Ok(self.state.borrow().profile.clone())
    }
}

impl SettingsWriter for InMemoryRepository {
    fn update_profile(&self, updates: &UpdateProfile) -> RepositoryResult<Profile> {
        self.simulate_latency();
        let mut state = self.state.borrow_mut();

        state.profile.name = updates.name.clone();
        state.profile.email = updates.email.clone();
        state.profile.phone = updates.phone.clone();
        state.profile.updated_at = now();
        let profile = state.profile.clone();

        state.record(
            ActivityKind::Settings,
            "profile".to_string(),
            "Updated profile details".to_string(),
        )?;

        Ok(profile)
    }

    fn change_password(&self, change: &PasswordChange) -> RepositoryResult<Profile> {
        self.simulate_latency();

        // Credentials are not kept here; only the request shape is checked.
        if change.current_password == change.new_password {
            return Err(RepositoryError::ValidationError(
                "new password must differ from the current one".to_string(),
            ));
        }

        let mut state = self.state.borrow_mut();
        let changed_at = now();
        state.profile.password_changed_at = Some(changed_at);
        state.profile.updated_at = changed_at;
        let profile = state.profile.clone();

        state.record(
            ActivityKind::Settings,
            "password".to_string(),
            "Changed account password".to_string(),
        )?;

        Ok(profile)
    }
}

impl ActivityReader for InMemoryRepository {
    fn list_activity(&self) -> RepositoryResult<Vec<LogEntry>> {
        Ok(self.state.borrow().activity.iter().rev().cloned().collect())
    }
}
