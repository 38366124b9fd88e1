use crate::domain::Record;
use crate::domain::activity::LogEntry;
use crate::domain::client::{Client, ClientDraft};
use crate::domain::inquiry::{Inquiry, NewReply};
use crate::domain::settings::{PasswordChange, Profile, UpdateProfile};
use crate::domain::types::{ClientId, InquiryId, InquiryStatus, UserId};
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use memory::InMemoryRepository;

pub trait UserReader {
    fn list_users(&self) -> RepositoryResult<Vec<User>>;
    fn get_user(&self, id: UserId) -> RepositoryResult<Option<User>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn update_user(&self, id: UserId, updates: &UpdateUser) -> RepositoryResult<User>;
    fn delete_user(&self, id: UserId) -> RepositoryResult<()>;
}

pub trait ClientReader {
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
    fn get_client(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
}

pub trait ClientWriter {
    fn create_client(&self, draft: &ClientDraft) -> RepositoryResult<Client>;
    fn update_client(&self, id: ClientId, draft: &ClientDraft) -> RepositoryResult<Client>;
    fn delete_client(&self, id: ClientId) -> RepositoryResult<()>;
}

pub trait InquiryReader {
    fn list_inquiries(&self) -> RepositoryResult<Vec<Inquiry>>;
    fn get_inquiry(&self, id: InquiryId) -> RepositoryResult<Option<Inquiry>>;
}

pub trait InquiryWriter {
    fn reply_to_inquiry(&self, id: InquiryId, reply: &NewReply) -> RepositoryResult<Inquiry>;
    fn set_inquiry_status(&self, id: InquiryId, status: InquiryStatus)
    -> RepositoryResult<Inquiry>;
    fn delete_inquiry(&self, id: InquiryId) -> RepositoryResult<()>;
}

pub trait SettingsReader {
    fn get_profile(&self) -> RepositoryResult<Profile>;
}

pub trait SettingsWriter {
    fn update_profile(&self, updates: &UpdateProfile) -> RepositoryResult<Profile>;
    fn change_password(&self, change: &PasswordChange) -> RepositoryResult<Profile>;
}

pub trait ActivityReader {
    /// Activity log, newest first.
    fn list_activity(&self) -> RepositoryResult<Vec<LogEntry>>;
}

/// Create/update/delete capability for one record type, injected into pages.
pub trait RecordStore<T: Record> {
    /// Payload accepted when creating a record.
    type New;
    /// Payload accepted when editing a record.
    type Update;

    fn create(&self, new: &Self::New) -> RepositoryResult<T>;
    fn update(&self, id: T::Id, updates: &Self::Update) -> RepositoryResult<T>;
    fn delete(&self, id: T::Id) -> RepositoryResult<()>;
}

impl<R> RecordStore<User> for R
where
    R: UserWriter + ?Sized,
{
    type New = NewUser;
    type Update = UpdateUser;

    fn create(&self, new: &NewUser) -> RepositoryResult<User> {
        self.create_user(new)
    }

    fn update(&self, id: UserId, updates: &UpdateUser) -> RepositoryResult<User> {
        self.update_user(id, updates)
    }

    fn delete(&self, id: UserId) -> RepositoryResult<()> {
        self.delete_user(id)
    }
}

impl<R> RecordStore<Client> for R
where
    R: ClientWriter + ?Sized,
{
    type New = ClientDraft;
    type Update = ClientDraft;

    fn create(&self, new: &ClientDraft) -> RepositoryResult<Client> {
        self.create_client(new)
    }

    fn update(&self, id: ClientId, updates: &ClientDraft) -> RepositoryResult<Client> {
        self.update_client(id, updates)
    }

    fn delete(&self, id: ClientId) -> RepositoryResult<()> {
        self.delete_client(id)
    }
}
