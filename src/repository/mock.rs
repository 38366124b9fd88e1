//! Mock repository implementations for isolating pages in tests.

use mockall::mock;

use crate::domain::activity::LogEntry;
use crate::domain::client::{Client, ClientDraft};
use crate::domain::inquiry::{Inquiry, NewReply};
use crate::domain::settings::{PasswordChange, Profile, UpdateProfile};
use crate::domain::types::{ClientId, InquiryId, InquiryStatus, UserId};
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ActivityReader, ClientReader, ClientWriter, InquiryReader, InquiryWriter, SettingsReader,
    SettingsWriter, UserReader, UserWriter,
};

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn list_users(&self) -> RepositoryResult<Vec<User>>;
        fn get_user(&self, id: UserId) -> RepositoryResult<Option<User>>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn update_user(&self, id: UserId, updates: &UpdateUser) -> RepositoryResult<User>;
        fn delete_user(&self, id: UserId) -> RepositoryResult<()>;
    }

    impl ClientReader for Repository {
        fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
        fn get_client(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, draft: &ClientDraft) -> RepositoryResult<Client>;
        fn update_client(&self, id: ClientId, draft: &ClientDraft) -> RepositoryResult<Client>;
        fn delete_client(&self, id: ClientId) -> RepositoryResult<()>;
    }

    impl InquiryReader for Repository {
        fn list_inquiries(&self) -> RepositoryResult<Vec<Inquiry>>;
        fn get_inquiry(&self, id: InquiryId) -> RepositoryResult<Option<Inquiry>>;
    }

    impl InquiryWriter for Repository {
        fn reply_to_inquiry(&self, id: InquiryId, reply: &NewReply) -> RepositoryResult<Inquiry>;
        fn set_inquiry_status(
            &self,
            id: InquiryId,
            status: InquiryStatus,
        ) -> RepositoryResult<Inquiry>;
        fn delete_inquiry(&self, id: InquiryId) -> RepositoryResult<()>;
    }

    impl SettingsReader for Repository {
        fn get_profile(&self) -> RepositoryResult<Profile>;
    }

    impl SettingsWriter for Repository {
        fn update_profile(&self, updates: &UpdateProfile) -> RepositoryResult<Profile>;
        fn change_password(&self, change: &PasswordChange) -> RepositoryResult<Profile>;
    }

    impl ActivityReader for Repository {
        fn list_activity(&self) -> RepositoryResult<Vec<LogEntry>>;
    }
}
