//! User management page.

use serde::Serialize;

use crate::domain::types::{UserRole, UserStatus};
use crate::domain::user::User;
use crate::forms::user::{EditUserForm, UserForm};
use crate::pages::{PageResult, RecordPage};
use crate::repository::UserReader;

pub type UsersPage = RecordPage<User, UserForm, EditUserForm>;

/// Figures shown on the summary cards above the users table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub admins: usize,
}

/// Loads every user into a fresh page.
pub fn load_users_page<R>(repo: &R, per_page: usize) -> PageResult<UsersPage>
where
    R: UserReader + ?Sized,
{
    let users = repo.list_users().map_err(|err| {
        log::error!("Failed to load users: {err}");
        err
    })?;

    Ok(UsersPage::new("User", users, per_page))
}

pub fn user_stats(page: &UsersPage) -> UserStats {
    let list = page.list();
    UserStats {
        total: list.records().len(),
        active: list.count_where("status", UserStatus::Active.as_str()),
        admins: list.count_where("role", UserRole::Admin.as_str()),
    }
}


#[cfg(all(test, feature = "test-mocks"))]
mod mock_tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::types::UserId;
    use crate::pages::NoticeLevel;
    use crate::repository::mock::MockRepository;

    fn stored(id: i32, name: &str, email: &str) -> User {
        User {
            id: UserId::new(id).unwrap(),
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            role: UserRole::Consultant,
            status: UserStatus::Active,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn create_appends_returned_user_and_closes_modal() {
        let mut repo = MockRepository::new();
        repo.expect_create_user()
            .withf(|new_user| new_user.email == "lena@example.com" && new_user.password == "longenough1")
            .times(1)
            .returning(|new_user| Ok(stored(7, &new_user.name, &new_user.email)));
        let mut page = UsersPage::new("User", vec![stored(1, "Sarah Johnson", "sarah@example.com")], 5);
        page.open_create();
        page.set_field("name", "Lena Park").unwrap();
        page.set_field("email", "Lena@Example.com").unwrap();
        page.set_field("password", "longenough1").unwrap();
        page.set_field("confirm_password", "longenough1").unwrap();

        let id = page.save(&repo).expect("should create user");

        assert_eq!(id.get(), 7);
        assert!(page.modal().is_none());
        assert_eq!(page.list().records().len(), 2);
        assert_eq!(page.notice().map(|n| n.level), Some(NoticeLevel::Success));
    }

    #[test]
    fn invalid_form_never_reaches_the_repository() {
        let mut repo = MockRepository::new();
        repo.expect_create_user().times(0);
        let mut page = UsersPage::new("User", Vec::new(), 5);
        page.open_create();
        page.set_field("name", "   ").unwrap();

        assert!(page.save(&repo).is_err());
    }

    #[test]
    fn edit_replaces_the_row_in_place() {
        let mut repo = MockRepository::new();
        repo.expect_update_user()
            .withf(|id, updates| id.get() == 2 && updates.name == "Tom B.")
            .times(1)
            .returning(|id, updates| {
                let mut user = stored(id.get(), &updates.name, &updates.email);
                user.role = updates.role;
                Ok(user)
            });
        let mut page = UsersPage::new(
            "User",
            vec![
                stored(1, "Sarah Johnson", "sarah@example.com"),
                stored(2, "Tom Baker", "tom@example.com"),
            ],
            5,
        );
        page.open_edit(UserId::new(2).unwrap()).unwrap();
        page.set_field("name", "Tom B.").unwrap();
        page.set_field("role", "manager").unwrap();

        page.save(&repo).expect("should update user");

        let records = page.list().records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Tom B.");
        assert_eq!(records[1].role, UserRole::Manager);
    }

    #[test]
    fn deleting_last_row_on_last_page_clamps_page() {
        let mut repo = MockRepository::new();
        repo.expect_delete_user()
            .withf(|id| id.get() == 6)
            .times(1)
            .returning(|_| Ok(()));
        let users = (1..=6)
            .map(|id| stored(id, &format!("User {id}"), &format!("user{id}@example.com")))
            .collect();
        let mut page = UsersPage::new("User", users, 5);
        page.list_mut().set_page(2);

        page.delete(UserId::new(6).unwrap(), &repo).expect("should delete user");

        assert_eq!(page.list().page_count(), 1);
        assert_eq!(page.list().page(), 1);
    }

    #[test]
    fn load_reads_every_user() {
        let mut repo = MockRepository::new();
        repo.expect_list_users().times(1).returning(|| {
            Ok(vec![
                stored(1, "Sarah Johnson", "sarah@example.com"),
                stored(2, "Tom Baker", "tom@example.com"),
            ])
        });

        let page = load_users_page(&repo, 5).expect("should load users");

        assert_eq!(page.list().summary().total, 2);
    }
}
