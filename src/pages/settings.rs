//! Settings page: profile details, password change and the activity log.

use crate::domain::activity::LogEntry;
use crate::domain::settings::Profile;
use crate::forms::FormController;
use crate::forms::settings::{PasswordForm, ProfileForm};
use crate::listing::ListView;
use crate::pages::{Notice, PageResult, submit_failure};
use crate::repository::{ActivityReader, SettingsReader, SettingsWriter};

pub struct SettingsPage {
    profile: Profile,
    profile_form: FormController<ProfileForm>,
    password_form: FormController<PasswordForm>,
    activity: ListView<LogEntry>,
    notice: Option<Notice>,
}

pub fn load_settings_page<R>(repo: &R, activity_per_page: usize) -> PageResult<SettingsPage>
where
    R: SettingsReader + ActivityReader + ?Sized,
{
    let profile = repo.get_profile().map_err(|err| {
        log::error!("Failed to load profile: {err}");
        err
    })?;
    let activity = repo.list_activity().map_err(|err| {
        log::error!("Failed to load activity log: {err}");
        err
    })?;

    Ok(SettingsPage::new(profile, activity, activity_per_page))
}

impl SettingsPage {
    pub fn new(profile: Profile, activity: Vec<LogEntry>, activity_per_page: usize) -> Self {
        Self {
            profile_form: FormController::new(ProfileForm::from(&profile)),
            profile,
            password_form: FormController::default(),
            activity: ListView::new(activity, activity_per_page),
            notice: None,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn profile_form(&self) -> &FormController<ProfileForm> {
        &self.profile_form
    }

    pub fn password_form(&self) -> &FormController<PasswordForm> {
        &self.password_form
    }

    pub fn activity(&self) -> &ListView<LogEntry> {
        &self.activity
    }

    pub fn activity_mut(&mut self) -> &mut ListView<LogEntry> {
        &mut self.activity
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_profile_field(&mut self, name: &str, value: impl Into<String>) -> PageResult<()> {
        self.profile_form.set_field(name, value)?;
        Ok(())
    }

    pub fn set_password_field(&mut self, name: &str, value: impl Into<String>) -> PageResult<()> {
        self.password_form.set_field(name, value)?;
        Ok(())
    }

    pub fn save_profile<S>(&mut self, store: &S) -> PageResult<()>
    where
        S: SettingsWriter + ?Sized,
    {
        let profile = self
            .profile_form
            .submit(|updates| store.update_profile(updates))
            .map_err(|err| submit_failure(&mut self.notice, "update profile", err))?;

        log::info!("Profile updated");
        self.profile_form = FormController::new(ProfileForm::from(&profile));
        self.profile = profile;
        self.notice = Some(Notice::success("Profile updated"));
        Ok(())
    }

    /// Submits the password form and clears it on success.
    pub fn change_password<S>(&mut self, store: &S) -> PageResult<()>
    where
        S: SettingsWriter + ?Sized,
    {
        let profile = self
            .password_form
            .submit(|change| store.change_password(change))
            .map_err(|err| submit_failure(&mut self.notice, "change password", err))?;

        log::info!("Password changed");
        self.password_form = FormController::default();
        self.profile = profile;
        self.notice = Some(Notice::success("Password changed"));
        Ok(())
    }

    /// Reloads the activity log, keeping the current filters and page.
    pub fn refresh_activity<R>(&mut self, repo: &R) -> PageResult<()>
    where
        R: ActivityReader + ?Sized,
    {
        let entries = repo.list_activity().map_err(|err| {
            log::error!("Failed to load activity log: {err}");
            err
        })?;
        self.activity.replace_all(entries);
        Ok(())
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
