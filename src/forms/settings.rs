//! Forms shown on the settings page.

use serde::Deserialize;
use validator::Validate;

use crate::domain::settings::{PasswordChange, Profile, UpdateProfile};
use crate::forms::rules::{EMAIL_SHAPE, required};
use crate::forms::{FieldErrors, FormError, FormModel};

#[derive(Clone, Debug, Default, Deserialize, Validate)]
/// Profile details of the signed-in administrator.
pub struct ProfileForm {
    #[validate(custom(function = "required"))]
    pub name: String,
    #[validate(
        custom(function = "required"),
        regex(path = *EMAIL_SHAPE, code = "email", message = "Enter a valid email address")
    )]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl From<&Profile> for ProfileForm {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone().unwrap_or_default(),
        }
    }
}

impl FormModel for ProfileForm {
    type Output = UpdateProfile;

    const FIELDS: &'static [&'static str] = &["name", "email", "phone"];

    fn label(field: &str) -> &'static str {
        match field {
            "name" => "Name",
            "email" => "Email",
            "phone" => "Phone",
            _ => "Field",
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError> {
        let slot = match name {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            _ => return Err(FormError::UnknownField(name.to_string())),
        };
        *slot = value;
        Ok(())
    }

    fn to_output(&self) -> Result<UpdateProfile, FormError> {
        Ok(UpdateProfile::new(&self.name, &self.email, &self.phone))
    }
}

#[derive(Clone, Default, Deserialize, Validate)]
/// Password change panel.
pub struct PasswordForm {
    #[validate(custom(function = "required"))]
    pub current_password: String,
    #[validate(
        custom(function = "required"),
        length(min = 8, message = "Password must be at least 8 characters")
    )]
    pub new_password: String,
    #[validate(
        custom(function = "required"),
        must_match(other = "new_password", message = "Passwords do not match")
    )]
    pub confirm_password: String,
}

impl std::fmt::Debug for PasswordForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordForm").finish_non_exhaustive()
    }
}

impl FormModel for PasswordForm {
    type Output = PasswordChange;

    const FIELDS: &'static [&'static str] = &["current_password", "new_password", "confirm_password"];

    fn label(field: &str) -> &'static str {
        match field {
            "current_password" => "Current password",
            "new_password" => "New password",
            "confirm_password" => "Confirm password",
            _ => "Field",
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "current_password" => Some(&self.current_password),
            "new_password" => Some(&self.new_password),
            "confirm_password" => Some(&self.confirm_password),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError> {
        let slot = match name {
            "current_password" => &mut self.current_password,
            "new_password" => &mut self.new_password,
            "confirm_password" => &mut self.confirm_password,
            _ => return Err(FormError::UnknownField(name.to_string())),
        };
        *slot = value;
        Ok(())
    }

    fn to_output(&self) -> Result<PasswordChange, FormError> {
        Ok(PasswordChange {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }

    fn check_fields(&self, errors: &mut FieldErrors) {
        if errors.contains("new_password") || self.current_password.is_empty() {
            return;
        }
        if self.new_password == self.current_password {
            errors.insert(
                "new_password",
                "New password must differ from the current password",
            );
        }
    }
}
