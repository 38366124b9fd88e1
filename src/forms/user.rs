use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::types::{UserRole, UserStatus};
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::forms::rules::{EMAIL_SHAPE, choice, required};
use crate::forms::{FormError, FormModel};

fn user_role(value: &str) -> Result<(), ValidationError> {
    choice::<UserRole>(value)
}

fn user_status(value: &str) -> Result<(), ValidationError> {
    choice::<UserStatus>(value)
}

fn parse_role(value: &str) -> Result<UserRole, FormError> {
    value.parse().map_err(|err| FormError::InvalidValue {
        field: "role",
        reason: format!("{err}"),
    })
}

fn parse_status(value: &str) -> Result<UserStatus, FormError> {
    value.parse().map_err(|err| FormError::InvalidValue {
        field: "status",
        reason: format!("{err}"),
    })
}

fn user_label(field: &str) -> &'static str {
    match field {
        "name" => "Name",
        "email" => "Email",
        "phone" => "Phone",
        "role" => "Role",
        "status" => "Status",
        "password" => "Password",
        "confirm_password" => "Confirm password",
        _ => "Field",
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for the "add user" modal.
pub struct UserForm {
    #[validate(custom(function = "required"))]
    pub name: String,
    #[validate(
        custom(function = "required"),
        regex(path = *EMAIL_SHAPE, code = "email", message = "Enter a valid email address")
    )]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[validate(custom(function = "user_role"))]
    pub role: String,
    #[validate(custom(function = "user_status"))]
    pub status: String,
    #[validate(
        custom(function = "required"),
        length(min = 8, message = "Password must be at least 8 characters")
    )]
    pub password: String,
    #[validate(
        custom(function = "required"),
        must_match(other = "password", message = "Passwords do not match")
    )]
    pub confirm_password: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: UserRole::Consultant.as_str().to_string(),
            status: UserStatus::Active.as_str().to_string(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl FormModel for UserForm {
    type Output = NewUser;

    const FIELDS: &'static [&'static str] = &[
        "name",
        "email",
        "phone",
        "role",
        "status",
        "password",
        "confirm_password",
    ];

    fn label(field: &str) -> &'static str {
        user_label(field)
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            "role" => Some(&self.role),
            "status" => Some(&self.status),
            "password" => Some(&self.password),
            "confirm_password" => Some(&self.confirm_password),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError> {
        let slot = match name {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "role" => &mut self.role,
            "status" => &mut self.status,
            "password" => &mut self.password,
            "confirm_password" => &mut self.confirm_password,
            _ => return Err(FormError::UnknownField(name.to_string())),
        };
        *slot = value;
        Ok(())
    }

    fn to_output(&self) -> Result<NewUser, FormError> {
        Ok(NewUser::new(
            &self.name,
            &self.email,
            &self.phone,
            parse_role(&self.role)?,
            parse_status(&self.status)?,
            self.password.clone(),
        ))
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for the "edit user" modal. Passwords are not editable here.
pub struct EditUserForm {
    #[validate(custom(function = "required"))]
    pub name: String,
    #[validate(
        custom(function = "required"),
        regex(path = *EMAIL_SHAPE, code = "email", message = "Enter a valid email address")
    )]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[validate(custom(function = "user_role"))]
    pub role: String,
    #[validate(custom(function = "user_status"))]
    pub status: String,
}

impl Default for EditUserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: UserRole::Consultant.as_str().to_string(),
            status: UserStatus::Active.as_str().to_string(),
        }
    }
}

impl From<&User> for EditUserForm {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            role: user.role.as_str().to_string(),
            status: user.status.as_str().to_string(),
        }
    }
}

impl FormModel for EditUserForm {
    type Output = UpdateUser;

    const FIELDS: &'static [&'static str] = &["name", "email", "phone", "role", "status"];

    fn label(field: &str) -> &'static str {
        user_label(field)
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "phone" => Some(&self.phone),
            "role" => Some(&self.role),
            "status" => Some(&self.status),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError> {
        let slot = match name {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "role" => &mut self.role,
            "status" => &mut self.status,
            _ => return Err(FormError::UnknownField(name.to_string())),
        };
        *slot = value;
        Ok(())
    }

    fn to_output(&self) -> Result<UpdateUser, FormError> {
        Ok(UpdateUser::new(
            &self.name,
            &self.email,
            &self.phone,
            parse_role(&self.role)?,
            parse_status(&self.status)?,
        ))
    }
}
