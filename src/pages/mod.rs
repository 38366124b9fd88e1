//! Page state for the admin screens: a filtered list, an optional modal form
//! and a dismissible notice.

use serde::Serialize;
use thiserror::Error;

use crate::domain::Record;
use crate::forms::{FieldErrors, FormController, FormError, FormModel, SubmitError};
use crate::listing::{Filterable, ListView};
use crate::repository::RecordStore;
use crate::repository::errors::RepositoryError;

pub mod clients;
pub mod inquiries;
pub mod settings;
pub mod users;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no form is open")]
    NoModal,

    #[error("{0} not found")]
    NotFound(String),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type PageResult<T> = Result<T, PageError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Banner shown above a page until dismissed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Turns a failed submission into the page error, raising a notice for
/// collaborator failures. Field errors stay on the form.
pub(crate) fn submit_failure(
    notice: &mut Option<Notice>,
    action: &str,
    err: SubmitError,
) -> PageError {
    if !matches!(err, SubmitError::Invalid(_) | SubmitError::InFlight) {
        log::error!("Failed to {action}: {err}");
        *notice = Some(Notice::error(format!("Could not {action}: {err}")));
    }
    PageError::Submit(err)
}

/// The add/edit modal of a [`RecordPage`].
#[derive(Debug)]
pub enum Modal<I, C, E> {
    Create(FormController<C>),
    Edit { id: I, form: FormController<E> },
}

impl<I, C: FormModel, E: FormModel> Modal<I, C, E> {
    pub fn errors(&self) -> &FieldErrors {
        match self {
            Modal::Create(form) => form.errors(),
            Modal::Edit { form, .. } => form.errors(),
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        match self {
            Modal::Create(form) => form.value(name),
            Modal::Edit { form, .. } => form.value(name),
        }
    }

    pub fn is_submitting(&self) -> bool {
        match self {
            Modal::Create(form) => form.is_submitting(),
            Modal::Edit { form, .. } => form.is_submitting(),
        }
    }
}

/// A table of records with create and edit modals backed by a [`RecordStore`].
pub struct RecordPage<T: Record, C, E> {
    noun: &'static str,
    list: ListView<T>,
    modal: Option<Modal<T::Id, C, E>>,
    notice: Option<Notice>,
}

impl<T, C, E> RecordPage<T, C, E>
where
    T: Filterable,
    C: FormModel,
    E: FormModel + for<'a> From<&'a T>,
{
    /// `noun` is the capitalized record name used in notices, e.g. `"User"`.
    pub fn new(noun: &'static str, records: Vec<T>, per_page: usize) -> Self {
        Self {
            noun,
            list: ListView::new(records, per_page),
            modal: None,
            notice: None,
        }
    }

    pub fn list(&self) -> &ListView<T> {
        &self.list
    }

    /// Search, filter and paging controls.
    pub fn list_mut(&mut self) -> &mut ListView<T> {
        &mut self.list
    }

    pub fn modal(&self) -> Option<&Modal<T::Id, C, E>> {
        self.modal.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn open_create(&mut self) {
        self.modal = Some(Modal::Create(FormController::default()));
    }

    /// Opens the edit modal prefilled from the record with `id`.
    pub fn open_edit(&mut self, id: T::Id) -> PageResult<()> {
        let record = self
            .list
            .get(id)
            .ok_or_else(|| PageError::NotFound(format!("{} #{id}", self.noun)))?;
        self.modal = Some(Modal::Edit {
            id,
            form: FormController::new(E::from(record)),
        });
        Ok(())
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> PageResult<()> {
        match self.modal.as_mut().ok_or(PageError::NoModal)? {
            Modal::Create(form) => form.set_field(name, value)?,
            Modal::Edit { form, .. } => form.set_field(name, value)?,
        }
        Ok(())
    }

    /// Submits the open modal. On success the returned record is merged into
    /// the list and the modal closes; otherwise the modal stays open.
    pub fn save<S>(&mut self, store: &S) -> PageResult<T::Id>
    where
        S: RecordStore<T, New = C::Output, Update = E::Output> + ?Sized,
    {
        let (result, created) = match self.modal.as_mut().ok_or(PageError::NoModal)? {
            Modal::Create(form) => (form.submit(|new| store.create(new)), true),
            Modal::Edit { id, form } => {
                let id = *id;
                (form.submit(|updates| store.update(id, updates)), false)
            }
        };

        let record = match result {
            Ok(record) => record,
            Err(err) => {
                let action = format!("save {}", self.noun.to_lowercase());
                return Err(submit_failure(&mut self.notice, &action, err));
            }
        };

        let id = record.id();
        self.list.upsert(record);
        self.modal = None;

        let verb = if created { "created" } else { "updated" };
        log::info!("{} #{id} {verb}", self.noun);
        self.notice = Some(Notice::success(format!("{} {verb}", self.noun)));

        Ok(id)
    }

    pub fn delete<S>(&mut self, id: T::Id, store: &S) -> PageResult<()>
    where
        S: RecordStore<T> + ?Sized,
    {
        if self.list.get(id).is_none() {
            return Err(PageError::NotFound(format!("{} #{id}", self.noun)));
        }

        if let Err(err) = store.delete(id) {
            log::error!("Failed to delete {} #{id}: {err}", self.noun);
            self.notice = Some(Notice::error(format!(
                "Could not delete {}: {err}",
                self.noun.to_lowercase()
            )));
            return Err(err.into());
        }

        self.list.remove(id);
        if matches!(self.modal, Some(Modal::Edit { id: open, .. }) if open == id) {
            self.modal = None;
        }

        log::info!("{} #{id} deleted", self.noun);
        self.notice = Some(Notice::success(format!("{} deleted", self.noun)));
        Ok(())
    }

    /// Discards the modal and any unsaved values.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
