//! Stateful driver for a single form: values, inline errors and submission.
//!
//! The submitting flag is shared with a [`Submission`] through a drop guard,
//! so it is cleared on every exit path of the persistence call.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;
use validator::Validate;

use crate::forms::{FieldErrors, FormError, FormModel};
use crate::repository::errors::{RepositoryError, RepositoryResult};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),

    #[error("a submission is already in progress")]
    InFlight,

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug)]
struct SubmitGuard {
    flag: Rc<Cell<bool>>,
}

impl SubmitGuard {
    fn acquire(flag: &Rc<Cell<bool>>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self { flag: Rc::clone(flag) })
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// A validated payload whose owner form reports itself as submitting until
/// this value is committed or dropped.
#[derive(Debug)]
pub struct Submission<T> {
    payload: T,
    _guard: SubmitGuard,
}

impl<T> Submission<T> {
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Runs the persistence side effect and releases the submitting flag.
    pub fn commit<R>(
        self,
        effect: impl FnOnce(&T) -> RepositoryResult<R>,
    ) -> Result<R, SubmitError> {
        effect(&self.payload).map_err(SubmitError::from)
    }
}

#[derive(Debug)]
pub struct FormController<F> {
    values: F,
    errors: FieldErrors,
    submitting: Rc<Cell<bool>>,
}

impl<F: FormModel> Default for FormController<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: FormModel> FormController<F> {
    pub fn new(values: F) -> Self {
        Self {
            values,
            errors: FieldErrors::default(),
            submitting: Rc::new(Cell::new(false)),
        }
    }

    pub fn values(&self) -> &F {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.field(name)
    }

    /// Field names paired with their current values, in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        F::FIELDS
            .iter()
            .filter_map(|name| self.values.field(name).map(|value| (*name, value)))
    }

    /// Errors from the last submit attempt, minus fields edited since.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Stores the value and clears any error previously reported for it.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.values.set_field(name, value.into())?;
        self.errors.remove(name);
        Ok(())
    }

    /// Evaluates every rule against the current values.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = match self.values.validate() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => FieldErrors::from_validation::<F>(&errors),
        };
        self.values.check_fields(&mut errors);
        errors
    }

    /// Validates and, when clean, marks the form as submitting.
    pub fn begin_submit(&mut self) -> Result<Submission<F::Output>, SubmitError> {
        if self.is_submitting() {
            log::warn!("Ignoring submit while a previous one is in flight");
            return Err(SubmitError::InFlight);
        }

        let errors = self.validate();
        if !errors.is_empty() {
            log::warn!("Form rejected with {} invalid field(s)", errors.len());
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }
        self.errors.clear();

        let payload = self.values.to_output()?;
        let guard = SubmitGuard::acquire(&self.submitting).ok_or(SubmitError::InFlight)?;

        Ok(Submission {
            payload,
            _guard: guard,
        })
    }

    /// Validates, then runs `effect` with the payload while the form is marked busy.
    pub fn submit<R>(
        &mut self,
        effect: impl FnOnce(&F::Output) -> RepositoryResult<R>,
    ) -> Result<R, SubmitError> {
        self.begin_submit()?.commit(effect)
    }
}
