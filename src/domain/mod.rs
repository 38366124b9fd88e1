//! Domain records managed by the admin pages.

use std::fmt::{Debug, Display};
use std::hash::Hash;

pub mod activity;
pub mod client;
pub mod inquiry;
pub mod settings;
pub mod types;
pub mod user;

/// A uniquely identified item that is only ever replaced as a whole.
pub trait Record: Clone {
    type Id: Copy + Eq + Hash + Debug + Display;

    fn id(&self) -> Self::Id;
}
