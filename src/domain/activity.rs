//! Activity log entries recorded for every write performed through the admin.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::Record;
use crate::domain::types::{ActivityKind, LogEntryId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub id: LogEntryId,
    pub action: ActivityKind,
    /// What was touched, e.g. `user #3`.
    pub subject: String,
    pub details: String,
    pub at: NaiveDateTime,
}

impl Record for LogEntry {
    type Id = LogEntryId;

    fn id(&self) -> LogEntryId {
        self.id
    }
}
