//! Client-side filtering and pagination over an owned record collection.
//!
//! A [`ListView`] keeps the current page inside `[1, page_count]` after every
//! mutation, so shrinking the visible set never leaves an empty page behind.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::Record;
use crate::domain::activity::LogEntry;
use crate::domain::client::Client;
use crate::domain::inquiry::Inquiry;
use crate::domain::user::User;
use crate::pagination::Paginated;

/// Records that can be searched and filtered by a [`ListView`].
pub trait Filterable: Record {
    /// Values matched against the free-text query.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a categorical field such as `role` or `status`.
    fn category(&self, key: &str) -> Option<&str>;
}

/// Value of a categorical filter. `All` disables the constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub enum FilterValue {
    #[default]
    All,
    Only(String),
}

impl FilterValue {
    /// Sentinel used by select inputs for "no constraint".
    pub const ALL: &'static str = "all";

    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Only(expected) => value == Some(expected.as_str()),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        match value.trim() {
            "" | FilterValue::ALL => FilterValue::All,
            other => FilterValue::Only(other.to_string()),
        }
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

/// Active search and categorical filters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub query: String,
    pub categories: BTreeMap<String, FilterValue>,
}

impl FilterState {
    /// The query is matched as typed, ignoring case only.
    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        let query = self.query.to_lowercase();
        if !query.is_empty()
            && !record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        {
            return false;
        }

        self.categories
            .iter()
            .all(|(key, value)| value.matches(record.category(key)))
    }
}

/// Counts shown next to a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ListSummary {
    pub total: usize,
    pub visible: usize,
    pub page: usize,
    pub page_count: usize,
}

#[derive(Clone, Debug)]
pub struct ListView<T> {
    records: Vec<T>,
    filter: FilterState,
    page: usize,
    per_page: usize,
}

impl<T: Filterable> ListView<T> {
    /// Creates a view over `records`. A zero page size is treated as one.
    pub fn new(records: Vec<T>, per_page: usize) -> Self {
        Self {
            records,
            filter: FilterState::default(),
            page: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.clamp_page();
    }

    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.filter.categories.insert(key.into(), value.into());
        self.clamp_page();
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.clamp_page();
    }

    /// Records matching the filters, in source order.
    pub fn visible_records(&self) -> Vec<&T> {
        self.records
            .iter()
            .filter(|record| self.filter.matches(*record))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| self.filter.matches(*record))
            .count()
    }

    /// Number of pages, never less than one.
    pub fn page_count(&self) -> usize {
        self.visible_count().div_ceil(self.per_page).max(1)
    }

    pub fn current_page(&self) -> Vec<&T> {
        let start = (self.page - 1) * self.per_page;
        self.visible_records()
            .into_iter()
            .skip(start)
            .take(self.per_page)
            .collect()
    }

    /// Moves to page `page`, clamped into `[1, page_count]`. Returns the page shown.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = page.clamp(1, self.page_count());
        self.page
    }

    /// Replaces the record with the same id, or appends it. Returns `true` on insert.
    pub fn upsert(&mut self, record: T) -> bool {
        let inserted = match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => {
                *existing = record;
                false
            }
            None => {
                self.records.push(record);
                true
            }
        };
        self.clamp_page();
        inserted
    }

    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let position = self.records.iter().position(|record| record.id() == id)?;
        let removed = self.records.remove(position);
        self.clamp_page();
        Some(removed)
    }

    /// Swaps in a freshly loaded collection, keeping filters.
    pub fn replace_all(&mut self, records: Vec<T>) {
        self.records = records;
        self.clamp_page();
    }

    /// Number of records, ignoring filters, whose `key` equals `value`.
    pub fn count_where(&self, key: &str, value: &str) -> usize {
        self.records
            .iter()
            .filter(|record| record.category(key) == Some(value))
            .count()
    }

    pub fn summary(&self) -> ListSummary {
        ListSummary {
            total: self.records.len(),
            visible: self.visible_count(),
            page: self.page,
            page_count: self.page_count(),
        }
    }

    pub fn paginated(&self) -> Paginated<&T> {
        Paginated::new(
            self.current_page(),
            self.page,
            self.page_count(),
            self.visible_count(),
        )
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.page_count());
    }
}

impl Filterable for User {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        fields.extend(self.phone.as_deref());
        fields
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "role" => Some(self.role.as_str()),
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}

impl Filterable for Client {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        fields.extend(self.profession.as_deref());
        fields.extend(self.country.as_deref());
        fields
    }

    fn category(&self, key: &str) -> Option<&str> {
        match key {
            "type" => Some(self.kind.as_str()),
            "visa_status" => Some(self.visa_status.as_str()),
            "country" => self.country.as_deref(),
            _ => None,
        }
    }
}

impl Filterable for Inquiry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.subject.as_str()]
    }

    fn category(&self, key: &str) -> Option<&str> {
        (key == "status").then(|| self.status.as_str())
    }
}

impl Filterable for LogEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.subject.as_str(), self.details.as_str()]
    }

    fn category(&self, key: &str) -> Option<&str> {
        (key == "action").then(|| self.action.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        status: &'static str,
    }

    impl Record for Row {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    impl Filterable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }

        fn category(&self, key: &str) -> Option<&str> {
            (key == "status").then_some(self.status)
        }
    }

    fn rows(count: u32) -> Vec<Row> {
        (1..=count)
            .map(|id| Row {
                id,
                name: if id == 3 { "Sarah Johnson" } else { "Someone" },
                status: if id % 2 == 0 { "inactive" } else { "active" },
            })
            .collect()
    }

    fn ids(records: Vec<&Row>) -> Vec<u32> {
        records.into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn six_records_split_into_two_pages() {
        let mut view = ListView::new(rows(6), 5);

        assert_eq!(view.page_count(), 2);
        assert_eq!(ids(view.current_page()), vec![1, 2, 3, 4, 5]);
        assert_eq!(view.set_page(2), 2);
        assert_eq!(ids(view.current_page()), vec![6]);
        assert_eq!(view.set_page(3), 2);
        assert_eq!(view.set_page(0), 1);
    }

    #[test]
    fn query_is_case_insensitive() {
        let mut view = ListView::new(rows(6), 5);

        view.set_query("sarah");
        assert_eq!(ids(view.visible_records()), vec![3]);

        view.set_query("SARAH");
        assert_eq!(ids(view.visible_records()), vec![3]);
    }

    #[test]
    fn query_keeps_surrounding_spaces() {
        let mut view = ListView::new(rows(6), 5);

        view.set_query("sarah ");
        assert_eq!(ids(view.visible_records()), vec![3]);

        view.set_query(" sarah");
        assert!(view.visible_records().is_empty());

        view.set_query("  ");
        assert!(view.visible_records().is_empty());

        view.set_query("");
        assert_eq!(view.visible_count(), 6);
    }

    #[test]
    fn categorical_filters_combine_with_query() {
        let mut view = ListView::new(rows(6), 5);

        view.set_filter("status", "inactive");
        assert_eq!(ids(view.visible_records()), vec![2, 4, 6]);

        view.set_query("someone");
        view.set_filter("status", "active");
        assert_eq!(ids(view.visible_records()), vec![1, 5]);

        view.set_filter("status", "all");
        assert_eq!(ids(view.visible_records()), vec![1, 2, 4, 5, 6]);
    }

    #[test]
    fn unknown_category_never_matches_a_constraint() {
        let mut view = ListView::new(rows(3), 5);
        view.set_filter("role", "admin");

        assert!(view.visible_records().is_empty());
        assert_eq!(view.page_count(), 1);
        assert!(view.current_page().is_empty());
    }

    #[test]
    fn removing_last_record_on_last_page_clamps_back() {
        let mut view = ListView::new(rows(6), 5);
        view.set_page(2);

        let removed = view.remove(6).expect("record exists");

        assert_eq!(removed.id, 6);
        assert_eq!(view.page_count(), 1);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn narrowing_filter_clamps_page() {
        let mut view = ListView::new(rows(12), 5);
        view.set_page(3);

        view.set_filter("status", "active");

        assert_eq!(view.page_count(), 2);
        assert_eq!(view.page(), 2);
        assert_eq!(ids(view.current_page()), vec![11]);
    }

    #[test]
    fn upsert_replaces_by_id_or_appends() {
        let mut view = ListView::new(rows(2), 5);

        let replaced = view.upsert(Row {
            id: 2,
            name: "Renamed",
            status: "active",
        });
        let inserted = view.upsert(Row {
            id: 9,
            name: "New",
            status: "active",
        });

        assert!(!replaced);
        assert!(inserted);
        assert_eq!(view.records()[1].name, "Renamed");
        assert_eq!(ids(view.visible_records()), vec![1, 2, 9]);
    }

    #[test]
    fn summary_and_counts_ignore_pagination() {
        let mut view = ListView::new(rows(6), 5);
        view.set_query("sarah");

        assert_eq!(
            view.summary(),
            ListSummary {
                total: 6,
                visible: 1,
                page: 1,
                page_count: 1
            }
        );
        assert_eq!(view.count_where("status", "active"), 3);
    }

    #[test]
    fn paginated_carries_links() {
        let mut view = ListView::new(rows(6), 5);
        view.set_page(2);

        let page = view.paginated();

        assert_eq!(page.page, 2);
        assert_eq!(page.total, 6);
        assert_eq!(page.pages, vec![Some(1), Some(2)]);
        assert_eq!(page.items.len(), 1);
    }
}
