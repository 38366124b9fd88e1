//! Client management page.

use serde::Serialize;

use crate::domain::client::Client;
use crate::domain::types::VisaStatus;
use crate::forms::client::ClientForm;
use crate::pages::{PageResult, RecordPage};
use crate::repository::ClientReader;

pub type ClientsPage = RecordPage<Client, ClientForm, ClientForm>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ClientStats {
    pub total: usize,
    /// Clients whose visa has not been decided yet.
    pub in_progress: usize,
    pub approved: usize,
    pub applications: u32,
}

pub fn load_clients_page<R>(repo: &R, per_page: usize) -> PageResult<ClientsPage>
where
    R: ClientReader + ?Sized,
{
    let clients = repo.list_clients().map_err(|err| {
        log::error!("Failed to load clients: {err}");
        err
    })?;

    Ok(ClientsPage::new("Client", clients, per_page))
}

pub fn client_stats(page: &ClientsPage) -> ClientStats {
    let list = page.list();
    let in_progress = [VisaStatus::Pending, VisaStatus::InReview]
        .iter()
        .map(|status| list.count_where("visa_status", status.as_str()))
        .sum();

    ClientStats {
        total: list.records().len(),
        in_progress,
        approved: list.count_where("visa_status", VisaStatus::Approved.as_str()),
        applications: list.records().iter().map(|c| c.applications).sum(),
    }
}
