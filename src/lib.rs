use std::time::Duration;

use serde::Serialize;

use crate::fixtures::Fixtures;
use crate::listing::ListSummary;
use crate::models::config::AdminConfig;
use crate::pages::PageResult;
use crate::pages::clients::{ClientStats, client_stats, load_clients_page};
use crate::pages::inquiries::load_inquiries_page;
use crate::pages::settings::load_settings_page;
use crate::pages::users::{UserStats, load_users_page, user_stats};
use crate::repository::{
    ActivityReader, ClientReader, InMemoryRepository, InquiryReader, SettingsReader, UserReader,
};

pub mod domain;
pub mod error_conversions;
pub mod fixtures;
pub mod forms;
pub mod listing;
pub mod models;
pub mod pages;
pub mod pagination;
pub mod repository;

/// Landing overview built from every admin page.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub admin: String,
    pub users: UserStats,
    pub clients: ClientStats,
    pub unanswered_inquiries: usize,
    pub user_list: ListSummary,
    pub client_list: ListSummary,
    pub inquiry_list: ListSummary,
    pub activity_list: ListSummary,
}

/// Loads every page from `repo` and collects their summary figures.
pub fn build_dashboard<R>(repo: &R, config: &AdminConfig) -> PageResult<Dashboard>
where
    R: UserReader + ClientReader + InquiryReader + SettingsReader + ActivityReader + ?Sized,
{
    let users = load_users_page(repo, config.users_per_page)?;
    let clients = load_clients_page(repo, config.clients_per_page)?;
    let inquiries = load_inquiries_page(repo, config.inquiries_per_page)?;
    let settings = load_settings_page(repo, config.activity_per_page)?;

    Ok(Dashboard {
        admin: settings.profile().name.clone(),
        users: user_stats(&users),
        clients: client_stats(&clients),
        unanswered_inquiries: inquiries.unanswered(),
        user_list: users.list().summary(),
        client_list: clients.list().summary(),
        inquiry_list: inquiries.list().summary(),
        activity_list: settings.activity().summary(),
    })
}

/// Seeds the in-memory store from the fixtures directory and prints the dashboard.
pub fn run(config: AdminConfig) -> std::io::Result<()> {
    let fixtures = Fixtures::load(&config.fixtures_dir)
        .map_err(|e| std::io::Error::other(format!("Failed to load fixtures: {e}")))?;

    let repo = InMemoryRepository::from_fixtures(fixtures)
        .with_latency(Duration::from_millis(config.submit_delay_ms));

    let dashboard = build_dashboard(&repo, &config)
        .map_err(|e| std::io::Error::other(format!("Failed to build dashboard: {e}")))?;

    log::info!(
        "Dashboard ready: {} users, {} clients, {} unanswered inquiries (write latency {:?})",
        dashboard.users.total,
        dashboard.clients.total,
        dashboard.unanswered_inquiries,
        repo.latency()
    );

    let rendered = serde_json::to_string_pretty(&dashboard)
        .map_err(|e| std::io::Error::other(format!("Failed to render dashboard: {e}")))?;
    println!("{rendered}");

    Ok(())
}
