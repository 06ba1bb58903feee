//! Dashboard summary figures, computed from the four main collections.

use chrono::{Local, NaiveDate};
use tokio::runtime::Handle;

use crate::console::api::{ApiClient, ApiError};
use crate::console::entities::{Developers, Invoices, Leads, Projects};
use crate::console::screen::Entity;
use crate::console::task::TaskQueue;
use crate::shared::records::{
    parse_date, Developer, Invoice, Lead, LeadStatus, PaymentStatus, Project,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_developers: usize,
    pub total_projects: usize,
    pub total_leads: usize,
    pub total_invoices: usize,
    /// Leads still in the `new` stage
    pub pending_leads: usize,
    pub overdue_invoices: usize,
    /// Sum of every invoice's total, whatever its status
    pub total_revenue: f64,
}

impl DashboardStats {
    pub fn compute(
        developers: &[Developer],
        projects: &[Project],
        leads: &[Lead],
        invoices: &[Invoice],
        today: NaiveDate,
    ) -> Self {
        let new = LeadStatus::New.as_str();
        Self {
            total_developers: developers.len(),
            total_projects: projects.len(),
            total_leads: leads.len(),
            total_invoices: invoices.len(),
            pending_leads: leads.iter().filter(|l| l.lead_status == new).count(),
            overdue_invoices: invoices.iter().filter(|i| is_overdue(i, today)).count(),
            total_revenue: invoices.iter().map(|i| i.total_amount).sum(),
        }
    }
}

/// Marked overdue, or still pending past its due date. A pending invoice
/// without a readable due date is not overdue.
pub fn is_overdue(invoice: &Invoice, today: NaiveDate) -> bool {
    match PaymentStatus::parse(&invoice.payment_status) {
        Some(PaymentStatus::Overdue) => true,
        Some(PaymentStatus::Pending) => parse_date(&invoice.due_date).is_some_and(|due| due < today),
        _ => false,
    }
}

/// Fetch all four collections at once; the first failure wins
pub async fn fetch_stats(client: &ApiClient, today: NaiveDate) -> Result<DashboardStats, ApiError> {
    let (developers, projects, leads, invoices) = tokio::try_join!(
        client.get::<Vec<Developer>>(Developers::COLLECTION),
        client.get::<Vec<Project>>(Projects::COLLECTION),
        client.get::<Vec<Lead>>(Leads::COLLECTION),
        client.get::<Vec<Invoice>>(Invoices::COLLECTION),
    )?;
    Ok(DashboardStats::compute(
        &developers,
        &projects,
        &leads,
        &invoices,
        today,
    ))
}

pub struct Dashboard {
    stats: Option<DashboardStats>,
    loading: bool,
    generation: u64,
    client: ApiClient,
    queue: TaskQueue<(u64, Result<DashboardStats, ApiError>)>,
}

impl Dashboard {
    pub fn new(client: ApiClient, runtime: Handle) -> Self {
        Self {
            stats: None,
            loading: false,
            generation: 0,
            client,
            queue: TaskQueue::new(runtime),
        }
    }

    /// Last successfully computed figures
    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn refresh(&mut self) {
        self.generation += 1;
        self.loading = true;
        let generation = self.generation;
        let client = self.client.clone();
        let today = Local::now().date_naive();
        self.queue
            .spawn(async move { (generation, fetch_stats(&client, today).await) });
    }

    pub fn poll(&mut self) {
        for (generation, result) in self.queue.drain() {
            self.apply(generation, result);
        }
    }

    fn apply(&mut self, generation: u64, result: Result<DashboardStats, ApiError>) {
        if generation != self.generation {
            tracing::debug!("Discarding stale dashboard stats ({})", generation);
            return;
        }
        self.loading = false;
        match result {
            Ok(stats) => self.stats = Some(stats),
            Err(e) => tracing::error!("Failed to load dashboard: {}", e),
        }
    }
}
