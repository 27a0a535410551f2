use crate::remote::{AmsClient, ApiResult};
use crate::session::{SessionError, SessionStore};

use super::join::{Fetch, join_or_default};

fn count<'a>(fetch: impl FnOnce() -> ApiResult + Send + 'a) -> Fetch<'a, usize> {
    Box::new(move || fetch().map(|r| r.len()))
}

/// Collection sizes shown on the admin landing page.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct AdminDashboard {
    pub total_employees: usize,
    pub total_assets: usize,
    pub total_categories: usize,
    pub active_borrowings: usize,
    pub pending_service_requests: usize,
    pub total_audits: usize,
}

impl AdminDashboard {
    pub fn load(client: &AmsClient) -> Self {
        let counts = join_or_default(vec![
            ("employees", count(|| client.get_all_employees())),
            ("assets", count(|| client.get_all_assets())),
            ("categories", count(|| client.get_all_asset_categories())),
            ("active borrowings", count(|| client.get_active_borrowings())),
            (
                "pending service requests",
                count(|| client.get_service_requests_by_status("PENDING")),
            ),
            ("audits", count(|| client.get_all_audits())),
        ]);
        let [
            total_employees,
            total_assets,
            total_categories,
            active_borrowings,
            pending_service_requests,
            total_audits,
        ] = <[usize; 6]>::try_from(counts).unwrap_or_default();
        Self {
            total_employees,
            total_assets,
            total_categories,
            active_borrowings,
            pending_service_requests,
            total_audits,
        }
    }
}

/// Collection sizes shown on the employee landing page.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct EmployeeDashboard {
    pub employee_id: i64,
    pub assigned_assets: usize,
    pub service_requests: usize,
    pub audits: usize,
}

impl EmployeeDashboard {
    pub fn load(client: &AmsClient, session: &SessionStore) -> Result<Self, SessionError> {
        let employee_id = session.employee_id()?;
        let counts = join_or_default(vec![
            (
                "assigned assets",
                count(move || client.get_assets_by_employee(employee_id)),
            ),
            (
                "service requests",
                count(move || client.get_service_requests_by_employee(employee_id)),
            ),
            ("audits", count(move || client.get_audits_by_employee(employee_id))),
        ]);
        let [assigned_assets, service_requests, audits] =
            <[usize; 3]>::try_from(counts).unwrap_or_default();
        Ok(Self {
            employee_id,
            assigned_assets,
            service_requests,
            audits,
        })
    }
}

#[cfg(test)]
#[path = "../tests/views/dashboard_tests.rs"]
mod tests;
