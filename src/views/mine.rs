//! "My …" collections for the signed-in employee.
//!
//! A 404 on these endpoints means the employee has none yet.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::classify;
use crate::model::{Asset, Audit, Borrowing, BorrowingStatus, ServiceRequest};
use crate::remote::{AmsClient, ApiError, ApiResult, ResponseBody};
use crate::session::SessionStore;

use super::ViewError;

/// Decodes a collection response, reading a 404 (or an empty body) as zero items.
pub fn empty_on_not_found<T: DeserializeOwned>(result: ApiResult) -> Result<Vec<T>, ApiError> {
    match result {
        Ok(response) if response.body == ResponseBody::Empty => Ok(Vec::new()),
        Ok(response) => response.json(),
        Err(err) if classify::is_not_found(&err) => {
            tracing::debug!("collection not found; treating as empty");
            Ok(Vec::new())
        }
        Err(err) => Err(err),
    }
}

pub fn my_borrowings(client: &AmsClient, session: &SessionStore) -> Result<Vec<Borrowing>, ViewError> {
    let employee_id = session.employee_id()?;
    Ok(empty_on_not_found(client.get_borrowings_by_employee(employee_id))?)
}

/// Borrowings whose asset is currently with the employee.
pub fn my_assets(client: &AmsClient, session: &SessionStore) -> Result<Vec<Borrowing>, ViewError> {
    let mut borrowings = my_borrowings(client, session)?;
    borrowings.retain(Borrowing::is_held);
    Ok(borrowings)
}

pub fn my_assigned_assets(client: &AmsClient, session: &SessionStore) -> Result<Vec<Asset>, ViewError> {
    let employee_id = session.employee_id()?;
    Ok(empty_on_not_found(client.get_assets_by_employee(employee_id))?)
}

pub fn my_service_requests(
    client: &AmsClient,
    session: &SessionStore,
) -> Result<Vec<ServiceRequest>, ViewError> {
    let employee_id = session.employee_id()?;
    Ok(empty_on_not_found(
        client.get_service_requests_by_employee(employee_id),
    )?)
}

pub fn my_audits(client: &AmsClient, session: &SessionStore) -> Result<Vec<Audit>, ViewError> {
    let employee_id = session.employee_id()?;
    Ok(empty_on_not_found(client.get_audits_by_employee(employee_id))?)
}

/// `None` keeps everything.
pub fn filter_by_status(borrowings: &[Borrowing], status: Option<BorrowingStatus>) -> Vec<Borrowing> {
    borrowings
        .iter()
        .filter(|b| status.is_none() || b.status() == status)
        .cloned()
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub all: usize,
    by_status: HashMap<BorrowingStatus, usize>,
}

impl StatusCounts {
    pub fn tally(borrowings: &[Borrowing]) -> Self {
        let mut counts = StatusCounts {
            all: borrowings.len(),
            by_status: HashMap::new(),
        };
        for status in borrowings.iter().filter_map(Borrowing::status) {
            *counts.by_status.entry(status).or_default() += 1;
        }
        counts
    }

    pub fn get(&self, status: BorrowingStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "../tests/views/mine_tests.rs"]
mod tests;
