//! Blocking HTTP client for the Bills Manager REST service.
//!
//! The service contract is plain JSON over HTTP with no pagination or retry
//! semantics: any non-2xx response or transport failure surfaces as a single
//! undifferentiated [`ApiError`].

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::domain::{Bill, BillId, NewBill};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("falha ao comunicar com o serviço de contas: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("o serviço de contas respondeu {status} para {method} {url}")]
    Status {
        method: &'static str,
        url: String,
        status: StatusCode,
    },
}

/// Client bound to a single service base URL.
pub struct BillsClient {
    http: Client,
    base_url: String,
}

impl BillsClient {
    /// Builds a client for `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// `GET /bills` — every bill known to the service.
    pub fn list_bills(&self) -> Result<Vec<Bill>, ApiError> {
        let url = self.url("/bills");
        debug!(%url, "listing bills");
        let response = self.http.get(&url).send()?;
        Ok(check_status("GET", url, response)?.json()?)
    }

    /// `GET /bills/{id}` — a single bill.
    pub fn get_bill(&self, id: &BillId) -> Result<Bill, ApiError> {
        let url = self.bill_url(id, "");
        debug!(%url, "fetching bill");
        let response = self.http.get(&url).send()?;
        Ok(check_status("GET", url, response)?.json()?)
    }

    /// `POST /bills` — creates a bill; the server replies with the persisted
    /// record, id included.
    pub fn create_bill(&self, bill: &NewBill) -> Result<Bill, ApiError> {
        let url = self.url("/bills");
        debug!(%url, name = %bill.bill_name, "creating bill");
        let response = self.http.post(&url).json(bill).send()?;
        Ok(check_status("POST", url, response)?.json()?)
    }

    /// `PUT /bills/{id}` — replaces a bill's fields. Success carries no body.
    pub fn update_bill(&self, id: &BillId, bill: &NewBill) -> Result<(), ApiError> {
        let url = self.bill_url(id, "");
        debug!(%url, "updating bill");
        let response = self.http.put(&url).json(bill).send()?;
        check_status("PUT", url, response)?;
        Ok(())
    }

    /// `PUT /bills/{id}/paid` — toggles the paid flag server-side. The
    /// request carries no body.
    pub fn toggle_paid(&self, id: &BillId) -> Result<(), ApiError> {
        let url = self.bill_url(id, "/paid");
        debug!(%url, "toggling paid status");
        let response = self.http.put(&url).send()?;
        check_status("PUT", url, response)?;
        Ok(())
    }

    /// `DELETE /bills/{id}` — removes the bill.
    pub fn delete_bill(&self, id: &BillId) -> Result<(), ApiError> {
        let url = self.bill_url(id, "");
        debug!(%url, "deleting bill");
        let response = self.http.delete(&url).send()?;
        check_status("DELETE", url, response)?;
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bill_url(&self, id: &BillId, suffix: &str) -> String {
        format!("{}/bills/{}{}", self.base_url, id, suffix)
    }
}

fn check_status(
    method: &'static str,
    url: String,
    response: Response,
) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            method,
            url,
            status,
        })
    }
}
