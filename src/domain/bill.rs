//! Domain models for billing records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned bill identifier, treated as opaque text by the client.
///
/// The reference backend serializes ids as JSON numbers, so deserialization
/// accepts both numbers and strings. Serialization always emits a string.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct BillId(pub String);

impl BillId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BillId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(value) => BillId(value),
            Raw::Number(value) => BillId(value.to_string()),
        })
    }
}

/// A single billing obligation tracked by the remote service.
///
/// The due date is a calendar date with no time-of-day semantics; all
/// comparisons happen at day granularity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BillId>,
    pub bill_name: String,
    pub amount: f64,
    pub category: String,
    pub receiver: String,
    pub due_date: NaiveDate,
    pub paid: bool,
}

/// Creation payload for a bill that has not been persisted yet. The server
/// assigns the id on `POST /bills`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBill {
    pub bill_name: String,
    pub amount: f64,
    pub category: String,
    pub receiver: String,
    pub due_date: NaiveDate,
    pub paid: bool,
}

impl NewBill {
    pub fn new(
        bill_name: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        receiver: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            bill_name: bill_name.into(),
            amount,
            category: category.into(),
            receiver: receiver.into(),
            due_date,
            paid: false,
        }
    }
}

