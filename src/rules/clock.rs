use chrono::{Local, NaiveDate};

/// Clock abstracts access to the current calendar date so urgency
/// classification and summaries remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns today's date in the local timezone, at day granularity.
    fn today(&self) -> NaiveDate;
}

/// Real clock backed by the system's local time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
