//! Presentation rules for bills: due-date urgency classification, currency
//! and date formatting, form validation, and dashboard aggregation.
//!
//! Everything in this module is a pure function over its inputs. The current
//! date is always injected (see [`clock::Clock`]) so the rules stay
//! deterministic under test.

pub mod clock;
pub mod format;
pub mod summary;
pub mod urgency;
pub mod validate;

pub use clock::{Clock, SystemClock};
pub use format::{format_currency, format_date, parse_due_date, LocaleConfig};
pub use summary::DashboardSummary;
pub use urgency::{classify, DueStatus, UrgencyBadge, DUE_SOON_WINDOW_DAYS};
pub use validate::{validate, BillForm, FormField};
