//! Due-date urgency classification.

use chrono::NaiveDate;
use colored::Color;

/// Unpaid bills due within this many days (inclusive) are flagged as
/// "Vence em breve".
pub const DUE_SOON_WINDOW_DAYS: i64 = 3;

/// Derived urgency of a bill relative to the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// Settled; never urgent regardless of date.
    Paid,
    /// Due date strictly in the past.
    Overdue,
    /// Due today or within [`DUE_SOON_WINDOW_DAYS`] days.
    DueSoon,
    /// Due more than [`DUE_SOON_WINDOW_DAYS`] days out.
    Normal,
}

impl DueStatus {
    /// Display color used by cards and tables.
    pub fn color(self) -> Color {
        match self {
            DueStatus::Paid => Color::Green,
            DueStatus::Overdue => Color::Red,
            DueStatus::DueSoon => Color::Yellow,
            DueStatus::Normal => Color::BrightBlack,
        }
    }
}

/// Status plus its user-facing label. The label is empty for
/// [`DueStatus::Normal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrgencyBadge {
    pub status: DueStatus,
    pub label: &'static str,
}

/// Classifies a bill's urgency from its due date and paid flag.
///
/// Both dates are calendar dates, so the day difference is exact; a due date
/// in the past yields a negative difference. `today` is injected rather than
/// read from the system clock.
pub fn classify(due_date: NaiveDate, paid: bool, today: NaiveDate) -> UrgencyBadge {
    if paid {
        return UrgencyBadge {
            status: DueStatus::Paid,
            label: "Paga",
        };
    }

    let diff_days = (due_date - today).num_days();
    if diff_days < 0 {
        UrgencyBadge {
            status: DueStatus::Overdue,
            label: "Vencida",
        }
    } else if diff_days <= DUE_SOON_WINDOW_DAYS {
        UrgencyBadge {
            status: DueStatus::DueSoon,
            label: "Vence em breve",
        }
    } else {
        UrgencyBadge {
            status: DueStatus::Normal,
            label: "",
        }
    }
}
