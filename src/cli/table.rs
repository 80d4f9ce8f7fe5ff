//! Plain-text table rendering for the dashboard.

use chrono::NaiveDate;
use colored::Colorize;

use crate::domain::{category_color, Bill};
use crate::rules::{classify, format_currency, format_date, DashboardSummary, LocaleConfig};

/// Describes how a column aligns its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug)]
pub struct Column {
    pub header: &'static str,
    pub alignment: Alignment,
}

impl Column {
    pub const fn left(header: &'static str) -> Self {
        Self {
            header,
            alignment: Alignment::Left,
        }
    }

    pub const fn right(header: &'static str) -> Self {
        Self {
            header,
            alignment: Alignment::Right,
        }
    }
}

/// A table with column metadata and rows of (possibly ANSI-styled) cells.
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Computes per-column widths from headers and cell contents, ignoring
    /// ANSI escape sequences.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(column.header);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                width
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .map(|column| column.header.to_string())
            .collect();
        out.push_str(&self.render_row(&header, &widths));
        out.push('\n');
        out.push_str(&rule(&widths));

        for row in &self.rows {
            out.push('\n');
            out.push_str(&self.render_row(row, &widths));
        }

        out
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell = row.get(idx).map(String::as_str).unwrap_or("");
                pad(cell, widths[idx], column.alignment)
            })
            .collect();
        cells.join("  ").trim_end().to_string()
    }
}

fn rule(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("--")
}

fn pad(cell: &str, width: usize, alignment: Alignment) -> String {
    let visible = visible_width(cell);
    let fill = width.saturating_sub(visible);
    match alignment {
        Alignment::Left => format!("{}{}", cell, " ".repeat(fill)),
        Alignment::Right => format!("{}{}", " ".repeat(fill), cell),
    }
}

/// Character count of `text` with ANSI CSI sequences stripped.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            if chars.peek() == Some(&'[') {
                chars.next();
                // Consume parameters up to the final byte of the sequence.
                for follow in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&follow) {
                        break;
                    }
                }
            }
            continue;
        }
        width += 1;
    }
    width
}

/// Builds the dashboard table: one row per bill with urgency badge and
/// category coloring.
pub fn bills_table(bills: &[Bill], locale: &LocaleConfig, today: NaiveDate) -> Table {
    let mut table = Table::new(vec![
        Column::left("ID"),
        Column::left("Nome"),
        Column::right("Valor"),
        Column::left("Categoria"),
        Column::left("Recebedor"),
        Column::left("Vencimento"),
        Column::left("Situação"),
    ]);

    let plain = crate::cli::output::current_preferences().plain_mode;
    for bill in bills {
        let badge = classify(bill.due_date, bill.paid, today);
        let situacao = if badge.label.is_empty() {
            "-".to_string()
        } else if plain {
            badge.label.to_string()
        } else {
            badge.label.color(badge.status.color()).to_string()
        };
        let categoria = if plain {
            bill.category.clone()
        } else {
            bill.category
                .as_str()
                .color(category_color(&bill.category))
                .to_string()
        };
        table.push_row(vec![
            bill.id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".into()),
            bill.bill_name.clone(),
            format_currency(locale, bill.amount),
            categoria,
            bill.receiver.clone(),
            format_date(bill.due_date),
            situacao,
        ]);
    }

    table
}

/// Renders the detail view of a single bill. The due date always reads
/// "Vencimento:"; settlement is conveyed by the urgency badge alone, since
/// the service does not record a payment date.
pub fn bill_detail_lines(bill: &Bill, locale: &LocaleConfig, today: NaiveDate) -> Vec<String> {
    let badge = classify(bill.due_date, bill.paid, today);
    let due_line = if badge.label.is_empty() {
        format!("Vencimento: {}", format_date(bill.due_date))
    } else {
        format!(
            "Vencimento: {} ({})",
            format_date(bill.due_date),
            badge.label
        )
    };
    vec![
        format!("Valor:      {}", format_currency(locale, bill.amount)),
        format!("Categoria:  {}", bill.category),
        format!("Recebedor:  {}", bill.receiver),
        due_line,
    ]
}

/// Renders the headline figures shown above the table.
pub fn summary_lines(summary: &DashboardSummary, locale: &LocaleConfig) -> Vec<String> {
    vec![
        format!("Total de Contas: {}", summary.total_bills),
        format!(
            "Valor Total:     {}",
            format_currency(locale, summary.total_amount)
        ),
        format!("Pagas:           {}", summary.paid_bills),
        format!("Vencidas:        {}", summary.overdue_bills),
    ]
}
