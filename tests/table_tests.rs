use chrono::NaiveDate;
use colored::Colorize;
use contas::cli::output::{set_preferences, OutputPreferences};
use contas::cli::table::{bill_detail_lines, bills_table, summary_lines, visible_width, Column, Table};
use contas::domain::Bill;
use contas::rules::{DashboardSummary, LocaleConfig};

fn plain_output() {
    set_preferences(OutputPreferences {
        plain_mode: true,
        quiet_mode: false,
    });
}

#[test]
fn visible_width_ignores_ansi_sequences() {
    colored::control::set_override(true);
    let styled = "Vencida".red().to_string();
    assert!(styled.len() > "Vencida".len());
    assert_eq!(visible_width(&styled), "Vencida".chars().count());
    assert_eq!(visible_width("plain"), 5);
    colored::control::unset_override();
}

#[test]
fn columns_pad_to_the_widest_cell() {
    let mut table = Table::new(vec![Column::left("Nome"), Column::right("Valor")]);
    table.push_row(vec!["Internet".into(), "R$ 99,90".into()]);
    table.push_row(vec!["Luz".into(), "R$ 1.150,00".into()]);

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Nome"));
    assert!(lines[1].chars().all(|ch| ch == '-'));
    // Right-aligned amounts line up on their last character.
    let short = lines[3];
    assert!(short.ends_with("R$ 1.150,00"));
    let padded = lines[2];
    assert!(padded.ends_with("R$ 99,90"));
    assert_eq!(padded.len(), short.len());
}

#[test]
fn dashboard_table_includes_badges_and_formatted_values() {
    plain_output();
    let locale = LocaleConfig::default();
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let bills = vec![
        Bill {
            id: Some(contas::domain::BillId::new("1")),
            bill_name: "Aluguel".into(),
            amount: 1234.5,
            category: "Moradia".into(),
            receiver: "Imobiliária".into(),
            due_date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            paid: false,
        },
        Bill {
            id: Some(contas::domain::BillId::new("2")),
            bill_name: "Internet".into(),
            amount: 99.9,
            category: "Serviços".into(),
            receiver: "Operadora".into(),
            due_date: NaiveDate::from_ymd_opt(2025, 7, 20).unwrap(),
            paid: true,
        },
    ];

    let rendered = bills_table(&bills, &locale, today).render();
    assert!(rendered.contains("R$ 1.234,50"));
    assert!(rendered.contains("10/06/2025"));
    assert!(rendered.contains("Vencida"));
    assert!(rendered.contains("Paga"));
}

#[test]
fn detail_lines_keep_the_due_date_label_for_paid_bills() {
    plain_output();
    let locale = LocaleConfig::default();
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let bill = Bill {
        id: Some(contas::domain::BillId::new("7")),
        bill_name: "Internet".into(),
        amount: 99.9,
        category: "Serviços".into(),
        receiver: "Operadora".into(),
        due_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        paid: true,
    };

    let lines = bill_detail_lines(&bill, &locale, today);
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("R$ 99,90"));
    let due_line = &lines[3];
    // The due date is the only date the API exposes; settlement shows up
    // as the badge, not as a payment date.
    assert!(due_line.starts_with("Vencimento:"));
    assert!(due_line.contains("01/06/2025"));
    assert!(due_line.contains("(Paga)"));
    assert!(!lines.iter().any(|line| line.contains("Pago em")));
}

#[test]
fn detail_lines_omit_the_badge_when_nothing_is_urgent() {
    plain_output();
    let locale = LocaleConfig::default();
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let bill = Bill {
        id: Some(contas::domain::BillId::new("8")),
        bill_name: "Academia".into(),
        amount: 120.0,
        category: "Saúde".into(),
        receiver: "Academia Boa Forma".into(),
        due_date: NaiveDate::from_ymd_opt(2025, 7, 20).unwrap(),
        paid: false,
    };

    let lines = bill_detail_lines(&bill, &locale, today);
    assert_eq!(lines[3], "Vencimento: 20/07/2025");
}

#[test]
fn summary_block_renders_all_four_figures() {
    let locale = LocaleConfig::default();
    let summary = DashboardSummary {
        total_bills: 3,
        total_amount: 1334.4,
        paid_bills: 1,
        overdue_bills: 1,
    };

    let lines = summary_lines(&summary, &locale);
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("3"));
    assert!(lines[1].contains("R$ 1.334,40"));
    assert!(lines[2].contains("1"));
    assert!(lines[3].contains("1"));
}
