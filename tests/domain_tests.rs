use chrono::NaiveDate;
use colored::Color;
use contas::domain::{canonical_category, category_color, Bill, BillId, NewBill, CATEGORIES};

#[test]
fn deserializes_bills_with_numeric_ids() {
    // The reference backend serializes ids as JSON numbers.
    let json = r#"{
        "id": 7,
        "billName": "Internet",
        "amount": 99.9,
        "category": "Serviços",
        "receiver": "Operadora",
        "dueDate": "2025-08-01",
        "paid": false
    }"#;

    let bill: Bill = serde_json::from_str(json).expect("parse bill");
    assert_eq!(bill.id, Some(BillId::new("7")));
    assert_eq!(bill.bill_name, "Internet");
    assert_eq!(bill.due_date, NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
    assert!(!bill.paid);
}

#[test]
fn deserializes_bills_with_string_ids_and_missing_ids() {
    let json = r#"{"id":"abc-123","billName":"Luz","amount":150.0,"category":"Moradia","receiver":"Companhia","dueDate":"2025-08-10","paid":true}"#;
    let bill: Bill = serde_json::from_str(json).expect("parse bill");
    assert_eq!(bill.id, Some(BillId::new("abc-123")));

    let json = r#"{"billName":"Luz","amount":150.0,"category":"Moradia","receiver":"Companhia","dueDate":"2025-08-10","paid":true}"#;
    let bill: Bill = serde_json::from_str(json).expect("parse bill without id");
    assert_eq!(bill.id, None);
}

#[test]
fn new_bill_serializes_camel_case_without_id() {
    let bill = NewBill::new(
        "Água",
        80.5,
        "Moradia",
        "Saneamento",
        NaiveDate::from_ymd_opt(2025, 9, 5).unwrap(),
    );
    let value = serde_json::to_value(&bill).expect("serialize");

    assert_eq!(value["billName"], "Água");
    assert_eq!(value["dueDate"], "2025-09-05");
    assert_eq!(value["paid"], false);
    assert!(value.get("id").is_none());
}

#[test]
fn category_colors_are_case_insensitive() {
    assert_eq!(category_color("Alimentação"), Color::Green);
    assert_eq!(category_color("ALIMENTAÇÃO"), Color::Green);
    assert_eq!(category_color("saúde"), Color::Red);
}

#[test]
fn unknown_categories_use_the_default_color() {
    assert_eq!(category_color("Impostos"), Color::BrightBlack);
    assert_eq!(category_color("inexistente"), Color::BrightBlack);
}

#[test]
fn category_lookup_matches_the_fixed_list() {
    assert_eq!(CATEGORIES.len(), 10);
    assert_eq!(canonical_category("moradia"), Some("Moradia"));
    assert_eq!(canonical_category("MORADIA"), Some("Moradia"));
    assert_eq!(canonical_category("viagens"), None);
}
