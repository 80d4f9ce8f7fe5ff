//! Bill-creation form validation.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::NewBill;
use crate::rules::format::parse_due_date;

/// Fields of the bill form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    BillName,
    Amount,
    Category,
    Receiver,
    DueDate,
}

impl FormField {
    /// Wire/form name of the field, as the original web form spells it.
    pub fn key(self) -> &'static str {
        match self {
            FormField::BillName => "billName",
            FormField::Amount => "amount",
            FormField::Category => "category",
            FormField::Receiver => "receiver",
            FormField::DueDate => "dueDate",
        }
    }

    /// Portuguese label shown next to validation errors.
    pub fn label(self) -> &'static str {
        match self {
            FormField::BillName => "Nome da Conta",
            FormField::Amount => "Valor",
            FormField::Category => "Categoria",
            FormField::Receiver => "Recebedor",
            FormField::DueDate => "Data de Vencimento",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw form state prior to validation. The due date stays textual here; it
/// only becomes a calendar date once validation accepts it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillForm {
    pub bill_name: String,
    pub amount: f64,
    pub category: String,
    pub receiver: String,
    pub due_date: String,
}

impl BillForm {
    /// Validates and converts into a creation payload. Returns every
    /// violation at once so callers can display them simultaneously.
    pub fn submit(&self) -> Result<NewBill, BTreeMap<FormField, String>> {
        let errors = validate(self);
        if !errors.is_empty() {
            return Err(errors);
        }
        // validate() guarantees the date parses.
        let due_date = parse_due_date(&self.due_date).expect("validated due date");
        Ok(NewBill::new(
            self.bill_name.trim(),
            self.amount,
            self.category.clone(),
            self.receiver.trim(),
            due_date,
        ))
    }
}

/// Checks every rule independently; errors do not short-circuit each other.
/// An empty map means the form is valid.
pub fn validate(form: &BillForm) -> BTreeMap<FormField, String> {
    let mut errors = BTreeMap::new();

    if form.bill_name.trim().is_empty() {
        errors.insert(FormField::BillName, "Nome da conta é obrigatório".into());
    }

    if form.amount <= 0.0 {
        errors.insert(FormField::Amount, "Valor deve ser maior que zero".into());
    }

    if form.category.is_empty() {
        errors.insert(FormField::Category, "Categoria é obrigatória".into());
    }

    if form.receiver.trim().is_empty() {
        errors.insert(FormField::Receiver, "Recebedor é obrigatório".into());
    }

    if form.due_date.is_empty() {
        errors.insert(
            FormField::DueDate,
            "Data de vencimento é obrigatória".into(),
        );
    } else if parse_due_date(&form.due_date).is_none() {
        errors.insert(FormField::DueDate, "Data de vencimento inválida".into());
    }

    errors
}
