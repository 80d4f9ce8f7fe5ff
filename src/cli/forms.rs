//! Interactive bill entry form.
//!
//! The prompts collect a raw [`BillForm`] and hand it to the validation
//! rules; on failure every violation is reported at once and the user may
//! retry with the previous answers preserved.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::output;
use crate::domain::{Bill, NewBill, CATEGORIES};
use crate::errors::CliError;
use crate::rules::{format_currency, format_date, BillForm, LocaleConfig};

/// High-level outcome of running the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Completed(NewBill),
    Cancelled,
}

/// Parses a user-typed amount. Accepts either `,` or `.` as the decimal
/// separator; anything unparsable becomes 0.0 and is rejected by validation.
pub fn parse_amount(input: &str) -> f64 {
    input.trim().replace(',', ".").parse().unwrap_or(0.0)
}

/// Runs the add/edit form. `initial` pre-fills the prompts when editing an
/// existing bill.
pub fn bill_form(
    theme: &ColorfulTheme,
    locale: &LocaleConfig,
    initial: Option<&Bill>,
) -> Result<FormOutcome, CliError> {
    let mut draft = match initial {
        Some(bill) => BillForm {
            bill_name: bill.bill_name.clone(),
            amount: bill.amount,
            category: bill.category.clone(),
            receiver: bill.receiver.clone(),
            due_date: bill.due_date.format("%Y-%m-%d").to_string(),
        },
        None => BillForm::default(),
    };

    loop {
        draft.bill_name = prompt_text(theme, "Nome da Conta", &draft.bill_name)?;

        let amount_default = if draft.amount > 0.0 {
            format!("{:.2}", draft.amount)
        } else {
            String::new()
        };
        let amount_text = prompt_text(theme, "Valor", &amount_default)?;
        draft.amount = parse_amount(&amount_text);

        let default_index = CATEGORIES
            .iter()
            .position(|category| category.eq_ignore_ascii_case(&draft.category))
            .unwrap_or(0);
        let selected = Select::with_theme(theme)
            .with_prompt("Categoria")
            .items(&CATEGORIES)
            .default(default_index)
            .interact()?;
        draft.category = CATEGORIES[selected].to_string();

        draft.receiver = prompt_text(theme, "Recebedor", &draft.receiver)?;
        draft.due_date = prompt_text(theme, "Data de Vencimento (AAAA-MM-DD)", &draft.due_date)?;

        match draft.submit() {
            Err(errors) => {
                for (field, message) in &errors {
                    output::error(format!("{}: {}", field, message));
                }
                let retry = Confirm::with_theme(theme)
                    .with_prompt("Corrigir os dados?")
                    .default(true)
                    .interact()?;
                if !retry {
                    return Ok(FormOutcome::Cancelled);
                }
            }
            Ok(bill) => {
                output::section("Resumo");
                output::info(format!("Nome:       {}", bill.bill_name));
                output::info(format!("Valor:      {}", format_currency(locale, bill.amount)));
                output::info(format!("Categoria:  {}", bill.category));
                output::info(format!("Recebedor:  {}", bill.receiver));
                output::info(format!("Vencimento: {}", format_date(bill.due_date)));
                let confirmed = Confirm::with_theme(theme)
                    .with_prompt("Confirmar?")
                    .default(true)
                    .interact()?;
                if confirmed {
                    return Ok(FormOutcome::Completed(bill));
                }
                let discard = Confirm::with_theme(theme)
                    .with_prompt("Descartar a conta?")
                    .default(false)
                    .interact()?;
                if discard {
                    return Ok(FormOutcome::Cancelled);
                }
            }
        }
    }
}

fn prompt_text(
    theme: &ColorfulTheme,
    prompt: &str,
    default: &str,
) -> Result<String, CliError> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if !default.is_empty() {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}
