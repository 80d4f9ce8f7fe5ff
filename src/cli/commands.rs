//! Command registry, shell context, and command handlers.

use std::collections::HashMap;
use std::io;

use crossterm::{
    cursor::MoveTo,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;

use crate::cli::forms::{self, FormOutcome};
use crate::cli::{help, output, table};
use crate::client::BillsClient;
use crate::config::{Config, ConfigManager};
use crate::domain::{canonical_category, BillId, CATEGORIES};
use crate::errors::CliError;
use crate::rules::{BillForm, Clock, DashboardSummary, LocaleConfig, SystemClock};

/// Maximum edit distance accepted for "did you mean" suggestions.
const SUGGESTION_DISTANCE: usize = 3;

pub type CommandResult = Result<(), CliError>;
pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.commands.get(name).map(|entry| entry.handler)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Mutable state threaded through every command handler.
pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    registry: CommandRegistry,
    config: Config,
    config_manager: ConfigManager,
    client: Option<BillsClient>,
    clock: SystemClock,
    theme: ColorfulTheme,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);

        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;

        Ok(Self {
            mode,
            running: true,
            registry,
            config,
            config_manager,
            client: None,
            clock: SystemClock,
            theme: ColorfulTheme::default(),
        })
    }

    pub fn prompt(&self) -> String {
        "contas> ".to_string()
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn locale(&self) -> LocaleConfig {
        LocaleConfig::from_tags(&self.config.locale, &self.config.currency)
    }

    /// Lazily constructs the API client from the configured base URL.
    fn client(&mut self) -> Result<&BillsClient, CliError> {
        match self.client {
            Some(ref client) => Ok(client),
            None => {
                let client = BillsClient::new(self.config.api_url.clone())?;
                Ok(self.client.insert(client))
            }
        }
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> CommandResult {
        let Some(handler) = self.registry.handler(command) else {
            let mut message = format!("Comando desconhecido: `{}`.", command);
            if let Some(suggestion) = self.suggestion(command) {
                message.push_str(&format!(" Você quis dizer `{}`?", suggestion));
            }
            output::error(message);
            return Ok(());
        };
        handler(self, args)
    }

    fn suggestion(&self, input: &str) -> Option<&'static str> {
        self.registry
            .names()
            .map(|name| (levenshtein(input, name), name))
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }

    pub fn report_error(&self, err: &CliError) {
        output::error(err);
    }
}

pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "list",
        "Mostra o dashboard de contas",
        "list",
        cmd_list,
    ));
    registry.register(CommandEntry::new(
        "show",
        "Mostra os detalhes de uma conta",
        "show <id>",
        cmd_show,
    ));
    registry.register(CommandEntry::new(
        "add",
        "Adiciona uma nova conta",
        "add [<nome> <valor> <categoria> <recebedor> <vencimento AAAA-MM-DD>]",
        cmd_add,
    ));
    registry.register(CommandEntry::new(
        "edit",
        "Edita uma conta existente",
        "edit <id>",
        cmd_edit,
    ));
    registry.register(CommandEntry::new(
        "pay",
        "Alterna o status de pagamento de uma conta",
        "pay <id>",
        cmd_pay,
    ));
    registry.register(CommandEntry::new(
        "rm",
        "Remove uma conta",
        "rm <id> [--force]",
        cmd_rm,
    ));
    registry.register(CommandEntry::new(
        "config",
        "Mostra ou altera a configuração",
        "config [set <api_url|locale|currency> <valor>]",
        cmd_config,
    ));
    registry.register(CommandEntry::new("clear", "Limpa a tela", "clear", cmd_clear));
    registry.register(CommandEntry::new(
        "help",
        "Lista os comandos disponíveis",
        "help [comando]",
        cmd_help,
    ));
    registry.register(CommandEntry::new("quit", "Sai do shell", "quit", cmd_quit));
    registry.register(CommandEntry::new("exit", "Sai do shell", "exit", cmd_quit));
}

fn cmd_list(ctx: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let locale = ctx.locale();
    let today = ctx.clock.today();
    let bills = ctx.client()?.list_bills()?;

    if bills.is_empty() {
        output::info("Nenhuma conta cadastrada.");
        return Ok(());
    }

    let summary = DashboardSummary::compute(&bills, today);
    output::section("Dashboard de Contas");
    for line in table::summary_lines(&summary, &locale) {
        output::info(line);
    }
    output::blank_line();
    println!("{}", table::bills_table(&bills, &locale, today).render());
    Ok(())
}

fn cmd_show(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = single_id(args, "show <id>")?;
    let locale = ctx.locale();
    let today = ctx.clock.today();
    let bill = ctx.client()?.get_bill(&id)?;

    output::section(&bill.bill_name);
    for line in table::bill_detail_lines(&bill, &locale, today) {
        output::info(line);
    }
    Ok(())
}

fn cmd_add(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let payload = if args.is_empty() {
        if ctx.mode != CliMode::Interactive {
            return Err(CliError::usage(
                "uso: add <nome> <valor> <categoria> <recebedor> <vencimento AAAA-MM-DD>",
            ));
        }
        let locale = ctx.locale();
        match forms::bill_form(&ctx.theme, &locale, None)? {
            FormOutcome::Completed(bill) => bill,
            FormOutcome::Cancelled => {
                output::info("Operação cancelada.");
                return Ok(());
            }
        }
    } else {
        match bill_from_args(args)? {
            Some(bill) => bill,
            None => return Ok(()),
        }
    };

    let created = ctx.client()?.create_bill(&payload)?;
    output::success(format!(
        "Conta \"{}\" adicionada com sucesso!",
        created.bill_name
    ));
    if let Some(id) = &created.id {
        output::info(format!("ID atribuído: {}", id));
    }
    Ok(())
}

fn cmd_edit(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    if ctx.mode != CliMode::Interactive {
        return Err(CliError::usage("edit está disponível apenas no modo interativo"));
    }
    let id = single_id(args, "edit <id>")?;
    let locale = ctx.locale();
    let bill = ctx.client()?.get_bill(&id)?;

    match forms::bill_form(&ctx.theme, &locale, Some(&bill))? {
        FormOutcome::Completed(mut payload) => {
            // The form never touches the paid flag; keep the stored value.
            payload.paid = bill.paid;
            ctx.client()?.update_bill(&id, &payload)?;
            output::success(format!("Conta \"{}\" atualizada.", payload.bill_name));
        }
        FormOutcome::Cancelled => output::info("Operação cancelada."),
    }
    Ok(())
}

fn cmd_pay(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = single_id(args, "pay <id>")?;
    ctx.client()?.toggle_paid(&id)?;
    output::success("Status de pagamento atualizado.");
    Ok(())
}

fn cmd_rm(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    let force = args.iter().any(|arg| *arg == "--force");
    let positional: Vec<&str> = args.iter().copied().filter(|arg| *arg != "--force").collect();
    let id = single_id(&positional, "rm <id> [--force]")?;

    if !force && ctx.mode == CliMode::Interactive {
        let confirmed = Confirm::with_theme(&ctx.theme)
            .with_prompt(format!("Remover a conta {}?", id))
            .default(false)
            .interact()?;
        if !confirmed {
            output::info("Operação cancelada.");
            return Ok(());
        }
    }

    ctx.client()?.delete_bill(&id)?;
    output::success("Conta removida.");
    Ok(())
}

fn cmd_config(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::section("Configuração");
            output::info(format!("api_url:  {}", ctx.config.api_url));
            output::info(format!("locale:   {}", ctx.config.locale));
            output::info(format!("currency: {}", ctx.config.currency));
            output::info(format!("arquivo:  {}", ctx.config_manager.path().display()));
            Ok(())
        }
        ["set", key, value] => {
            match *key {
                "api_url" => {
                    ctx.config.api_url = value.trim_end_matches('/').to_string();
                    // Rebuild the client against the new URL on next use.
                    ctx.client = None;
                }
                "locale" => ctx.config.locale = value.to_string(),
                "currency" => ctx.config.currency = value.to_uppercase(),
                other => {
                    return Err(CliError::usage(format!(
                        "chave desconhecida `{}` (opções: api_url, locale, currency)",
                        other
                    )))
                }
            }
            ctx.config_manager.save(&ctx.config)?;
            output::success(format!("Configuração salva: {} = {}", key, value));
            Ok(())
        }
        _ => Err(CliError::usage(
            "uso: config [set <api_url|locale|currency> <valor>]",
        )),
    }
}

fn cmd_clear(_ctx: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(MoveTo(0, 0))?;
    Ok(())
}

fn cmd_help(ctx: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        None => help::print_overview(&ctx.registry),
        Some(name) => match ctx.registry.get(&name.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => output::warning(format!("Nenhuma ajuda para `{}`.", name)),
        },
    }
    Ok(())
}

fn cmd_quit(ctx: &mut ShellContext, _args: &[&str]) -> CommandResult {
    ctx.running = false;
    Ok(())
}

fn single_id(args: &[&str], usage: &str) -> Result<BillId, CliError> {
    match args {
        [id] => Ok(BillId::new(*id)),
        _ => Err(CliError::usage(format!("uso: {}", usage))),
    }
}

/// Builds a creation payload from positional `add` arguments, reporting
/// validation failures the same way the interactive form does. `None` means
/// the input was rejected and already reported.
fn bill_from_args(args: &[&str]) -> Result<Option<crate::domain::NewBill>, CliError> {
    let [name, amount, category, receiver, due_date] = args else {
        return Err(CliError::usage(
            "uso: add <nome> <valor> <categoria> <recebedor> <vencimento AAAA-MM-DD>",
        ));
    };

    let Some(category) = canonical_category(category) else {
        output::error(format!(
            "Categoria desconhecida: `{}`. Opções: {}",
            category,
            CATEGORIES.join(", ")
        ));
        return Ok(None);
    };

    let form = BillForm {
        bill_name: name.to_string(),
        amount: forms::parse_amount(amount),
        category: category.to_string(),
        receiver: receiver.to_string(),
        due_date: due_date.to_string(),
    };

    match form.submit() {
        Ok(bill) => Ok(Some(bill)),
        Err(errors) => {
            for (field, message) in &errors {
                output::error(format!("{}: {}", field, message));
            }
            Ok(None)
        }
    }
}
