use crate::cli::commands::{CommandEntry, CommandRegistry};
use crate::cli::output;

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Comandos disponíveis");
    for entry in registry.list() {
        output::info(format!("  {:<8} {}", entry.name, entry.description));
    }
    output::info("Use `help <comando>` para detalhes.");
}

pub fn print_command(entry: &CommandEntry) {
    output::section(format!("Ajuda: {}", entry.name));
    output::info(format!("  Descrição: {}", entry.description));
    output::info(format!("  Uso: {}", entry.usage));
}
