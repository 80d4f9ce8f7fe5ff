use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn contas() -> (Command, tempfile::TempDir) {
    let home = tempdir().expect("tempdir");
    let mut cmd = Command::cargo_bin("contas").expect("binary");
    cmd.env("CONTAS_CLI_SCRIPT", "1")
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path());
    (cmd, home)
}

#[test]
fn help_lists_the_commands() {
    let (mut cmd, _home) = contas();
    cmd.write_stdin("help\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Comandos disponíveis"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("pay"));
}

#[test]
fn unknown_command_suggests_the_nearest_one() {
    let (mut cmd, _home) = contas();
    cmd.write_stdin("lst\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Comando desconhecido"))
        .stdout(predicate::str::contains("Você quis dizer `list`?"));
}

#[test]
fn add_with_invalid_fields_reports_all_violations() {
    let (mut cmd, _home) = contas();
    cmd.write_stdin("add \"\" 0 Moradia \"\" 2020-13-01\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nome da conta é obrigatório"))
        .stdout(predicate::str::contains("Valor deve ser maior que zero"))
        .stdout(predicate::str::contains("Recebedor é obrigatório"))
        .stdout(predicate::str::contains("Data de vencimento inválida"));
}

#[test]
fn add_with_unknown_category_lists_the_options() {
    let (mut cmd, _home) = contas();
    cmd.write_stdin("add Luz 100 Viagens Companhia 2025-10-01\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Categoria desconhecida"))
        .stdout(predicate::str::contains("Moradia"));
}

#[test]
fn missing_id_arguments_print_usage() {
    let (mut cmd, _home) = contas();
    cmd.write_stdin("rm\npay\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("uso: rm <id> [--force]"))
        .stdout(predicate::str::contains("uso: pay <id>"));
}

#[test]
fn config_show_prints_the_defaults() {
    let (mut cmd, _home) = contas();
    cmd.write_stdin("config\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:8080"))
        .stdout(predicate::str::contains("pt-BR"))
        .stdout(predicate::str::contains("BRL"));
}

#[test]
fn config_set_persists_across_runs() {
    let home = tempdir().expect("tempdir");

    let mut first = Command::cargo_bin("contas").expect("binary");
    first
        .env("CONTAS_CLI_SCRIPT", "1")
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .write_stdin("config set currency USD\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuração salva"));

    let mut second = Command::cargo_bin("contas").expect("binary");
    second
        .env("CONTAS_CLI_SCRIPT", "1")
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .write_stdin("config\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("currency: USD"));
}
