use assert_cmd::Command;
use predicates::prelude::*;

fn calc() -> Command {
    Command::cargo_bin("calc").unwrap()
}

#[test]
fn evaluates_each_argument() {
    calc()
        .args(["2 + 3 * 4", "8 - 3 - 2", "0 - 7 % 3"])
        .assert()
        .success()
        .stdout("20\n3\n-1\n");
}

#[test]
fn prints_tree_with_ast_flag() {
    calc()
        .args(["--ast", "--", "1-(2 - 3)", "--5"])
        .assert()
        .success()
        .stdout("1 - (2 - 3)\n--5\n");
}

#[test]
fn parse_error_sets_exit_status() {
    calc()
        .args(["1 +", "4"])
        .assert()
        .failure()
        .stdout("4\n")
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn division_by_zero_sets_exit_status() {
    calc()
        .arg("5 % 0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Division or mod by 0"));
}

#[test]
fn interactive_session() {
    calc()
        .write_stdin("1 + 2\n1 +\n5 / 0\n:ast 2+3*4\n:ast 5 / 0\n:eval -(7 % 4)\n\nquit\n99\n")
        .assert()
        .success()
        .stdout("3\n2 + 3 * 4\n5 / 0\n-3\n")
        .stderr("Parse error. Try again.\nDivision or mod by 0. Try again.\n");
}

#[test]
fn interactive_session_ends_on_exit_or_eof() {
    calc()
        .write_stdin("  exit \n1 + 1\n")
        .assert()
        .success()
        .stdout("");
    calc().write_stdin("6 * 7\n").assert().success().stdout("42\n");
}
