use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn assist() -> Command {
    Command::cargo_bin("assist").expect("binary")
}

#[test]
fn ask_with_no_text_prints_the_page_welcome() {
    assist()
        .args(["ask", "--page", "home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("barbershop premium"));
}

#[test]
fn ask_answers_a_greeting_on_any_page() {
    assist()
        .args(["ask", "--page", "barbers", "halo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saya siap membantu Anda"));
}

#[test]
fn ask_json_emits_a_parseable_envelope() {
    let output = assist()
        .args(["ask", "--page", "home", "--json", "Berapa harga potong rambut?"])
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["page"], "home");
    assert_eq!(body["question"], "Berapa harga potong rambut?");
    assert!(body["answer"]
        .as_str()
        .expect("answer string")
        .contains("Rp 150.000"));
}

#[test]
fn ask_rejects_an_unknown_page_tag() {
    assist()
        .args(["ask", "--page", "checkout", "halo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown page context"));
}

#[test]
fn quick_lists_the_page_shortcuts() {
    assist()
        .args(["quick", "--page", "booking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Langkah-langkah booking?"))
        .stdout(predicate::str::contains("Metode pembayaran apa saja?"));
}

#[test]
fn quick_json_with_answers_resolves_every_shortcut() {
    let output = assist()
        .args(["quick", "--page", "ai-assistant", "--answers", "--json"])
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["page"], "ai-assistant");
    let questions = body["questions"].as_array().expect("questions array");
    assert_eq!(questions.len(), 2);
    for entry in questions {
        let answer = entry["answer"].as_str().expect("answer string");
        assert!(!answer.is_empty());
    }
}

#[test]
fn chat_session_greets_then_answers_each_line() {
    assist()
        .args(["chat", "--page", "booking"])
        .write_stdin("halo\nBagaimana cara reschedule?\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Halaman booking ini memudahkan"))
        .stdout(predicate::str::contains("Saya siap membantu Anda"))
        .stdout(predicate::str::contains("+62 857-7198-3031"));
}

#[test]
fn chat_json_dumps_the_transcript_on_exit() {
    let output = assist()
        .args(["chat", "--page", "home", "--json"])
        .write_stdin("hai\nexit\n")
        .output()
        .expect("command run");
    assert!(output.status.success());

    // The transcript array is the last JSON document on stdout, after the
    // plain-text replies. It starts at the first '[' line.
    let stdout = String::from_utf8(output.stdout).expect("utf-8");
    let start = stdout.find("\n[").expect("json transcript");
    let body: Value = serde_json::from_str(&stdout[start..]).expect("valid json");
    let entries = body.as_array().expect("transcript array");
    // welcome (bot), user "hai", bot greeting
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["bot"], true);
    assert_eq!(entries[1]["text"], "hai");
    assert_eq!(entries[1]["bot"], false);
}
