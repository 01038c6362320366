//! End-to-end tests of the interactive menu using assert_cmd.

mod common;

use common::{TestContext, FLASHCARDS_FILE, HIGH_INCORRECT_FILE, SCORES_FILE};
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use serde_json::json;

const CAT: &str = r#"{"cat":{"definition":"a feline","incorrect_count":0}}"#;

#[test]
fn exit_from_menu() {
    let ctx = TestContext::new();

    ctx.flashcards()
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error loading flashcards: file not found"))
        .stdout(predicate::str::contains("1. Add Flashcard"))
        .stdout(predicate::str::contains("9. Exit"));

    assert!(!ctx.exists(FLASHCARDS_FILE));
}

#[test]
fn invalid_menu_option_redisplays_menu() {
    let ctx = TestContext::with_flashcards("{}");

    ctx.flashcards()
        .write_stdin("42\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid option. Please try again."))
        .stdout(predicate::str::contains("Flashcard App").count(2));
}

#[test]
fn added_card_survives_restart() {
    let ctx = TestContext::new();

    ctx.flashcards()
        .write_stdin("1\ncat\na feline\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Flashcard saved!"));

    assert_eq!(
        ctx.read_json(FLASHCARDS_FILE),
        json!({"cat": {"definition": "a feline", "incorrect_count": 0}})
    );

    ctx.flashcards()
        .write_stdin("8\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Term: cat | Definition: a feline"))
        .stdout(predicate::str::contains("Error loading").not());
}

#[test]
fn malformed_store_is_recovered() {
    let ctx = TestContext::with_flashcards(r#"{"cat": {"incorrect_count": 1}}"#);

    ctx.flashcards()
        .write_stdin("8\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "flashcard for term 'cat' is improperly formatted",
        ))
        .stdout(predicate::str::contains("No flashcards available."));
}

#[test]
fn edit_and_delete() {
    let ctx = TestContext::with_flashcards(CAT);

    ctx.flashcards()
        .write_stdin("2\ndog\n2\ncat\na small feline\n3\nowl\n8\n3\ncat\n8\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Term not found.").count(2))
        .stdout(predicate::str::contains("Flashcard updated!"))
        .stdout(predicate::str::contains("Term: cat | Definition: a small feline"))
        .stdout(predicate::str::contains("Flashcard deleted!"))
        .stdout(predicate::str::contains("No flashcards available."));

    assert_eq!(ctx.read_json(FLASHCARDS_FILE), json!({}));
}

#[test]
fn missed_recall_is_counted_and_reviewable_after_restart() {
    let ctx = TestContext::with_flashcards(CAT);

    ctx.flashcards()
        .write_stdin("4\n2\n1\ndog\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect! The correct term is: cat"));

    let expected = json!({"cat": {"definition": "a feline", "incorrect_count": 1}});
    assert_eq!(ctx.read_json(FLASHCARDS_FILE), expected);
    assert_eq!(ctx.read_json(HIGH_INCORRECT_FILE), expected);

    ctx.flashcards()
        .write_stdin("5\n3\ncat\n5\n1\nkitten\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains(
            "This term has been answered incorrectly 1 times.",
        ));

    assert_eq!(ctx.read_json(FLASHCARDS_FILE), expected);
}

#[test]
fn correct_recall_clears_nothing_and_writes_empty_view() {
    let ctx = TestContext::with_flashcards(CAT);

    ctx.flashcards()
        .write_stdin("4\n2\n1\ncat\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"));

    assert_eq!(ctx.read_json(HIGH_INCORRECT_FILE), json!({}));
}

#[test]
fn quiz_scores_accumulate_across_runs() {
    let ctx = TestContext::with_flashcards(CAT);

    ctx.flashcards()
        .write_stdin("6\n3\nc\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your score: 1/1"));

    assert_eq!(ctx.read_json(SCORES_FILE), json!([1]));

    ctx.flashcards()
        .write_stdin("6\n1\nA\n7\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Attempt 1: 1"))
        .stdout(predicate::str::contains("Attempt 2: 1"));

    assert_eq!(ctx.read_json(SCORES_FILE), json!([1, 1]));
}

#[test]
fn malformed_scores_are_reset() {
    let ctx = TestContext::with_flashcards(CAT);
    ctx.write(SCORES_FILE, "not json");

    ctx.flashcards()
        .write_stdin("7\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error loading scores"))
        .stdout(predicate::str::contains("No scores available."));
}

#[test]
fn invalid_quiz_letter_is_fatal() {
    let ctx = TestContext::with_flashcards(CAT);

    ctx.flashcards()
        .write_stdin("6\n1\nz\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid answer"));

    assert!(!ctx.exists(SCORES_FILE));
}

#[test]
fn non_integer_count_is_fatal() {
    let ctx = TestContext::with_flashcards(CAT);

    ctx.flashcards()
        .write_stdin("4\n2\nmany\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid number"));
}

#[test]
fn end_of_input_is_fatal() {
    let ctx = TestContext::with_flashcards(CAT);

    ctx.flashcards()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected end of input"));
}

#[test]
fn failed_save_is_fatal() {
    let ctx = TestContext::new();

    ctx.flashcards()
        .env("FLASHCARDS_DIR", ctx.path().join("missing"))
        .write_stdin("1\ncat\na feline\n9\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Flashcard saved!").not())
        .stderr(predicate::str::contains("failed to write"));
}

#[test]
fn invalid_seed_is_rejected() {
    let ctx = TestContext::with_flashcards(CAT);

    ctx.flashcards()
        .env("FLASHCARDS_SEED", "lucky")
        .write_stdin("9\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}
