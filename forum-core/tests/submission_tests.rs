mod common;

use common::{small_commands, small_snapshot};
use forum_core::{services::prepare_question, QuestionDraft, SubmissionError};

fn draft(text: Option<&str>, category: Option<&str>, district: Option<&str>) -> QuestionDraft {
    QuestionDraft {
        text: text.map(str::to_string),
        category: category.map(str::to_string),
        district: district.map(str::to_string),
    }
}

#[test]
fn test_text_is_censored_before_persisting() {
    let snap = small_snapshot();
    let q = prepare_question(
        &draft(Some("Why is my neighbour such an Idiot?"), Some("entertainment"), Some("sahil")),
        "user-1",
        &snap.filter,
    )
    .unwrap();
    assert_eq!(q.text, "Why is my neighbour such an ****?");
    assert_eq!(q.masked, 1);
    assert_eq!(q.category, "entertainment");
    assert_eq!(q.district, "sahil");
    assert_eq!(q.author_id, "user-1");
    assert_eq!(q.created_at, q.updated_at);
}

#[test]
fn test_clean_text_is_unchanged() {
    let snap = small_snapshot();
    let text = "Any good cafes near the boulevard?";
    let q = prepare_question(&draft(Some(text), Some("entertainment"), Some("sahil")), "u", &snap.filter)
        .unwrap();
    assert_eq!(q.text, text);
    assert_eq!(q.masked, 0);
}

#[test]
fn test_ids_are_unique() {
    let snap = small_snapshot();
    let d = draft(Some("hello"), Some("entertainment"), Some("sahil"));
    let a = prepare_question(&d, "u", &snap.filter).unwrap();
    let b = prepare_question(&d, "u", &snap.filter).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_required_fields() {
    let snap = small_snapshot();
    let cases = [
        (draft(None, Some("c"), Some("d")), "text"),
        (draft(Some("   "), Some("c"), Some("d")), "text"),
        (draft(Some("t"), None, Some("d")), "category"),
        (draft(Some("t"), Some("c"), Some("")), "district"),
    ];
    for (d, field) in cases {
        assert_eq!(
            prepare_question(&d, "u", &snap.filter).unwrap_err(),
            SubmissionError::MissingField(field)
        );
    }
    assert_eq!(
        prepare_question(&draft(Some("t"), Some("c"), Some("d")), " ", &snap.filter).unwrap_err(),
        SubmissionError::MissingAuthor
    );
}

#[test]
fn test_commands_surface_submission_errors() {
    let commands = small_commands();
    let err = commands
        .submit_question(&draft(Some("hi"), None, Some("sahil")), "u")
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<SubmissionError>(),
        Some(&SubmissionError::MissingField("category"))
    );

    let ok = commands
        .submit_question(&draft(Some("idiot"), Some("entertainment"), Some("sahil")), "u")
        .unwrap();
    assert_eq!(ok.text, "****");
}
