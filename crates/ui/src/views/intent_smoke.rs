use super::quiz::QuizIntent;
use super::test_harness::{ViewHarness, setup_view_harness};

fn wrong_candidate(harness: &ViewHarness) -> String {
    let question = harness.quiz.snapshot().question.expect("active question");
    question
        .candidates
        .iter()
        .find(|c| **c != question.word)
        .expect("a misspelling on offer")
        .clone()
}

fn right_candidate(harness: &ViewHarness) -> String {
    harness.quiz.snapshot().question.expect("active question").word
}

async fn answer_through_screen(harness: &mut ViewHarness, correct: bool) {
    let choice = if correct {
        right_candidate(harness)
    } else {
        wrong_candidate(harness)
    };
    harness.send(QuizIntent::Select(choice));
    harness.settle().await;
    harness.send(QuizIntent::Advance);
    harness.settle().await;
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_intents_smoke_select_highlights_and_advance_clears() {
    let mut harness = setup_view_harness(false).await;
    assert!(!harness.handles.highlight_running());

    let choice = wrong_candidate(&harness);
    harness.send(QuizIntent::Select(choice.clone()));
    harness.settle().await;

    assert_eq!(harness.quiz.snapshot().selected_answer, Some(choice));
    assert!(harness.handles.highlight_running());
    assert!(harness.handles.highlighted().is_some());
    let html = harness.render();
    assert!(html.contains("question__word"), "word not revealed in {html}");
    assert!(html.contains("letter--lit"), "no highlighted letter in {html}");

    harness.send(QuizIntent::Advance);
    harness.settle().await;

    assert!(!harness.handles.highlight_running());
    assert!(harness.handles.highlighted().is_none());
    let html = harness.render();
    assert!(html.contains("Question 2 of 3"), "missing progress in {html}");
    assert!(!html.contains("letter--lit"), "stale highlight in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_intents_smoke_mark_error_keeps_selection_state() {
    let mut harness = setup_view_harness(false).await;
    let word = right_candidate(&harness);

    harness.send(QuizIntent::MarkError);
    harness.settle().await;

    assert_eq!(harness.quiz.error_log().entries(), [word]);
    assert!(harness.quiz.snapshot().selected_answer.is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_intents_smoke_retry_missed_then_reset() {
    let mut harness = setup_view_harness(false).await;
    let missed = right_candidate(&harness);
    answer_through_screen(&mut harness, false).await;
    answer_through_screen(&mut harness, true).await;
    answer_through_screen(&mut harness, true).await;

    let html = harness.render();
    assert!(html.contains("You got 2 out of 3 correct!"), "missing score in {html}");

    harness.send(QuizIntent::Retry { missed_only: true });
    harness.settle().await;

    let snapshot = harness.quiz.snapshot();
    assert_eq!(snapshot.question.as_ref().map(|q| q.word.as_str()), Some(missed.as_str()));
    let html = harness.render();
    assert!(html.contains("Question 1 of 1"), "missing retry round in {html}");

    harness.send(QuizIntent::MarkError);
    harness.settle().await;
    harness.send(QuizIntent::ResetAll);
    harness.settle().await;

    let snapshot = harness.quiz.snapshot();
    assert!(snapshot.word_stats.is_empty());
    assert!(snapshot.error_log.is_empty());
    assert!(!harness.handles.highlight_running());
    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "missing fresh round in {html}");
}
