use super::test_harness::setup_view_harness;

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_renders_first_question() {
    let harness = setup_view_harness(false).await;
    let html = harness.render();

    assert!(html.contains("Question 1 of 3"), "missing progress in {html}");
    assert!(html.contains("Select the correct spelling:"), "missing prompt in {html}");
    assert!(html.contains("Mark as Error"), "missing flag button in {html}");
    assert!(html.contains("View Errors"), "missing toggle in {html}");
    assert!(html.contains("Reset Progress"), "missing reset in {html}");
    assert!(!html.contains("answer--correct"), "answer revealed early in {html}");

    let question = harness.quiz.snapshot().question.unwrap();
    for candidate in &question.candidates {
        assert!(html.contains(candidate.as_str()), "missing {candidate} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_marks_answers_after_selection() {
    let mut harness = setup_view_harness(false).await;
    let question = harness.quiz.snapshot().question.unwrap();
    let wrong = question
        .candidates
        .iter()
        .find(|c| **c != question.word)
        .unwrap()
        .clone();

    assert!(harness.quiz.select_answer(&wrong).await);
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("answer--correct"), "missing correct mark in {html}");
    assert!(html.contains("answer--wrong"), "missing wrong mark in {html}");
    assert!(html.contains("question__word"), "word not revealed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_smoke_renders_score_and_retry() {
    let mut harness = setup_view_harness(false).await;
    harness.answer(true).await;
    harness.answer(false).await;
    harness.answer(true).await;

    let html = harness.render();
    assert!(html.contains("Quiz Results"), "missing title in {html}");
    assert!(html.contains("You got 2 out of 3 correct!"), "missing score in {html}");
    assert!(html.contains("Retry Missed Words"), "missing retry in {html}");
    assert!(html.contains("Try All Words Again"), "missing retry all in {html}");
    assert!(html.contains("All-time: 1/1 correct"), "missing stats in {html}");
    assert!(html.contains("All-time: 0/1 correct"), "missing stats in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_smoke_hides_retry_missed_after_perfect_round() {
    let mut harness = setup_view_harness(false).await;
    for _ in 0..3 {
        harness.answer(true).await;
    }

    let html = harness.render();
    assert!(html.contains("You got 3 out of 3 correct!"), "missing score in {html}");
    assert!(!html.contains("Retry Missed Words"), "unexpected retry in {html}");
    assert!(html.contains("Try All Words Again"), "missing retry all in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn error_view_smoke_lists_flagged_words() {
    let mut harness = setup_view_harness(true).await;
    let html = harness.render();
    assert!(html.contains("Words with Problems"), "missing title in {html}");
    assert!(html.contains("No words flagged yet."), "missing empty note in {html}");
    assert!(html.contains("Back to Quiz"), "missing toggle in {html}");

    let word = harness.quiz.snapshot().question.unwrap().word;
    harness.quiz.mark_current_as_error().await;
    harness.quiz.mark_current_as_error().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains(word.as_str()), "missing {word} in {html}");
    assert!(html.contains("×2"), "missing count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reset_returns_to_first_question() {
    let mut harness = setup_view_harness(false).await;
    harness.answer(true).await;
    harness.quiz.reset_all().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "missing progress in {html}");
}
