use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{HIGHLIGHT_STEP, highlight_frames};

use super::error_list::ErrorListView;
use super::question::QuestionView;
use super::result::ResultView;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Everything the user can ask the quiz to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Advance,
    MarkError,
    Retry { missed_only: bool },
    ResetAll,
}

/// The single quiz window: global controls plus the question, result, or
/// error-list view.
///
/// Rendering follows the service's published snapshots; the only local
/// state is the error-list toggle and the letter highlight.
#[component]
pub fn QuizScreen(#[props(default)] show_errors: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();
    let snapshot = use_signal({
        let quiz = quiz.clone();
        move || quiz.snapshot()
    });
    let mut errors_open = use_signal(|| show_errors);
    let highlight = use_signal(|| None::<usize>);
    let highlight_task = use_signal(|| None::<Task>);

    {
        let quiz = quiz.clone();
        use_future(move || {
            let mut updates = quiz.subscribe();
            async move {
                let mut snapshot = snapshot;
                let latest = updates.borrow_and_update().clone();
                snapshot.set(latest);
                while updates.changed().await.is_ok() {
                    let latest = updates.borrow_and_update().clone();
                    snapshot.set(latest);
                }
            }
        });
    }

    let dispatch = use_callback(move |intent: QuizIntent| {
        let quiz = quiz.clone();
        if !matches!(intent, QuizIntent::Select(_) | QuizIntent::MarkError) {
            stop_highlight(highlight, highlight_task);
        }
        spawn(async move {
            match intent {
                QuizIntent::Select(candidate) => {
                    if !quiz.select_answer(&candidate).await {
                        return;
                    }
                    if let Some(question) = quiz.snapshot().question {
                        start_highlight(question.word, highlight, highlight_task);
                    }
                }
                QuizIntent::Advance => {
                    quiz.advance().await;
                }
                QuizIntent::MarkError => {
                    quiz.mark_current_as_error().await;
                }
                QuizIntent::Retry { missed_only } => quiz.retry(missed_only).await,
                QuizIntent::ResetAll => quiz.reset_all().await,
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, highlight, highlight_task);
            }
        }
    }

    let current = snapshot.read().clone();
    let toggle_label = if errors_open() {
        "Back to Quiz"
    } else {
        "View Errors"
    };

    let body = if errors_open() {
        rsx! { ErrorListView { log: current.error_log.clone() } }
    } else if let Some(results) = current.results.clone() {
        rsx! {
            ResultView {
                results,
                stats: current.word_stats.clone(),
                on_intent: dispatch,
            }
        }
    } else {
        rsx! {
            QuestionView {
                snapshot: current.clone(),
                highlight: highlight(),
                on_intent: dispatch,
            }
        }
    };

    rsx! {
        div { class: "quiz",
            header { class: "quiz__header",
                h1 { "Spelling Quiz" }
                div { class: "quiz__controls",
                    button {
                        class: "quiz__control",
                        id: "toggle-errors",
                        r#type: "button",
                        onclick: move |_| {
                            let open = errors_open();
                            errors_open.set(!open);
                        },
                        "{toggle_label}"
                    }
                    button {
                        class: "quiz__control quiz__control--danger",
                        id: "reset-progress",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::ResetAll),
                        "Reset Progress"
                    }
                }
            }
            {body}
        }
    }
}

fn stop_highlight(highlight: Signal<Option<usize>>, task: Signal<Option<Task>>) {
    let mut highlight = highlight;
    let mut task = task;
    let running = task.write().take();
    if let Some(running) = running {
        running.cancel();
    }
    highlight.set(None);
}

/// Walk the highlight across `word`, one letter per step, then clear it.
///
/// Any sequence still running is cancelled first.
fn start_highlight(word: String, highlight: Signal<Option<usize>>, task: Signal<Option<Task>>) {
    stop_highlight(highlight, task);
    let running = spawn(async move {
        let mut highlight = highlight;
        for idx in highlight_frames(&word) {
            highlight.set(Some(idx));
            tokio::time::sleep(HIGHLIGHT_STEP).await;
        }
        tokio::time::sleep(HIGHLIGHT_STEP).await;
        highlight.set(None);
    });
    let mut task = task;
    task.set(Some(running));
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    highlight: Rc<RefCell<Option<Signal<Option<usize>>>>>,
    highlight_task: Rc<RefCell<Option<Signal<Option<Task>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        highlight: Signal<Option<usize>>,
        highlight_task: Signal<Option<Task>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.highlight.borrow_mut() = Some(highlight);
        *self.highlight_task.borrow_mut() = Some(highlight_task);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn highlighted(&self) -> Option<usize> {
        let highlight = (*self.highlight.borrow()).expect("highlight registered");
        *highlight.peek()
    }

    pub(crate) fn highlight_running(&self) -> bool {
        let task = (*self.highlight_task.borrow()).expect("highlight task registered");
        task.peek().is_some()
    }
}
