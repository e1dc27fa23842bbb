use dioxus::prelude::*;

use services::QuizSnapshot;

use crate::vm::{AnswerState, QuestionVm, letters, map_question};

use super::quiz::QuizIntent;

#[component]
pub fn QuestionView(
    snapshot: QuizSnapshot,
    highlight: Option<usize>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let Some(vm) = map_question(&snapshot) else {
        return rsx! {};
    };
    let QuestionVm {
        progress_label,
        revealed_word,
        answers,
        can_advance,
        next_label,
    } = vm;
    let revealed = revealed_word.map(|word| letters(&word, highlight));

    rsx! {
        section { class: "question",
            p { class: "question__progress", "{progress_label}" }
            h2 { class: "question__prompt", "Select the correct spelling:" }
            if let Some(spelled) = revealed {
                p { class: "question__word",
                    for (idx, letter) in spelled.into_iter().enumerate() {
                        span { key: "{idx}", class: letter.class(), "{letter.text}" }
                    }
                }
            }
            div { class: "question__answers",
                for answer in answers {
                    AnswerButton {
                        key: "{answer.label}",
                        label: answer.label.clone(),
                        state: answer.state,
                        on_intent: on_intent,
                    }
                }
            }
            div { class: "question__actions",
                button {
                    class: "question__next",
                    id: "next",
                    r#type: "button",
                    disabled: !can_advance,
                    onclick: move |_| on_intent.call(QuizIntent::Advance),
                    "{next_label}"
                }
                button {
                    class: "question__flag",
                    id: "mark-error",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::MarkError),
                    "Mark as Error"
                }
            }
        }
    }
}

#[component]
fn AnswerButton(label: String, state: AnswerState, on_intent: EventHandler<QuizIntent>) -> Element {
    let choice = label.clone();
    rsx! {
        button {
            class: state.class(),
            r#type: "button",
            disabled: state.disabled(),
            onclick: move |_| on_intent.call(QuizIntent::Select(choice.clone())),
            "{label}"
        }
    }
}
