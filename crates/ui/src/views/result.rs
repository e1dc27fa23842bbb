use dioxus::prelude::*;

use spell_core::model::{QuizResults, StatsBook};

use crate::vm::{ResultVm, map_results};

use super::quiz::QuizIntent;

#[component]
pub fn ResultView(
    results: QuizResults,
    stats: StatsBook,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let ResultVm {
        headline,
        rows,
        can_retry_missed,
    } = map_results(&results, &stats);

    rsx! {
        section { class: "results",
            h2 { "Quiz Results" }
            p { class: "results__headline", "{headline}" }
            ul { class: "results__list",
                for row in rows {
                    li { key: "{row.word}", class: row.class(),
                        span { class: "result-row__mark", "{row.mark}" }
                        span { class: "result-row__word", "{row.word}" }
                        if let Some(label) = row.all_time_label.as_ref() {
                            span { class: "result-row__stats", "{label}" }
                        }
                    }
                }
            }
            div { class: "results__actions",
                if can_retry_missed {
                    button {
                        class: "results__cta",
                        id: "retry-missed",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Retry { missed_only: true }),
                        "Retry Missed Words"
                    }
                }
                button {
                    class: "results__cta results__cta--secondary",
                    id: "retry-all",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Retry { missed_only: false }),
                    "Try All Words Again"
                }
            }
        }
    }
}
