use dioxus::prelude::*;

use spell_core::model::ErrorLog;

use crate::vm::map_error_rows;

#[component]
pub fn ErrorListView(log: ErrorLog) -> Element {
    let rows = map_error_rows(&log);
    let empty = rows.is_empty();

    rsx! {
        section { class: "errors",
            h2 { "Words with Problems" }
            if empty {
                p { class: "errors__empty", "No words flagged yet." }
            } else {
                ul { class: "errors__list",
                    for row in rows {
                        li { key: "{row.word}",
                            "{row.word}"
                            if let Some(count) = row.count_label.as_ref() {
                                span { class: "errors__count", " {count}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
