use dioxus::prelude::*;
use hunter_core::model::ChallengeId;

use crate::vm::{EditorVm, FeedbackVm, HintVm};

#[component]
pub fn EditorPanel(
    editor: EditorVm,
    on_input: Callback<String>,
    on_hint: Callback<ChallengeId>,
    on_submit: Callback<()>,
    on_menu: Callback<()>,
) -> Element {
    let challenge_id = ChallengeId::new(editor.challenge_id.clone());
    let locked = editor.locked;

    rsx! {
        section { class: "editor",
            div { class: "editor__info",
                button {
                    class: "btn btn--ghost",
                    r#type: "button",
                    onclick: move |_| on_menu.call(()),
                    "← Back to Menu"
                }
                div { class: "editor__heading",
                    span { class: "editor__icon", "{editor.category.icon}" }
                    h2 { "{editor.title}" }
                    span { class: editor.difficulty.class, "{editor.difficulty.label}" }
                    span { class: "editor__points", "{editor.points} pts" }
                }
                p { class: "editor__description", "{editor.description}" }
            }

            div { class: "editor__code",
                div { class: "editor__gutter",
                    for line in editor.lines.iter() {
                        div {
                            key: "{line.number}",
                            class: gutter_class(line.highlighted),
                            "{line.number}"
                        }
                    }
                }
                textarea {
                    class: "editor__textarea",
                    spellcheck: "false",
                    readonly: locked,
                    value: "{editor.draft}",
                    oninput: move |event| on_input.call(event.value()),
                }
            }

            div { class: "editor__actions",
                button {
                    class: "btn btn--secondary",
                    r#type: "button",
                    disabled: locked,
                    onclick: move |_| on_hint.call(challenge_id.clone()),
                    "💡 {editor.hint_button}"
                }
                button {
                    class: "btn btn--primary",
                    r#type: "button",
                    disabled: locked,
                    onclick: move |_| on_submit.call(()),
                    "▶ Run Code"
                }
            }

            if let Some(hint) = editor.hint.clone() {
                HintPanel { hint }
            }
            if let Some(feedback) = editor.feedback.clone() {
                FeedbackBanner { feedback }
            }
        }
    }
}

fn gutter_class(highlighted: bool) -> &'static str {
    if highlighted {
        "gutter-line gutter-line--highlighted"
    } else {
        "gutter-line"
    }
}

#[component]
pub fn HintPanel(hint: HintVm) -> Element {
    rsx! {
        div { class: "hint",
            span { class: "hint__label", "Hint {hint.position}/{hint.total}" }
            p { class: "hint__text", "{hint.text}" }
        }
    }
}

#[component]
pub fn FeedbackBanner(feedback: FeedbackVm) -> Element {
    rsx! {
        div { class: feedback.class(), role: "status",
            strong { "{feedback.title}" }
            p { "{feedback.message}" }
        }
    }
}
