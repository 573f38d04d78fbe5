use dioxus::prelude::*;

use crate::vm::CompletionVm;

#[component]
pub fn CompletionModal(
    completion: CompletionVm,
    on_next: Callback<()>,
    on_menu: Callback<()>,
) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog",
                h2 { "Bug Eliminated! 🎉" }
                p { "{completion.summary()}" }
                div { class: "modal__reward", "{completion.reward}" }
                div { class: "modal__explanation",
                    h3 { "What You Learned:" }
                    p { "{completion.explanation}" }
                }
                div { class: "modal__actions",
                    button {
                        class: "btn btn--ghost",
                        r#type: "button",
                        onclick: move |_| on_menu.call(()),
                        "Back to Menu"
                    }
                    if completion.show_next {
                        button {
                            class: "btn btn--primary",
                            r#type: "button",
                            onclick: move |_| on_next.call(()),
                            "Next Challenge"
                        }
                    }
                    if completion.catalog_complete {
                        div { class: "modal__trophy",
                            h3 { "🏆 All Challenges Complete!" }
                            p { "You've mastered all debugging challenges. Great work, Bug Hunter!" }
                        }
                    }
                }
            }
        }
    }
}
