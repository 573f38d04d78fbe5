use dioxus::prelude::*;
use hunter_core::model::ChallengeId;

use crate::vm::{ChallengeCardVm, MenuVm};

#[component]
pub fn MenuView(
    menu: MenuVm,
    on_select: Callback<ChallengeId>,
    on_reset: Callback<()>,
) -> Element {
    let mut confirm_reset = use_signal(|| false);

    rsx! {
        section { class: "menu",
            div { class: "menu__intro",
                h2 { "Select Your Mission" }
                p { "Choose a debugging challenge to test your skills" }
            }
            div { class: "menu__grid",
                for card in menu.cards.iter().cloned() {
                    ChallengeCard { key: "{card.id}", card, on_select }
                }
            }
            div { class: "menu__summary",
                h3 { "Progress Summary" }
                div { class: "menu__summary-stats",
                    div { class: "summary-stat",
                        span { class: "summary-stat__value", "{menu.completed}/{menu.total}" }
                        span { class: "summary-stat__label", "Challenges Completed" }
                    }
                    div { class: "summary-stat",
                        span { class: "summary-stat__value", "{menu.score}" }
                        span { class: "summary-stat__label", "Total Points" }
                    }
                    div { class: "summary-stat",
                        span { class: "summary-stat__value", "{menu.level}" }
                        span { class: "summary-stat__label", "Current Level" }
                    }
                }
                if confirm_reset() {
                    div { class: "menu__reset-confirm",
                        span { "Erase all progress?" }
                        button {
                            class: "btn btn--danger",
                            r#type: "button",
                            onclick: move |_| {
                                confirm_reset.set(false);
                                on_reset.call(());
                            },
                            "Reset"
                        }
                        button {
                            class: "btn btn--ghost",
                            r#type: "button",
                            onclick: move |_| confirm_reset.set(false),
                            "Cancel"
                        }
                    }
                } else {
                    button {
                        class: "btn btn--ghost menu__reset",
                        r#type: "button",
                        disabled: menu.completed == 0 && menu.score == 0,
                        onclick: move |_| confirm_reset.set(true),
                        "Reset Progress"
                    }
                }
            }
        }
    }
}

#[component]
fn ChallengeCard(card: ChallengeCardVm, on_select: Callback<ChallengeId>) -> Element {
    let selectable = card.is_selectable();
    let id = card.id.clone();

    rsx! {
        article { class: card.card_class(),
            div { class: "challenge-card__top",
                span { class: "challenge-card__icon", "{card.category.icon}" }
                span { class: card.difficulty.class, "{card.difficulty.label}" }
            }
            h3 { class: "challenge-card__title", "{card.title}" }
            span { class: "challenge-card__category", "{card.category_caption()}" }
            p { class: "challenge-card__description", "{card.description}" }
            div { class: "challenge-card__footer",
                span { class: "challenge-card__points", "{card.points} pts" }
                button {
                    class: "btn btn--primary",
                    r#type: "button",
                    disabled: !selectable,
                    onclick: move |_| {
                        if selectable {
                            on_select.call(id.clone());
                        }
                    },
                    "{card.action_label()}"
                }
            }
        }
    }
}
