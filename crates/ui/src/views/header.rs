use dioxus::prelude::*;

use crate::vm::HeaderVm;

#[component]
pub fn HeaderBar(header: HeaderVm) -> Element {
    rsx! {
        header { class: "game-header",
            div { class: "game-header__brand",
                span { class: "game-header__logo", "🐛" }
                div {
                    h1 { class: "game-header__title", "Bug Hunter" }
                    p { class: "game-header__subtitle", "The Debugging Quest" }
                }
            }
            div { class: "game-header__stats",
                span { class: "stat stat--score", "🏆 {header.score} points" }
                span { class: "stat stat--level", "Level {header.level}" }
                span { class: "stat stat--fixed", "{header.bugs_fixed} bugs fixed" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_shows_score_level_and_fixed_count() {
        let header = HeaderVm {
            score: 125,
            level: 1,
            bugs_fixed: 2,
            total: 32,
        };
        let html = dioxus_ssr::render_element(rsx! { HeaderBar { header } });
        assert!(html.contains("Bug Hunter"));
        assert!(html.contains("125 points"));
        assert!(html.contains("Level 1"));
        assert!(html.contains("2 bugs fixed"));
    }
}
