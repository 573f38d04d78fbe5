#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use hunter_core::model::ChallengeId;
use services::{FAILURE_BANNER_DELAY, GameSession, SUCCESS_OVERLAY_DELAY};
use tracing::warn;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{BodyVm, GameFrameVm};

use super::completion::CompletionModal;
use super::editor::EditorPanel;
use super::header::HeaderBar;
use super::menu::MenuView;

const SAVE_FAILED: &str = "Progress could not be saved. Your score is kept for this session.";
const RESET_FAILED: &str = "Saved progress could not be cleared.";

/// Top-level game screen: header plus either the menu or the editor.
///
/// The session lives in a signal and is only mutated synchronously; storage
/// writes run afterwards on a snapshot, so nothing is written back over
/// later state changes.
#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_signal(|| None::<GameSession>);
    // Attempt whose completion modal has been revealed.
    let mut revealed = use_signal(|| None::<u64>);
    let mut notice = use_signal(|| None::<&'static str>);

    let resource = use_resource(move || {
        let ctx = ctx.clone();
        async move {
            let loaded = ctx.start_session().await;
            if session.peek().is_none() {
                session.set(Some(loaded));
            }
            Ok::<_, ViewError>(())
        }
    });

    let on_select = use_callback(move |id: ChallengeId| {
        session.with_mut(|current| {
            if let Some(current) = current
                && let Err(err) = current.select_challenge(&id)
            {
                warn!(%err, "challenge selection rejected");
            }
        });
    });

    let on_input = use_callback(move |text: String| {
        session.with_mut(|current| {
            if let Some(current) = current
                && let Err(err) = current.update_draft(text)
            {
                warn!(%err, "draft update ignored");
            }
        });
    });

    let on_hint = use_callback(move |id: ChallengeId| {
        session.with_mut(|current| {
            if let Some(current) = current
                && let Err(err) = current.request_hint(&id)
            {
                warn!(%err, "hint request ignored");
            }
        });
    });

    let on_submit = use_callback(move |()| {
        // Judge and award on the live session; only the storage write is awaited.
        let recorded = session.with_mut(|current| {
            let current = current.as_mut()?;
            let text = current.draft()?.to_string();
            Some(current.record_attempt(&text).map(|recorded| {
                (recorded, current.progress().clone(), current.progress_store())
            }))
        });
        let (recorded, snapshot, store) = match recorded {
            Some(Ok(recorded)) => recorded,
            Some(Err(err)) => {
                warn!(%err, "submission ignored");
                return;
            }
            None => return,
        };

        spawn(async move {
            if recorded.needs_save() && store.save(&snapshot).await.is_err() {
                notice.set(Some(SAVE_FAILED));
            }

            if recorded.passed() {
                tokio::time::sleep(SUCCESS_OVERLAY_DELAY).await;
                revealed.set(Some(recorded.attempt));
            } else {
                tokio::time::sleep(FAILURE_BANNER_DELAY).await;
                session.with_mut(|current| {
                    if let Some(current) = current {
                        current.clear_feedback(recorded.attempt);
                    }
                });
            }
        });
    });

    let on_next = use_callback(move |()| {
        session.with_mut(|current| {
            if let Some(current) = current
                && let Err(err) = current.advance_to_next()
            {
                warn!(%err, "advance ignored");
            }
        });
    });

    let on_menu = use_callback(move |()| {
        revealed.set(None);
        session.with_mut(|current| {
            if let Some(current) = current {
                current.return_to_menu();
            }
        });
    });

    let on_reset = use_callback(move |()| {
        let store = session.with_mut(|current| {
            current.as_mut().map(|current| {
                current.reset_in_memory();
                current.progress_store()
            })
        });
        let Some(store) = store else {
            return;
        };
        revealed.set(None);
        spawn(async move {
            match store.clear().await {
                Ok(()) => notice.set(None),
                Err(err) => {
                    warn!(%err, "progress reset incomplete");
                    notice.set(Some(RESET_FAILED));
                }
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<GameTestHandles>() {
                handles.register(GameActions {
                    select: on_select,
                    input: on_input,
                    submit: on_submit,
                    menu: on_menu,
                    reset: on_reset,
                });
            }
        }
    }

    let frame = session.read().as_ref().map(|current| {
        let mut frame = GameFrameVm::from_session(current);
        let shown = current
            .feedback()
            .is_some_and(|feedback| revealed() == Some(feedback.attempt));
        if let BodyVm::Playing(editor) = &mut frame.body
            && !shown
        {
            editor.completion = None;
        }
        frame
    });

    let Some(frame) = frame else {
        let message = match view_state_from_resource(&resource) {
            ViewState::Error(err) => err.message(),
            ViewState::Idle | ViewState::Loading | ViewState::Ready(_) => "Loading...",
        };
        return rsx! {
            div { class: "page page--loading",
                p { "{message}" }
            }
        };
    };

    rsx! {
        div { class: "page page--game",
            HeaderBar { header: frame.header }
            if let Some(text) = notice() {
                div { class: "notice", role: "alert",
                    span { "{text}" }
                    button {
                        class: "btn btn--ghost",
                        r#type: "button",
                        onclick: move |_| notice.set(None),
                        "Dismiss"
                    }
                }
            }
            match frame.body {
                BodyVm::Menu(menu) => rsx! {
                    MenuView { menu, on_select, on_reset }
                },
                BodyVm::Playing(editor) => {
                    let completion = editor.completion.clone();
                    rsx! {
                        EditorPanel {
                            editor: *editor,
                            on_input,
                            on_hint,
                            on_submit,
                            on_menu,
                        }
                        if let Some(completion) = completion {
                            CompletionModal { completion, on_next, on_menu }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Copy)]
pub(crate) struct GameActions {
    pub(crate) select: Callback<ChallengeId>,
    pub(crate) input: Callback<String>,
    pub(crate) submit: Callback<()>,
    pub(crate) menu: Callback<()>,
    pub(crate) reset: Callback<()>,
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GameTestHandles {
    actions: Rc<RefCell<Option<GameActions>>>,
}

#[cfg(test)]
impl GameTestHandles {
    pub(crate) fn register(&self, actions: GameActions) {
        *self.actions.borrow_mut() = Some(actions);
    }

    pub(crate) fn actions(&self) -> GameActions {
        (*self.actions.borrow()).expect("game actions registered")
    }
}
