mod completion;
mod editor;
mod game;
mod header;
mod menu;
mod state;

#[cfg(test)]
mod test_harness;

pub use completion::CompletionModal;
pub use editor::{EditorPanel, FeedbackBanner, HintPanel};
pub use game::GameView;
pub use header::HeaderBar;
pub use menu::MenuView;
pub use state::{ViewError, ViewState, view_state_from_resource};
