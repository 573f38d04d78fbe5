mod challenge_vm;
mod frame_vm;
mod progress_vm;
mod result_vm;

pub use challenge_vm::{
    BadgeStyle, CardState, CategoryStyle, ChallengeCardVm, category_style, difficulty_style,
    map_challenge_cards,
};
pub use frame_vm::{BodyVm, EditorVm, GameFrameVm, HintVm, LineVm, MenuVm};
pub use progress_vm::HeaderVm;
pub use result_vm::{CompletionVm, FeedbackVm};
