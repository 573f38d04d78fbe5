use services::{GameSession, Screen};

use super::challenge_vm::{
    BadgeStyle, CategoryStyle, ChallengeCardVm, category_style, difficulty_style,
    map_challenge_cards,
};
use super::progress_vm::HeaderVm;
use super::result_vm::{CompletionVm, FeedbackVm};

/// Everything the game view renders for one session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameFrameVm {
    pub header: HeaderVm,
    pub body: BodyVm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BodyVm {
    Menu(MenuVm),
    Playing(Box<EditorVm>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuVm {
    pub cards: Vec<ChallengeCardVm>,
    pub completed: usize,
    pub total: usize,
    pub score: u32,
    pub level: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineVm {
    pub number: u32,
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintVm {
    pub position: usize,
    pub total: usize,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorVm {
    pub challenge_id: String,
    pub title: String,
    pub description: String,
    pub category: CategoryStyle,
    pub difficulty: BadgeStyle,
    pub points: u32,
    pub draft: String,
    pub lines: Vec<LineVm>,
    pub hint_button: String,
    pub hint: Option<HintVm>,
    pub feedback: Option<FeedbackVm>,
    pub completion: Option<CompletionVm>,
    /// Editing is closed once the challenge has been passed.
    pub locked: bool,
}

impl GameFrameVm {
    #[must_use]
    pub fn from_session(session: &GameSession) -> Self {
        let header = HeaderVm::from(session.current_progress());

        let body = match session.screen() {
            Screen::Menu => BodyVm::Menu(menu_vm(session)),
            Screen::Playing(play) => match session.current_challenge() {
                Some(challenge) => {
                    let hint_count = challenge.hints().len();
                    let shown = play.hint_index().map_or(1, |index| (index + 2).min(hint_count));
                    let line_count = play.draft().lines().count().max(1);
                    let lines = (1..=line_count)
                        .map(|number| {
                            let number = u32::try_from(number).unwrap_or(u32::MAX);
                            LineVm {
                                number,
                                highlighted: challenge.is_line_highlighted(number),
                            }
                        })
                        .collect();
                    let hint = session.revealed_hint().map(|(index, text)| HintVm {
                        position: index + 1,
                        total: hint_count,
                        text: text.to_string(),
                    });
                    let completion = session
                        .overlay()
                        .map(|overlay| CompletionVm::new(overlay, challenge));

                    BodyVm::Playing(Box::new(EditorVm {
                        challenge_id: challenge.id().to_string(),
                        title: challenge.title().to_string(),
                        description: challenge.description().to_string(),
                        category: category_style(challenge.category()),
                        difficulty: difficulty_style(challenge.difficulty()),
                        points: challenge.points(),
                        draft: play.draft().to_string(),
                        lines,
                        hint_button: format!("Hint ({shown}/{hint_count})"),
                        hint,
                        feedback: session.feedback().map(|feedback| feedback.kind.into()),
                        locked: completion.is_some(),
                        completion,
                    }))
                }
                None => BodyVm::Menu(menu_vm(session)),
            },
        };

        Self { header, body }
    }
}

fn menu_vm(session: &GameSession) -> MenuVm {
    let snapshot = session.current_progress();
    MenuVm {
        cards: map_challenge_cards(&session.list_challenges()),
        completed: snapshot.bugs_fixed,
        total: snapshot.total_challenges,
        score: snapshot.score,
        level: snapshot.level,
    }
}
