use hunter_core::model::{Category, ChallengeId, Difficulty};
use services::ChallengeListItem;

/// Display attributes for a difficulty badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeStyle {
    pub label: &'static str,
    pub class: &'static str,
}

/// Display attributes for a challenge category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryStyle {
    pub icon: &'static str,
    pub label: &'static str,
}

#[must_use]
pub const fn difficulty_style(difficulty: Difficulty) -> BadgeStyle {
    match difficulty {
        Difficulty::Easy => BadgeStyle {
            label: "easy",
            class: "badge badge--easy",
        },
        Difficulty::Medium => BadgeStyle {
            label: "medium",
            class: "badge badge--medium",
        },
        Difficulty::Hard => BadgeStyle {
            label: "hard",
            class: "badge badge--hard",
        },
    }
}

#[must_use]
pub const fn category_style(category: Category) -> CategoryStyle {
    match category {
        Category::Syntax => CategoryStyle {
            icon: "🔍",
            label: "Syntax",
        },
        Category::Logic => CategoryStyle {
            icon: "🧠",
            label: "Logic",
        },
        Category::Optimization => CategoryStyle {
            icon: "⚡",
            label: "Optimization",
        },
        Category::Algorithm => CategoryStyle {
            icon: "🔄",
            label: "Algorithm",
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardState {
    Completed,
    Open,
    Locked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeCardVm {
    pub id: ChallengeId,
    pub title: String,
    pub description: String,
    pub category: CategoryStyle,
    pub difficulty: BadgeStyle,
    pub points: u32,
    pub state: CardState,
}

impl ChallengeCardVm {
    #[must_use]
    pub fn action_label(&self) -> &'static str {
        match self.state {
            CardState::Completed => "Replay",
            CardState::Open => "Start",
            CardState::Locked => "Locked",
        }
    }

    #[must_use]
    pub fn card_class(&self) -> &'static str {
        match self.state {
            CardState::Completed => "challenge-card challenge-card--completed",
            CardState::Open => "challenge-card challenge-card--open",
            CardState::Locked => "challenge-card challenge-card--locked",
        }
    }

    #[must_use]
    pub fn category_caption(&self) -> String {
        format!("{} Challenge", self.category.label)
    }

    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.state != CardState::Locked
    }
}

impl From<&ChallengeListItem<'_>> for ChallengeCardVm {
    fn from(item: &ChallengeListItem<'_>) -> Self {
        let challenge = item.challenge;
        let state = if item.completed {
            CardState::Completed
        } else if item.unlocked {
            CardState::Open
        } else {
            CardState::Locked
        };
        Self {
            id: challenge.id().clone(),
            title: challenge.title().to_string(),
            description: challenge.description().to_string(),
            category: category_style(challenge.category()),
            difficulty: difficulty_style(challenge.difficulty()),
            points: challenge.points(),
            state,
        }
    }
}

#[must_use]
pub fn map_challenge_cards(items: &[ChallengeListItem<'_>]) -> Vec<ChallengeCardVm> {
    items.iter().map(ChallengeCardVm::from).collect()
}
