use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::ChallengeId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChallengeError {
    #[error("challenge id cannot be empty")]
    EmptyId,

    #[error("challenge {id} has an empty title")]
    EmptyTitle { id: ChallengeId },

    #[error("challenge {id} must be worth more than 0 points")]
    ZeroPoints { id: ChallengeId },

    #[error("challenge {id} needs at least one hint")]
    NoHints { id: ChallengeId },

    #[error("challenge {id} highlights line 0 (lines are 1-based)")]
    InvalidHighlightedLine { id: ChallengeId },
}

//
// ─── TAGS ──────────────────────────────────────────────────────────────────────
//

/// Kind of bug a challenge exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Syntax,
    Logic,
    Optimization,
    Algorithm,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Syntax,
        Category::Logic,
        Category::Optimization,
        Category::Algorithm,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Syntax => "syntax",
            Category::Logic => "logic",
            Category::Optimization => "optimization",
            Category::Algorithm => "algorithm",
        }
    }
}

/// Difficulty tier. Catalog order walks these from easy to hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

//
// ─── CHALLENGE ─────────────────────────────────────────────────────────────────
//

/// Unvalidated challenge record, as stored in catalog data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeDraft {
    pub id: ChallengeId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub buggy_code: String,
    pub correct_code: String,
    pub hints: Vec<String>,
    pub explanation: String,
    pub points: u32,
    #[serde(default)]
    pub highlighted_lines: Vec<u32>,
}

impl ChallengeDraft {
    /// Validate the draft into an immutable `Challenge`.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError` if the id or title is blank, the reward is zero,
    /// there are no hints, or a highlighted line number is 0.
    pub fn validate(self) -> Result<Challenge, ChallengeError> {
        if self.id.as_str().trim().is_empty() {
            return Err(ChallengeError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(ChallengeError::EmptyTitle { id: self.id });
        }
        if self.points == 0 {
            return Err(ChallengeError::ZeroPoints { id: self.id });
        }
        if self.hints.is_empty() {
            return Err(ChallengeError::NoHints { id: self.id });
        }
        if self.highlighted_lines.contains(&0) {
            return Err(ChallengeError::InvalidHighlightedLine { id: self.id });
        }

        let mut highlighted_lines = self.highlighted_lines;
        highlighted_lines.sort_unstable();
        highlighted_lines.dedup();

        Ok(Challenge {
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category,
            difficulty: self.difficulty,
            buggy_code: self.buggy_code,
            correct_code: self.correct_code,
            hints: self.hints,
            explanation: self.explanation,
            points: self.points,
            highlighted_lines,
        })
    }
}

/// One buggy-code exercise with a single canonical fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    id: ChallengeId,
    title: String,
    description: String,
    category: Category,
    difficulty: Difficulty,
    buggy_code: String,
    correct_code: String,
    hints: Vec<String>,
    explanation: String,
    points: u32,
    highlighted_lines: Vec<u32>,
}

impl Challenge {
    #[must_use]
    pub fn id(&self) -> &ChallengeId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn buggy_code(&self) -> &str {
        &self.buggy_code
    }

    #[must_use]
    pub fn correct_code(&self) -> &str {
        &self.correct_code
    }

    #[must_use]
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Hint at `index`, if the challenge has that many.
    #[must_use]
    pub fn hint(&self, index: usize) -> Option<&str> {
        self.hints.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// 1-based line numbers to emphasise in the editor, sorted and unique.
    #[must_use]
    pub fn highlighted_lines(&self) -> &[u32] {
        &self.highlighted_lines
    }

    #[must_use]
    pub fn is_line_highlighted(&self, line: u32) -> bool {
        self.highlighted_lines.binary_search(&line).is_ok()
    }
}

#[cfg(test)]
pub(crate) fn draft(id: &str, points: u32) -> ChallengeDraft {
    ChallengeDraft {
        id: ChallengeId::new(id),
        title: format!("Challenge {id}"),
        description: "Fix it.".to_string(),
        category: Category::Syntax,
        difficulty: Difficulty::Easy,
        buggy_code: "let x = 1".to_string(),
        correct_code: "let x = 1;".to_string(),
        hints: vec!["Look at the end of the line".to_string()],
        explanation: "Statements end with a semicolon.".to_string(),
        points,
        highlighted_lines: vec![1],
    }
}
