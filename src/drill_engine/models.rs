use std::fmt;
use serde::{Deserialize, Serialize};

use crate::error::InvalidAnswerInput;

// ---------------------------------------------------------------------------
// Answer letters
// ---------------------------------------------------------------------------

/// One of the four answer letters, mapped to option index 0..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    pub const ALL: [Choice; 4] = [Choice::A, Choice::B, Choice::C, Choice::D];

    pub fn index(self) -> usize {
        match self {
            Choice::A => 0,
            Choice::B => 1,
            Choice::C => 2,
            Choice::D => 3,
        }
    }

    /// Inverse of [`Choice::index`]; `None` past the fourth option.
    pub fn from_index(index: usize) -> Option<Choice> {
        Choice::ALL.get(index).copied()
    }

    /// Parse one line of user input: trimmed, case-insensitive, exactly one
    /// of `a`..`d`.
    pub fn from_input(raw: &str) -> Result<Choice, InvalidAnswerInput> {
        let token = raw.trim().to_lowercase();
        match token.as_str() {
            "a" => Ok(Choice::A),
            "b" => Ok(Choice::B),
            "c" => Ok(Choice::C),
            "d" => Ok(Choice::D),
            _   => Err(InvalidAnswerInput(token)),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Choice::A => "A",
            Choice::B => "B",
            Choice::C => "C",
            Choice::D => "D",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Bank records and questions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub is_correct: bool,
    pub text: String,
}

/// One question exactly as it appears in the bank file, options in file
/// order. The first option is the correct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankRecord {
    pub id: String,
    pub prompt: String,
    pub options: [AnswerOption; 4],
}

/// An unanswered question. `options` is in shuffle-fixed order, set once by
/// `Question::new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub(crate) options: [AnswerOption; 4],
    pub(crate) correct: Choice,
}

/// A question after the user's single answer. Only obtainable by consuming
/// a [`Question`] through `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnsweredQuestion {
    pub id: String,
    pub prompt: String,
    pub(crate) options: [AnswerOption; 4],
    pub(crate) correct: Choice,
    pub selected: Choice,
    pub is_correct: bool,
}
