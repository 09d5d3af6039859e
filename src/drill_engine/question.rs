//! Question lifecycle: shuffle-fixed construction, rendering and the one-shot
//! answer transition.

use rand::Rng;

use crate::drill_engine::{
    models::{AnswerOption, AnsweredQuestion, BankRecord, Choice, Question},
    shuffle::shuffle_in_place,
};
use crate::error::DrillError;

/// Prompt followed by the four options labelled A-D in their current order.
fn render_options(prompt: &str, options: &[AnswerOption; 4]) -> String {
    format!(
        "问题：{}\nA. {}\nB. {}\nC. {}\nD. {}\n",
        prompt, options[0].text, options[1].text, options[2].text, options[3].text
    )
}

impl Question {
    /// Build a question from its bank record, shuffling the options once.
    /// The resulting order is fixed for the rest of the question's life.
    ///
    /// The record must mark exactly one option correct.
    pub fn new<R: Rng>(record: BankRecord, rng: &mut R) -> Result<Self, DrillError> {
        let BankRecord { id, prompt, mut options } = record;
        let found = options.iter().filter(|o| o.is_correct).count();
        if found != 1 {
            return Err(DrillError::CorrectOptionCount { id, found });
        }
        shuffle_in_place(&mut options, rng);
        let correct = Choice::ALL
            .into_iter()
            .zip(options.iter())
            .find_map(|(choice, o)| o.is_correct.then_some(choice))
            .ok_or_else(|| DrillError::CorrectOptionCount { id: id.clone(), found: 0 })?;
        Ok(Question { id, prompt, options, correct })
    }

    pub fn options(&self) -> &[AnswerOption; 4] {
        &self.options
    }

    pub fn render(&self) -> String {
        render_options(&self.prompt, &self.options)
    }

    /// Letter of the truly correct option in the shuffled order.
    pub fn correct_choice(&self) -> Choice {
        self.correct
    }

    /// Record the user's answer. Consumes the question, so it can only be
    /// answered once.
    pub fn answer(self, choice: Choice) -> AnsweredQuestion {
        let is_correct = self.options[choice.index()].is_correct;
        AnsweredQuestion {
            id: self.id,
            prompt: self.prompt,
            options: self.options,
            correct: self.correct,
            selected: choice,
            is_correct,
        }
    }
}

impl AnsweredQuestion {
    pub fn options(&self) -> &[AnswerOption; 4] {
        &self.options
    }

    pub fn render(&self) -> String {
        render_options(&self.prompt, &self.options)
    }

    pub fn correct_choice(&self) -> Choice {
        self.correct
    }

    /// The letter the user picked, or `None` when it was right.
    pub fn wrong_choice(&self) -> Option<Choice> {
        if self.is_correct {
            None
        } else {
            Some(self.selected)
        }
    }
}
