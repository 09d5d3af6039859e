//! Session runner: draw the questions, collect one valid answer per question
//! from a line-oriented console, and time the answering phase.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Duration, Local};
use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;

use crate::drill_engine::{
    helpers::format_duration,
    models::{AnsweredQuestion, Choice, Question},
    shuffle::draw_without_replacement,
};
use crate::error::DrillError;

pub const ANSWER_PROMPT: &str = "选项：";
pub const INVALID_INPUT_NOTICE: &str = "输入不正确，请重新输入选项";

/// The questions drawn for one run, in presentation order.
#[derive(Debug, Clone)]
pub struct Session {
    questions: Vec<Question>,
}

/// Everything the report needs once the last answer is in.
#[derive(Debug, Clone, Serialize)]
pub struct SessionOutcome {
    pub answered: Vec<AnsweredQuestion>,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
}

impl Session {
    /// Draw `n` distinct questions uniformly at random from `bank`.
    pub fn sample<R: Rng>(bank: Vec<Question>, n: usize, rng: &mut R) -> Result<Session, DrillError> {
        if bank.len() < n {
            return Err(DrillError::InsufficientBank { available: bank.len(), requested: n });
        }
        let available = bank.len();
        let questions = draw_without_replacement(bank, n, rng);
        info!("sampled {} of {} questions", questions.len(), available);
        Ok(Session { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Present every question on `output` and read answers from `input`,
    /// re-prompting on invalid input until a letter a-d arrives.
    ///
    /// Running out of input before the last answer is an error rather than a
    /// silent partial session.
    pub fn run<I: BufRead, W: Write>(self, mut input: I, mut output: W) -> Result<SessionOutcome, DrillError> {
        let total = self.questions.len();
        let started_at = Local::now();
        let mut answered = Vec::with_capacity(total);

        for (i, question) in self.questions.into_iter().enumerate() {
            writeln!(output, "\n[{}/{}] {}", i + 1, total, question.render())?;
            let choice = read_choice(&mut input, &mut output)?;
            debug!("question {} answered {}", question.id, choice);
            answered.push(question.answer(choice));
        }

        Ok(SessionOutcome { answered, started_at, finished_at: Local::now() })
    }
}

/// Prompt until one valid letter is read.
fn read_choice<I: BufRead, W: Write>(input: &mut I, output: &mut W) -> Result<Choice, DrillError> {
    let mut line = String::new();
    loop {
        write!(output, "{}", ANSWER_PROMPT)?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed before all questions were answered").into());
        }
        match Choice::from_input(&line) {
            Ok(choice) => return Ok(choice),
            Err(e) => {
                warn!("{}", e);
                writeln!(output, "{}", INVALID_INPUT_NOTICE)?;
            }
        }
    }
}

impl SessionOutcome {
    pub fn total(&self) -> usize {
        self.answered.len()
    }

    pub fn num_correct(&self) -> usize {
        num_correct(&self.answered)
    }

    pub fn duration(&self) -> Duration {
        self.finished_at - self.started_at
    }

    /// Elapsed time as shown in the report, e.g. `0:12:05`.
    pub fn duration_label(&self) -> String {
        format_duration(self.duration())
    }
}

pub fn num_correct(answered: &[AnsweredQuestion]) -> usize {
    answered.iter().filter(|q| q.is_correct).count()
}
