//! # quiz_drill
//!
//! A terminal multiple-choice drill over a flat-file question bank.
//!
//! ## How it works
//!
//! 1. [`load_bank`] reads the bank file and scans it block by block. Each
//!    block (`[I]` identifier, `[Q]` prompt, four options, closing `[P]`)
//!    becomes a [`Question`] whose options are shuffled once and then fixed.
//! 2. [`Session::sample`] draws `N` distinct questions at random.
//! 3. [`Session::run`] presents them one at a time, re-prompting until a
//!    letter `a`-`d` is entered, and consumes each question into an
//!    [`AnsweredQuestion`].
//! 4. [`write_report`] stores the score, the wrong answers and the right
//!    answers in a timestamped text file.
//!
//! ## Key features
//!
//! - **Deterministic**: every random step takes an explicit RNG, so
//!   `StdRng::seed_from_u64` reproduces a whole run.
//! - **One-shot answers**: `Question::answer` takes `self`, so a question
//!   cannot be answered twice.
//!
//! ## Quick start
//!
//! ```rust
//! use quiz_drill::{parse_bank, render_report, Session};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let bank_text = "[I]Q1\n[Q]2+2=?\n[A]4\n[B]3\n[C]5\n[D]6\n[P]\n";
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let bank = parse_bank(bank_text, &mut rng).unwrap();
//! let correct = bank[0].correct_choice();
//! let session = Session::sample(bank, 1, &mut rng).unwrap();
//!
//! let input = format!("{correct}\n");
//! let outcome = session.run(input.as_bytes(), std::io::sink()).unwrap();
//! let report = render_report(&outcome.answered, &outcome.duration_label());
//! assert!(report.starts_with("结果：1/1"));
//! ```

pub mod config;
pub mod drill_engine;
pub mod error;

// Convenience re-exports so callers can use `quiz_drill::parse_bank`
// directly without reaching into `drill_engine::`.
pub use config::DrillConfig;
pub use drill_engine::{
    load_bank, parse_bank, parse_records, render_report, report_path, resource_root,
    write_report, AnswerOption, AnsweredQuestion, BankRecord, Choice, Question, Session,
    SessionOutcome,
};
pub use error::{DrillError, InvalidAnswerInput};
