//! Core drill engine: bank parsing, questions, sessions and reports.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: answer letters, bank records, questions |
//! | `shuffle`  | Fisher-Yates shuffle and sampling with an injected RNG |
//! | `parser`   | Three-state bank scanner and record decomposition |
//! | `question` | Shuffle-fixed construction, rendering, one-shot answering |
//! | `session`  | Sampling, the console answer loop, timing |
//! | `report`   | Report text and file output |
//! | `paths`    | Resource root and timestamped report paths |
//! | `helpers`  | Marker stripping and duration formatting |

pub mod helpers;
pub mod models;
pub mod parser;
pub mod paths;
pub mod question;
pub mod report;
pub mod session;
pub mod shuffle;

// Re-export the public API surface so callers can use
// `drill_engine::parse_bank` without reaching into sub-modules.
pub use models::{AnswerOption, AnsweredQuestion, BankRecord, Choice, Question};
pub use parser::{load_bank, parse_bank, parse_records, scan_blocks, Block, ScanState};
pub use paths::{report_path, resource_root};
pub use report::{render_report, write_report};
pub use session::{Session, SessionOutcome};
