//! Question-bank parser.
//!
//! The bank is a line-oriented text file. Each question is a block:
//!
//! ```text
//! [I]LK0501          identifier
//! [Q]Which ...?      prompt
//! [A]correct answer  option 0 (always the correct one)
//! [B]...             option 1
//! [C]...             option 2
//! [D]...             option 3
//! [P]                closes the block (not recorded)
//! ```
//!
//! Lines outside a block are ignored. Scanning is a three-state machine
//! (`ScanState`); a block that is not exactly six lines long, or that is
//! still open at end of input, is an error.

use std::fs;
use std::path::Path;

use log::{debug, info};
use rand::Rng;

use crate::drill_engine::{
    helpers::strip_marker,
    models::{AnswerOption, BankRecord, Question},
};
use crate::error::DrillError;

pub const OPEN_MARKER: &str = "[I]";
pub const CLOSE_MARKER: &str = "[P]";

/// Identifier + prompt + four options.
pub const BLOCK_LINES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Between blocks; the accumulator is empty.
    Idle,
    /// Inside a block; every line is recorded.
    Building,
    /// A `[P]` line closed the block; finalize it before the next line.
    Save,
}

impl ScanState {
    /// Transition on one input line.
    ///
    /// | from       | `[I]` line | `[P]` line | other    |
    /// |------------|------------|------------|----------|
    /// | `Idle`     | `Building` | `Idle`     | `Idle`   |
    /// | `Building` | `Building` | `Save`     | `Building` |
    /// | `Save`     | `Building` | `Idle`     | `Idle`   |
    ///
    /// Entering `Save` finalizes the block at once; the next line is then
    /// read exactly as from `Idle`.
    pub fn next(self, line: &str) -> ScanState {
        match self {
            ScanState::Idle if line.starts_with(OPEN_MARKER) => ScanState::Building,
            ScanState::Idle => ScanState::Idle,
            ScanState::Building if line.starts_with(CLOSE_MARKER) => ScanState::Save,
            ScanState::Building => ScanState::Building,
            ScanState::Save => ScanState::Idle.next(line),
        }
    }
}

/// Raw lines of one question, with the 1-based line number of its `[I]` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub start_line: usize,
    pub lines: Vec<String>,
}

impl Block {
    /// Decompose the block positionally into a [`BankRecord`].
    pub fn into_record(self) -> Result<BankRecord, DrillError> {
        if self.lines.len() != BLOCK_LINES {
            return Err(DrillError::MalformedBank { line: self.start_line, found: self.lines.len() });
        }
        let field = |i: usize| strip_marker(&self.lines[i]).to_string();
        let option = |i: usize| AnswerOption { is_correct: i == 0, text: field(i + 2) };
        Ok(BankRecord {
            id: field(0),
            prompt: field(1),
            options: [option(0), option(1), option(2), option(3)],
        })
    }
}

/// Split bank text into raw blocks.
pub fn scan_blocks(text: &str) -> Result<Vec<Block>, DrillError> {
    let mut blocks = Vec::new();
    let mut state = ScanState::Idle;
    let mut current = Block { start_line: 0, lines: Vec::new() };

    for (idx, line) in text.lines().enumerate() {
        let prev = state;
        state = state.next(line);
        match state {
            ScanState::Building => {
                if prev != ScanState::Building {
                    current.start_line = idx + 1;
                }
                current.lines.push(line.to_string());
            }
            ScanState::Save => {
                let block = std::mem::replace(&mut current, Block { start_line: 0, lines: Vec::new() });
                debug!("block at line {} closed with {} lines", block.start_line, block.lines.len());
                blocks.push(block);
            }
            ScanState::Idle => {}
        }
    }

    if state == ScanState::Building {
        return Err(DrillError::UnterminatedBlock { line: current.start_line });
    }
    Ok(blocks)
}

/// Parse bank text into records in file order. Deterministic: the same text
/// always yields the same records.
pub fn parse_records(text: &str) -> Result<Vec<BankRecord>, DrillError> {
    scan_blocks(text)?.into_iter().map(Block::into_record).collect()
}

/// Parse bank text into questions, each with its option order fixed by `rng`.
pub fn parse_bank<R: Rng>(text: &str, rng: &mut R) -> Result<Vec<Question>, DrillError> {
    let records = parse_records(text)?;
    records.into_iter().map(|r| Question::new(r, rng)).collect()
}

/// Read and parse the bank file at `path`.
pub fn load_bank<R: Rng>(path: &Path, rng: &mut R) -> Result<Vec<Question>, DrillError> {
    let text = fs::read_to_string(path).map_err(|e| DrillError::io(path, e))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let bank = parse_bank(text, rng)?;
    info!("loaded {} questions from {}", bank.len(), path.display());
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BANK: &str = "\
header line
[I]LK0001
[Q]2+2=?
[A]4
[B]3
[C]5
[D]6
[P]

[I]LK0002
[Q]Capital of France?
[A]Paris
[B]Lyon
[C]Nice
[D]Lille
[P]
";

    #[test]
    fn transitions_follow_the_table() {
        assert_eq!(ScanState::Idle.next("[I]x"), ScanState::Building);
        assert_eq!(ScanState::Idle.next("[P]"), ScanState::Idle);
        assert_eq!(ScanState::Idle.next("text"), ScanState::Idle);
        assert_eq!(ScanState::Building.next("[Q]x"), ScanState::Building);
        assert_eq!(ScanState::Building.next("[I]x"), ScanState::Building);
        assert_eq!(ScanState::Building.next("[P]"), ScanState::Save);
        assert_eq!(ScanState::Save.next("[I]y"), ScanState::Building);
        assert_eq!(ScanState::Save.next("blank"), ScanState::Idle);
    }

    #[test]
    fn scan_records_lines_between_markers() {
        let blocks = scan_blocks(BANK).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].start_line, 2);
        assert_eq!(blocks[0].lines.len(), 6);
        assert_eq!(blocks[0].lines[0], "[I]LK0001");
        assert_eq!(blocks[0].lines[5], "[D]6");
        assert_eq!(blocks[1].start_line, 10);
    }

    #[test]
    fn records_strip_markers_and_flag_first_option() {
        let records = parse_records(BANK).unwrap();
        assert_eq!(records[0].id, "LK0001");
        assert_eq!(records[0].prompt, "2+2=?");
        let texts: Vec<&str> = records[0].options.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts, ["4", "3", "5", "6"]);
        let flags: Vec<bool> = records[0].options.iter().map(|o| o.is_correct).collect();
        assert_eq!(flags, [true, false, false, false]);
        assert_eq!(records[1].options[0].text, "Paris");
    }

    #[test]
    fn crlf_line_endings_parse_the_same() {
        let crlf = BANK.replace('\n', "\r\n");
        assert_eq!(parse_records(&crlf).unwrap(), parse_records(BANK).unwrap());
    }

    #[test]
    fn wrong_option_count_is_malformed() {
        let text = "[I]X\n[Q]q\n[A]a\n[B]b\n[C]c\n[P]\n";
        match parse_records(text) {
            Err(DrillError::MalformedBank { line, found }) => {
                assert_eq!(line, 1);
                assert_eq!(found, 5);
            }
            other => panic!("expected MalformedBank, got {other:?}"),
        }
    }

    #[test]
    fn blank_line_inside_block_is_malformed() {
        let text = "[I]X\n[Q]q\n\n[A]a\n[B]b\n[C]c\n[D]d\n[P]\n";
        assert!(matches!(parse_records(text), Err(DrillError::MalformedBank { line: 1, found: 7 })));
    }

    #[test]
    fn block_opening_right_after_close_is_scanned() {
        let text = "[I]A1\n[Q]q1\n[A]a\n[B]b\n[C]c\n[D]d\n[P]\n[I]A2\n[Q]q2\n[A]a\n[B]b\n[C]c\n[D]d\n[P]\n";
        let blocks = scan_blocks(text).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].start_line, 8);
        assert_eq!(blocks[1].lines[0], "[I]A2");
        assert_eq!(parse_records(text).unwrap()[1].prompt, "q2");
    }

    #[test]
    fn nested_open_marker_is_accumulated_not_skipped() {
        let text = "[I]X\n[I]Y\n[Q]q\n[A]a\n[B]b\n[C]c\n[D]d\n[P]\n";
        let blocks = scan_blocks(text).unwrap();
        assert_eq!(blocks[0].lines.len(), 7);
        assert!(matches!(parse_records(text), Err(DrillError::MalformedBank { found: 7, .. })));
    }

    #[test]
    fn unterminated_trailing_block_is_an_error() {
        let text = format!("{BANK}[I]LK0003\n[Q]dangling\n");
        match scan_blocks(&text) {
            Err(DrillError::UnterminatedBlock { line }) => assert_eq!(line, 17),
            other => panic!("expected UnterminatedBlock, got {other:?}"),
        }
    }

    #[test]
    fn empty_text_yields_empty_bank() {
        assert!(parse_records("").unwrap().is_empty());
        assert!(parse_records("no markers here\n[P]\n").unwrap().is_empty());
    }

    #[test]
    fn parse_bank_is_deterministic_with_seed() {
        let a = parse_bank(BANK, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = parse_bank(BANK, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn load_bank_reports_missing_file_path() {
        let path = std::env::temp_dir().join("quiz_drill_missing_bank.txt");
        let _ = fs::remove_file(&path);
        match load_bank(&path, &mut StdRng::seed_from_u64(1)) {
            Err(DrillError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
