//! Plain-text session report: score summary, then wrong answers, then right
//! answers, each section in session order.

use std::fs;
use std::path::Path;

use log::info;

use crate::drill_engine::{models::AnsweredQuestion, session::num_correct};
use crate::error::DrillError;

const WRONG_HEADER: &str = "\n====错题记录============================================\n";
const RIGHT_HEADER: &str = "\n\n====正解记录============================================\n";

fn push_entry(buf: &mut String, q: &AnsweredQuestion) {
    buf.push('\n');
    buf.push_str(&q.render());
    buf.push_str(&format!("\n你的选项：{}\t正确选项：{}\n\n", q.selected, q.correct_choice()));
}

/// Build the report text for `answered` with the elapsed-time label `duration`.
pub fn render_report(answered: &[AnsweredQuestion], duration: &str) -> String {
    let mut buf = format!("结果：{}/{}，耗时：{}\n", num_correct(answered), answered.len(), duration);

    buf.push_str(WRONG_HEADER);
    for q in answered.iter().filter(|q| !q.is_correct) {
        push_entry(&mut buf, q);
    }

    buf.push_str(RIGHT_HEADER);
    for q in answered.iter().filter(|q| q.is_correct) {
        push_entry(&mut buf, q);
    }
    buf
}

/// Write the report to `path`, creating its parent directory if missing.
///
/// Only the immediate parent is created; a missing grandparent is an error.
pub fn write_report(answered: &[AnsweredQuestion], duration: &str, path: &Path) -> Result<(), DrillError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir(parent).map_err(|e| DrillError::io(parent, e))?;
        }
    }
    fs::write(path, render_report(answered, duration)).map_err(|e| DrillError::io(path, e))?;
    info!("report written to {}", path.display());
    Ok(())
}
