//! Where the bank is read from and where reports go.

use std::env;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

/// Directory holding the bank file.
///
/// A packaged build ships the bank next to the executable; otherwise the
/// working directory is used.
pub fn resource_root(bank_file: &str) -> PathBuf {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match exe_dir {
        Some(dir) if dir.join(bank_file).is_file() => dir,
        _ => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// `<root>/<results_dir>/<YYYYMMDD-HHMMSS><results_dir>.txt`
pub fn report_path<Tz: TimeZone>(root: &Path, results_dir: &str, finished_at: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    let stamp = finished_at.format("%Y%m%d-%H%M%S");
    root.join(results_dir).join(format!("{stamp}{results_dir}.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn report_path_is_timestamped_under_results_dir() {
        let at = Utc.with_ymd_and_hms(2021, 10, 22, 9, 5, 7).unwrap();
        let path = report_path(Path::new("/base"), "做题记录", &at);
        assert_eq!(path, Path::new("/base/做题记录/20211022-090507做题记录.txt"));
    }

    #[test]
    fn resource_root_falls_back_to_working_dir() {
        let root = resource_root("definitely-not-shipped-next-to-the-test-binary.txt");
        assert_eq!(root, env::current_dir().unwrap());
    }
}
