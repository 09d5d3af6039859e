use std::io;
use std::process::ExitCode;

use log::{debug, error};
use quiz_drill::{load_bank, report_path, resource_root, write_report, DrillConfig, DrillError, Session};

fn run(config: &DrillConfig) -> Result<(), DrillError> {
    let mut rng = config.rng();
    let root = resource_root(&config.bank_file);

    let bank = load_bank(&root.join(&config.bank_file), &mut rng)?;
    let session = Session::sample(bank, config.num_questions, &mut rng)?;

    let stdin = io::stdin();
    let outcome = session.run(stdin.lock(), io::stdout())?;

    let duration = outcome.duration_label();
    let path = report_path(&root, &config.results_dir, &outcome.finished_at);
    write_report(&outcome.answered, &duration, &path)?;

    if let Ok(json) = serde_json::to_string(&outcome) {
        debug!("session outcome: {json}");
    }
    println!(
        "结果：{}/{}, 耗时：{}, 详细记录已保存至 {}",
        outcome.num_correct(),
        outcome.total(),
        duration,
        path.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let config = DrillConfig::default();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
