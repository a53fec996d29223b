// Binary entry point - resolves inputs, runs the pipeline, reports the
// outcome in GitHub Actions annotation form. Exit code 1 on spelling
// violations or unexpected errors; skips, config absence and fetch
// failures are never failures on their own.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pr_title_spellcheck::{
    resolve_title, run, ActionInputs, PipelineConfig, RunInputs, RunOutcome, WordlistChecker,
};

fn fail(message: &str) -> ExitCode {
    // Mirrors @actions/core setFailed: one descriptive line, no backtrace.
    println!("::error::{}", message);
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let inputs = ActionInputs::parse();
    let event_path = std::env::var_os("GITHUB_EVENT_PATH").map(PathBuf::from);

    let title = match resolve_title(&inputs, event_path.as_deref()) {
        Ok(title) => title,
        Err(e) => return fail(&e.to_string()),
    };

    let run_inputs = RunInputs {
        title,
        spelling_file_url: inputs.spelling_file_url,
        spelling_list: inputs.spelling_list,
        validate_visible_sections_only: inputs.validate_visible_sections_only,
    };

    match run(&run_inputs, &PipelineConfig::default(), &WordlistChecker::new()).await {
        Ok(RunOutcome::Skipped) | Ok(RunOutcome::Clean) => ExitCode::SUCCESS,
        Ok(RunOutcome::Violations { report, .. }) => fail(&report),
        Err(e) => fail(&e.to_string()),
    }
}
