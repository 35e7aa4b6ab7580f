use std::io;
use std::process::ExitCode;

use video_to_audio::action::cli::process_args;
use video_to_audio::models::conversion::ConversionOutcome;

fn main() -> io::Result<ExitCode> {
    let args: Vec<String> = std::env::args().collect();
    let outcome = process_args(args)?;
    log::info!("程式執行完成：{:?}", outcome);
    Ok(match outcome {
        ConversionOutcome::Converted { .. } | ConversionOutcome::Skipped { .. } => ExitCode::SUCCESS,
        ConversionOutcome::Failed { .. } | ConversionOutcome::Rejected(_) => ExitCode::FAILURE,
    })
}
