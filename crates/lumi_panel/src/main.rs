mod platform;

use std::process::ExitCode;

use lumi_core::PanelPhase;

fn main() -> anyhow::Result<ExitCode> {
    let phase = platform::run_app()?;
    Ok(match phase {
        PanelPhase::Completed => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}
