use wordhoard_device::commands::activity::activity_summary;
use wordhoard_device::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    wordhoard_device::init_tracing(&config.log_filter);

    let state = wordhoard_device::open(&config)?;
    let summary = activity_summary(&state)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
