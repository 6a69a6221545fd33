// src/utils/mod.rs
use log::info;

/// Installs the process-wide logger: `[LEVEL][target] message` on stderr.
pub fn setup_logging(level: log::LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    info!("Logging initialized at {}.", level);
    Ok(())
}
