use checkup_portal::logger::*;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let logger = Logger::new_bootstrap();
    trace!("bootstrap trace log");
    debug!("bootstrap debug log");
    info!("bootstrap info log");

    let config = LogConfig {
        filter: "debug".to_string(),
    };
    logger.reload_from_config(&config)?;
    debug!(filter = %logger.current_filter()?, "application debug log");

    // Console facade: everything in development, only errors otherwise.
    for development in [true, false] {
        let console = ConsoleLogger::new(development, Arc::new(StdConsole));
        console.info(format_args!("development = {development}"));
        console.warn("warn line");
        console.debug("debug line");
        console.error("error line");
    }

    Ok(())
}
