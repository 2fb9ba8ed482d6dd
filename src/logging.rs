use tracing::Level;

use crate::error::Result;

/// Installs a compact stderr subscriber at INFO.
///
/// stdout is reserved for the prediction report.
pub fn init_logging() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
