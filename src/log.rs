use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber, honouring `RUST_LOG` and defaulting to `info`
///
/// Calling this again once a subscriber is installed does nothing.
pub fn init()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}

pub trait ProjectError: std::error::Error
{
    fn title(&self) -> String;

    /// Function for default handling an error
    ///
    /// Reports the error and its chain of sources through the log
    fn handle(&self)
    {
        tracing::error!("[{} Error] {}", self.title(), self);
        let mut source = self.source();
        while let Some(cause) = source {
            tracing::error!("  caused by: {}", cause);
            source = cause.source();
        }
    }
}
