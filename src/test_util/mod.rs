use tracing_subscriber::EnvFilter;

pub mod connection;
pub mod path;

pub use connection::MockConnection;
pub use path::MockPath;

pub fn setup_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
