use crate::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// Routes tracing output to `path`. The terminal stays in raw mode while a
/// game runs, so nothing is ever logged to stdout or stderr.
pub fn init(path: &Path) -> Result<(), Error>
{
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .finish()
        .try_init()?;
    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;

    // The global subscriber can only be installed once per test binary, so
    // both outcomes are checked in one test.
    #[test]
    fn writes_to_the_log_file_and_refuses_a_second_subscriber()
    {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capital-guessr.log");
        init(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("logging initialised"), "log was: {contents}");
        assert!(!contents.contains("\x1b["));

        let err = init(&dir.path().join("second.log")).unwrap_err();
        assert!(matches!(err, Error::Logging(_)));
        assert!(err.to_string().starts_with("failed to set up logging"));
    }

    #[test]
    fn unwritable_path_is_an_io_error()
    {
        let dir = tempfile::tempdir().unwrap();
        let err = init(&dir.path().join("missing").join("game.log")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
