use crate::dictionary::DictionaryError;
use crate::quiz::session::QuizError;
use derive_more::{Display, Error, From};
use tracing_subscriber::util::TryInitError;

#[derive(Debug, Display, Error, From)]
pub enum Error
{
    #[display("I/O error: {_0}")]
    Io(std::io::Error),
    #[display("{_0}")]
    Dictionary(DictionaryError),
    #[display("{_0}")]
    Quiz(QuizError),
    #[display("failed to set up logging: {_0}")]
    Logging(TryInitError),
}
