use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the plaques crate.
pub type Result<T> = std::result::Result<T, PlaqueError>;

/// Errors surfaced by the compositing engine.
///
/// Layout and compositing never fail on their own; a degenerate layout is a
/// normal renders-nothing outcome. Everything here is either a
/// construction-time validation failure or an I/O-adjacent failure on the
/// printing path.
#[derive(Debug, Error)]
pub enum PlaqueError {
    #[error("cell character {0:?} must be exactly one column wide")]
    CharWidth(char),
    #[error("caption {caption:?} contains non single-column character {offender:?}")]
    CaptionWidth { caption: String, offender: char },
    #[error("logging failure: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
