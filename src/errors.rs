use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while extracting a track
#[derive(Debug)]
pub enum DashtrackError {
    Demux(DemuxError),
    Track(TrackError),
    Other(io::Error),
}

/// Errors acquiring the subtitle timestamps or the raw subtitle stream
#[derive(Debug)]
pub struct DemuxError {
    pub message: String,
}

impl DemuxError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors emitting the final track log
#[derive(Debug)]
pub struct TrackError {
    pub message: String,
}

impl TrackError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for DashtrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashtrackError::Demux(err) => write!(f, "Demux error: {}", err),
            DashtrackError::Track(err) => write!(f, "Track error: {}", err),
            DashtrackError::Other(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl fmt::Display for DemuxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for DashtrackError {}
impl Error for DemuxError {}
impl Error for TrackError {}

// Conversion implementations
impl From<io::Error> for DashtrackError {
    fn from(err: io::Error) -> Self {
        DashtrackError::Other(err)
    }
}

impl From<DemuxError> for DashtrackError {
    fn from(err: DemuxError) -> Self {
        DashtrackError::Demux(err)
    }
}

impl From<TrackError> for DashtrackError {
    fn from(err: TrackError) -> Self {
        DashtrackError::Track(err)
    }
}

// Conversion to io::Error for backward compatibility
impl From<DashtrackError> for io::Error {
    fn from(err: DashtrackError) -> Self {
        io::Error::other(err)
    }
}

impl From<DemuxError> for io::Error {
    fn from(err: DemuxError) -> Self {
        io::Error::other(err)
    }
}

impl From<TrackError> for io::Error {
    fn from(err: TrackError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with DashtrackError
pub type DashtrackResult<T> = Result<T, DashtrackError>;
