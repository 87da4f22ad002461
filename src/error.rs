use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("tick scale `{scale_id}` is misconfigured: {reason}")]
    InvalidTickScale { scale_id: String, reason: String },

    #[error("unknown tick scale `{0}`")]
    UnknownTickScale(String),
}
