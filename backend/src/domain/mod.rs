//! Domain primitives, aggregates, and services.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers, the board service over them, and the ports that
//! decouple the domain from transport and storage. Keep types immutable
//! and document invariants in each type's Rustdoc.

pub mod ports;

mod board_service;
mod content;
mod error;
mod like;
mod question;
mod reply;

pub use self::board_service::QuestionBoard;
pub use self::content::{
    CommunityEvent, CrisisLine, EventKind, ResourceCollection, ResourceLink,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::like::{AnonymousToken, LikeRecord, TokenValidationError};
pub use self::question::{
    BODY_MAX, Category, CategoryParseError, Question, QuestionDraft, QuestionValidationError,
    TITLE_MAX,
};
pub use self::reply::{REPLY_MAX, Reply, ReplyDraft, ReplyValidationError};

/// Convenient result alias for code returning domain errors.
///
/// # Examples
/// ```
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<u32> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
