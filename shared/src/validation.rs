use crate::models::CreateCommentRequest;

pub const MAX_COMMENT_LENGTH: usize = 500;
pub const MAX_AUTHOR_LENGTH: usize = 40;
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Comment cannot be empty")]
    EmptyComment,
    #[error("Comment exceeds maximum length of {MAX_COMMENT_LENGTH}")]
    CommentTooLong,
    #[error("Name exceeds maximum length of {MAX_AUTHOR_LENGTH}")]
    AuthorTooLong,
}

/// A comment request after trimming and defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidComment {
    pub author: String,
    pub body: String,
}

pub fn validate_comment_request(request: &CreateCommentRequest) -> Result<ValidComment, ValidationError> {
    let body = request.body.trim();
    if body.is_empty() { return Err(ValidationError::EmptyComment); }
    if body.chars().count() > MAX_COMMENT_LENGTH { return Err(ValidationError::CommentTooLong); }

    let author = request.author.as_deref().map(str::trim).unwrap_or_default();
    if author.chars().count() > MAX_AUTHOR_LENGTH { return Err(ValidationError::AuthorTooLong); }

    Ok(ValidComment {
        author: if author.is_empty() { ANONYMOUS_AUTHOR.to_string() } else { author.to_string() },
        body: body.to_string(),
    })
}
