//! Typed outcomes returned by handlers and pipeline stages.
//!
//! Expected business conditions are values, not errors: a handler returns
//! `Outcome::Errors` for a duplicate name or a failed validation, and keeps
//! `Err(DomainError)` for faults it did not anticipate.

/// Category of a business error. Determines the HTTP status it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic business failure with no more specific category.
    Failure,
    /// Something unexpected, reported as a value rather than a fault.
    Unexpected,
    /// A field-level input rule was broken.
    Validation,
    /// The request conflicts with existing state (e.g. a duplicate key).
    Conflict,
    /// A referenced resource does not exist.
    NotFound,
    /// The caller is not authenticated.
    Unauthorized,
    /// The caller is authenticated but not allowed.
    Forbidden,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Failure => "Failure",
            ErrorKind::Unexpected => "Unexpected",
            ErrorKind::Validation => "Validation",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
        };
        f.write_str(name)
    }
}

/// A single business error: a kind, a stable machine-readable code and a
/// human-readable description.
///
/// For validation errors the code is the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    code: String,
    description: String,
}

impl Error {
    /// Creates an error of the given kind.
    pub fn new(kind: ErrorKind, code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            description: description.into(),
        }
    }

    pub fn validation(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, code, description)
    }

    pub fn conflict(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, code, description)
    }

    pub fn not_found(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, code, description)
    }

    pub fn unauthorized(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, code, description)
    }

    pub fn forbidden(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, code, description)
    }

    pub fn failure(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::Failure, code, description)
    }

    pub fn unexpected(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, code, description)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.code, self.kind, self.description)
    }
}

/// Result of dispatching a command: either the response or a list of errors.
///
/// Always constructed explicitly through [`Outcome::success`],
/// [`Outcome::error`] or [`Outcome::errors`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Errors(Vec<Error>),
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    pub fn error(error: Error) -> Self {
        Outcome::Errors(vec![error])
    }

    pub fn errors(errors: Vec<Error>) -> Self {
        Outcome::Errors(errors)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns the errors; empty on success.
    pub fn error_list(&self) -> &[Error] {
        match self {
            Outcome::Success(_) => &[],
            Outcome::Errors(errors) => errors,
        }
    }

    pub fn first_error(&self) -> Option<&Error> {
        self.error_list().first()
    }

    pub fn into_result(self) -> Result<T, Vec<Error>> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Errors(errors) => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        assert_eq!(Error::validation("name", "x").kind(), ErrorKind::Validation);
        assert_eq!(Error::conflict("c", "x").kind(), ErrorKind::Conflict);
        assert_eq!(Error::not_found("c", "x").kind(), ErrorKind::NotFound);
        assert_eq!(Error::unauthorized("c", "x").kind(), ErrorKind::Unauthorized);
        assert_eq!(Error::forbidden("c", "x").kind(), ErrorKind::Forbidden);
        assert_eq!(Error::failure("c", "x").kind(), ErrorKind::Failure);
        assert_eq!(Error::unexpected("c", "x").kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn success_has_no_errors() {
        let outcome = Outcome::success(7);
        assert!(outcome.is_success());
        assert!(outcome.error_list().is_empty());
        assert!(outcome.first_error().is_none());
    }

    #[test]
    fn errors_keep_order() {
        let outcome: Outcome<()> = Outcome::errors(vec![
            Error::validation("name", "first"),
            Error::validation("price", "second"),
        ]);
        assert!(!outcome.is_success());
        assert_eq!(outcome.first_error().unwrap().description(), "first");
        assert_eq!(outcome.error_list().len(), 2);
    }

    #[test]
    fn into_result_splits_variants() {
        assert_eq!(Outcome::success("ok").into_result(), Ok("ok"));

        let err = Outcome::<()>::error(Error::not_found("missing", "gone"))
            .into_result()
            .unwrap_err();
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn display_includes_code_and_kind() {
        let e = Error::conflict("Product.DuplicateName", "taken");
        assert_eq!(e.to_string(), "Product.DuplicateName (Conflict): taken");
    }
}
