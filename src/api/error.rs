use std::fmt;

use serde_json::error::Category;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeErrorKind {
    MissingField,
    DuplicateField,
    TypeMismatch,
    Syntax,
    Io,
}

impl DecodeErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingField => "missing field",
            Self::DuplicateField => "duplicate field",
            Self::TypeMismatch => "type mismatch",
            Self::Syntax => "syntax",
            Self::Io => "io",
        }
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("{kind} error: {source}")]
pub struct DecodeError {
    kind: DecodeErrorKind,
    #[source]
    source: serde_json::Error,
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    pub fn line(&self) -> usize {
        self.source.line()
    }

    pub fn column(&self) -> usize {
        self.source.column()
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(source: serde_json::Error) -> Self {
        let kind = match source.classify() {
            Category::Io => DecodeErrorKind::Io,
            Category::Syntax | Category::Eof => DecodeErrorKind::Syntax,
            // serde only distinguishes these by message
            Category::Data => {
                let message = source.to_string();
                if message.starts_with("missing field") {
                    DecodeErrorKind::MissingField
                } else if message.starts_with("duplicate field") {
                    DecodeErrorKind::DuplicateField
                } else {
                    DecodeErrorKind::TypeMismatch
                }
            }
        };
        Self { kind, source }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("api failure {}: {message}", display_code(.code))]
    Failed { code: Option<u32>, message: String },
}

fn display_code(code: &Option<u32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "?".to_string(),
    }
}

impl ApiError {
    pub fn decode_kind(&self) -> Option<DecodeErrorKind> {
        match self {
            Self::Decode(err) => Some(err.kind()),
            Self::Failed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Named {
        name: String,
    }

    fn classify(payload: &str) -> DecodeErrorKind {
        let err = serde_json::from_str::<Named>(payload).unwrap_err();
        DecodeError::from(err).kind()
    }

    #[test]
    fn classifies_serde_categories() {
        assert_eq!(classify("{}"), DecodeErrorKind::MissingField);
        assert_eq!(classify(r#"{"name": 5}"#), DecodeErrorKind::TypeMismatch);
        assert_eq!(classify(r#"{"name": "#), DecodeErrorKind::Syntax);
        assert_eq!(classify(r#"{"name" "x"}"#), DecodeErrorKind::Syntax);
    }

    #[test]
    fn repeated_key_is_its_own_kind() {
        assert_eq!(
            classify(r#"{"name": "a", "name": "b"}"#),
            DecodeErrorKind::DuplicateField
        );
        assert_eq!(DecodeErrorKind::DuplicateField.to_string(), "duplicate field");
    }

    #[test]
    fn message_names_kind_and_position() {
        let err = DecodeError::from(serde_json::from_str::<Named>("{}").unwrap_err());
        assert_eq!(err.line(), 1);
        assert_eq!(err.column(), 2);
        assert!(err.to_string().starts_with("missing field error: missing field `name`"));
    }

    #[test]
    fn failed_without_code() {
        let err = ApiError::Failed {
            code: None,
            message: "Service currently unavailable".into(),
        };
        assert_eq!(err.to_string(), "api failure ?: Service currently unavailable");
        assert_eq!(err.decode_kind(), None);
    }
}
