//! Custom error types for fontpair-core
//!
//! Two kinds live here. [`GenerationError`] covers everything that can go
//! wrong while talking to the generation backend and is shown to the user
//! in place of the result it failed to produce. [`ConfigError`] covers
//! startup problems (missing credential, unreadable config file) and is
//! fatal: the application refuses to start rather than failing per request.

use thiserror::Error;

/// The two backend operations a [`GenerationError`] can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationOp {
    /// The pairing request (font name in, `PairingResult` out)
    Pairing,
    /// The snippet request (pairing in, `CodeSnippets` out)
    Snippets,
}

impl GenerationOp {
    /// Lowercase operation name as used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            GenerationOp::Pairing => "pairing",
            GenerationOp::Snippets => "snippets",
        }
    }
}

impl std::fmt::Display for GenerationOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error produced by a generation request.
///
/// `Display` carries the full diagnostic for logs; [`user_message`] returns
/// the short message rendered in the UI instead of the missing result.
///
/// [`user_message`]: GenerationError::user_message
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Network error during the HTTP request
    #[error("Network error during {op} request to {url}: {source}")]
    Network {
        /// Which operation was in flight
        op: GenerationOp,
        /// The URL that failed
        url: String,
        /// The underlying reqwest error
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-success status
    #[error("Backend returned {status} during {op} request: {body}")]
    Backend {
        /// Which operation was in flight
        op: GenerationOp,
        /// HTTP status code of the response
        status: u16,
        /// Response body, usually a JSON error envelope
        body: String,
    },

    /// Backend answered 200 but the payload did not conform to the schema
    #[error("Failed to parse {op} response: {message}")]
    Parse {
        /// Which operation was in flight
        op: GenerationOp,
        /// Description of the parse failure
        message: String,
    },
}

/// Result type alias for generation requests
pub type GenerationResult<T> = Result<T, GenerationError>;

impl GenerationError {
    /// Create a network error from a reqwest error and URL
    pub fn network(op: GenerationOp, url: impl Into<String>, source: reqwest::Error) -> Self {
        GenerationError::Network {
            op,
            url: url.into(),
            source,
        }
    }

    /// Create a backend error from a non-success response
    pub fn backend(op: GenerationOp, status: u16, body: impl Into<String>) -> Self {
        GenerationError::Backend {
            op,
            status,
            body: body.into(),
        }
    }

    /// Create a parse error
    pub fn parse(op: GenerationOp, message: impl Into<String>) -> Self {
        GenerationError::Parse {
            op,
            message: message.into(),
        }
    }

    /// Which backend operation this error came from.
    pub fn op(&self) -> GenerationOp {
        match self {
            GenerationError::Network { op, .. } => *op,
            GenerationError::Backend { op, .. } => *op,
            GenerationError::Parse { op, .. } => *op,
        }
    }

    /// The message shown to the user in place of the missing result.
    ///
    /// Deliberately short and free of URLs, status codes, and serde detail;
    /// the full diagnostic stays in the `Display` output for the logs.
    pub fn user_message(&self) -> &'static str {
        match self.op() {
            GenerationOp::Pairing => {
                "Failed to generate font pairing. The model may be unable to find a suitable match or there was a network issue."
            }
            GenerationOp::Snippets => "Failed to generate code snippets.",
        }
    }
}

/// Fatal startup error.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No API key in the environment or the config file
    #[error("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,

    /// Config file exists but could not be read
    #[error("Failed to read config file '{path}'")]
    Read {
        /// Path of the file that failed
        path: String,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Config file exists but is not valid TOML
    #[error("Failed to parse config file '{path}'")]
    Parse {
        /// Path of the file that failed
        path: String,
        /// The underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {source}")]
    HttpClient {
        /// The underlying reqwest error
        #[source]
        source: reqwest::Error,
    },
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    // For any GenerationError, the Display output names the operation that
    // failed and preserves the backend detail, while user_message() stays
    // one of the two fixed strings regardless of that detail.

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn backend_error_contains_status_and_body(
            status in 400u16..600u16,
            body in "[a-zA-Z0-9 ]{1,50}"
        ) {
            let err = GenerationError::backend(GenerationOp::Pairing, status, &body);
            let display = err.to_string();

            prop_assert!(
                display.contains(&status.to_string()),
                "Backend error display '{}' should contain status '{}'",
                display,
                status
            );
            prop_assert!(
                display.contains(&body),
                "Backend error display '{}' should contain body '{}'",
                display,
                body
            );
            prop_assert!(display.contains("pairing"));
        }

        #[test]
        fn parse_error_contains_message_and_op(
            message in "[a-zA-Z0-9 `]{1,50}"
        ) {
            let err = GenerationError::parse(GenerationOp::Snippets, &message);
            let display = err.to_string();

            prop_assert!(
                display.contains(&message),
                "Parse error display '{}' should contain message '{}'",
                display,
                message
            );
            prop_assert!(display.contains("snippets"));
        }

        #[test]
        fn user_message_is_stable_across_details(
            status in 400u16..600u16,
            body in "[a-zA-Z0-9 ]{1,50}",
            message in "[a-zA-Z0-9 ]{1,50}"
        ) {
            let backend = GenerationError::backend(GenerationOp::Pairing, status, &body);
            let parse = GenerationError::parse(GenerationOp::Pairing, &message);

            prop_assert_eq!(backend.user_message(), parse.user_message());
            prop_assert!(!backend.user_message().is_empty());
        }
    }
}
