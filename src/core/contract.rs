//! core::contract
//!
//! Design-by-contract failures for names.
//!
//! # Kinds
//!
//! - **Precondition**: an argument or index was invalid. Nothing was computed.
//! - **Invariant**: a produced value does not satisfy its class invariant.
//! - **Postcondition**: an operation's own result check failed.
//!
//! Every kind carries a message and an optional cause, so callers can match on
//! the variant (or on [`ContractError::kind`]) to tell caller bugs apart from
//! implementation bugs.
//!
//! # Example
//!
//! ```
//! use hiername::core::contract::{ContractError, ContractKind};
//!
//! let err = ContractError::precondition("index out of bounds");
//! assert_eq!(err.kind(), ContractKind::Precondition);
//! assert_eq!(err.to_string(), "precondition violated: index out of bounds");
//! ```

use std::fmt;

use thiserror::Error;

/// The three discriminable contract failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKind {
    Precondition,
    Invariant,
    Postcondition,
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContractKind::Precondition => "precondition",
            ContractKind::Invariant => "invariant",
            ContractKind::Postcondition => "postcondition",
        };
        write!(f, "{s}")
    }
}

/// A contract violation raised by a name operation.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("precondition violated: {message}")]
    Precondition {
        message: String,
        #[source]
        cause: Option<Box<ContractError>>,
    },

    #[error("invariant violated: {message}")]
    Invariant {
        message: String,
        #[source]
        cause: Option<Box<ContractError>>,
    },

    #[error("postcondition violated: {message}")]
    Postcondition {
        message: String,
        #[source]
        cause: Option<Box<ContractError>>,
    },
}

impl ContractError {
    /// Create a precondition violation without a cause.
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
            cause: None,
        }
    }

    /// Create an invariant violation without a cause.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a postcondition violation without a cause.
    pub fn postcondition(message: impl Into<String>) -> Self {
        Self::Postcondition {
            message: message.into(),
            cause: None,
        }
    }

    /// Wrap `cause` in a new error of the given kind.
    ///
    /// Used when a check of one kind trips over a failure of another, e.g. an
    /// invariant check that finds a component failing its precondition.
    pub fn wrap(kind: ContractKind, message: impl Into<String>, cause: ContractError) -> Self {
        let message = message.into();
        let cause = Some(Box::new(cause));
        match kind {
            ContractKind::Precondition => Self::Precondition { message, cause },
            ContractKind::Invariant => Self::Invariant { message, cause },
            ContractKind::Postcondition => Self::Postcondition { message, cause },
        }
    }

    /// Which contract failed.
    pub fn kind(&self) -> ContractKind {
        match self {
            Self::Precondition { .. } => ContractKind::Precondition,
            Self::Invariant { .. } => ContractKind::Invariant,
            Self::Postcondition { .. } => ContractKind::Postcondition,
        }
    }

    /// The message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Precondition { message, .. }
            | Self::Invariant { message, .. }
            | Self::Postcondition { message, .. } => message,
        }
    }

    /// The wrapped cause, if any.
    pub fn cause(&self) -> Option<&ContractError> {
        match self {
            Self::Precondition { cause, .. }
            | Self::Invariant { cause, .. }
            | Self::Postcondition { cause, .. } => cause.as_deref(),
        }
    }

    pub fn is_precondition(&self) -> bool {
        self.kind() == ContractKind::Precondition
    }

    pub fn is_invariant(&self) -> bool {
        self.kind() == ContractKind::Invariant
    }

    pub fn is_postcondition(&self) -> bool {
        self.kind() == ContractKind::Postcondition
    }
}

/// Fail with a precondition violation unless `condition` holds.
///
/// # Example
///
/// ```
/// use hiername::core::contract::require;
///
/// assert!(require(1 < 2, "ordered").is_ok());
/// assert!(require(2 < 1, "ordered").unwrap_err().is_precondition());
/// ```
pub fn require(condition: bool, message: &str) -> Result<(), ContractError> {
    check(ContractKind::Precondition, condition, message)
}

/// Fail with a postcondition violation unless `condition` holds.
pub fn ensure(condition: bool, message: &str) -> Result<(), ContractError> {
    check(ContractKind::Postcondition, condition, message)
}

/// Fail with an invariant violation unless `condition` holds.
pub fn invariant(condition: bool, message: &str) -> Result<(), ContractError> {
    check(ContractKind::Invariant, condition, message)
}

fn check(kind: ContractKind, condition: bool, message: &str) -> Result<(), ContractError> {
    if condition {
        return Ok(());
    }
    log::debug!("{kind} violated: {message}");
    Err(match kind {
        ContractKind::Precondition => ContractError::precondition(message),
        ContractKind::Invariant => ContractError::invariant(message),
        ContractKind::Postcondition => ContractError::postcondition(message),
    })
}
