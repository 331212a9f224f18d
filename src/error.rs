//! Error types for configuration edits, rendering and generation.

use crate::field::{Bounds, FieldId};
use std::fmt;

/// A rejected edit or a violated invariant.
///
/// Every variant carries enough context (field, bound, offending value) for
/// the caller to show it next to the input and let the user retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    UnknownField(String),
    /// A typed setter was used on a field of another kind.
    KindMismatch {
        field: FieldId,
        expected: &'static str,
    },
    InvalidNumber {
        field: FieldId,
        input: String,
    },
    InvalidFlag {
        field: FieldId,
        input: String,
    },
    InvalidChoice {
        field: FieldId,
        input: String,
        choices: &'static [&'static str],
    },
    OutOfRange {
        field: FieldId,
        bounds: Bounds,
        value: i64,
    },
    /// `pipe_type = Extended` while condition variables are disabled.
    PipeRequiresConditionVariables,
    /// `mailbox_ack_enabled` while the mailbox is disabled.
    MailboxAckRequiresMailbox,
    /// Idle task and timer handler share a PID.
    PidConflict {
        pid: u32,
    },
    ThreadIndex {
        index: usize,
        thread_count: usize,
    },
    InvalidThreadName {
        index: usize,
        name: String,
    },
    DuplicateThreadName {
        name: String,
        first: usize,
        second: usize,
    },
    InvalidStackSize {
        index: usize,
        input: String,
    },
    StackSizeOutOfRange {
        index: usize,
        bounds: Bounds,
        value: i64,
    },
}

impl ValidationError {
    /// Field the error should be displayed under, if it belongs to a scalar field.
    pub fn field(&self) -> Option<FieldId> {
        match self {
            ValidationError::KindMismatch { field, .. }
            | ValidationError::InvalidNumber { field, .. }
            | ValidationError::InvalidFlag { field, .. }
            | ValidationError::InvalidChoice { field, .. }
            | ValidationError::OutOfRange { field, .. } => Some(*field),
            ValidationError::PipeRequiresConditionVariables => Some(FieldId::PipeType),
            ValidationError::MailboxAckRequiresMailbox => Some(FieldId::MailboxAckEnabled),
            ValidationError::PidConflict { .. } => Some(FieldId::TimerHandlerPid),
            _ => None,
        }
    }

    /// Thread table row the error belongs to, if any.
    pub fn thread_index(&self) -> Option<usize> {
        match self {
            ValidationError::ThreadIndex { index, .. }
            | ValidationError::InvalidThreadName { index, .. }
            | ValidationError::InvalidStackSize { index, .. }
            | ValidationError::StackSizeOutOfRange { index, .. } => Some(*index),
            ValidationError::DuplicateThreadName { second, .. } => Some(*second),
            _ => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownField(name) => write!(f, "Unknown field '{}'", name),
            ValidationError::KindMismatch { field, expected } => {
                write!(f, "{} is not {} field", field, expected)
            }
            ValidationError::InvalidNumber { field, input } => {
                write!(f, "{} must be a valid number, got '{}'", field, input)
            }
            ValidationError::InvalidFlag { field, input } => write!(
                f,
                "{} must be true/false, on/off, yes/no or 1/0, got '{}'",
                field, input
            ),
            ValidationError::InvalidChoice {
                field,
                input,
                choices,
            } => write!(
                f,
                "{} must be one of {}, got '{}'",
                field,
                choices.join(", "),
                input
            ),
            ValidationError::OutOfRange {
                field,
                bounds,
                value,
            } => write!(f, "{} must be within {}, got {}", field, bounds, value),
            ValidationError::PipeRequiresConditionVariables => write!(
                f,
                "pipe_type Extended requires condition_variables_enabled"
            ),
            ValidationError::MailboxAckRequiresMailbox => {
                write!(f, "mailbox_ack_enabled requires mailbox_enabled")
            }
            ValidationError::PidConflict { pid } => write!(
                f,
                "idle_task_pid and timer_handler_pid must differ (both {})",
                pid
            ),
            ValidationError::ThreadIndex {
                index,
                thread_count,
            } => write!(
                f,
                "Thread {} does not exist ({} threads configured)",
                index, thread_count
            ),
            ValidationError::InvalidThreadName { index, name } => write!(
                f,
                "Thread {} name '{}' is not a valid C identifier",
                index, name
            ),
            ValidationError::DuplicateThreadName {
                name,
                first,
                second,
            } => write!(
                f,
                "Thread {} reuses name '{}' of thread {}",
                second, name, first
            ),
            ValidationError::InvalidStackSize { index, input } => write!(
                f,
                "Thread {} stack size must be a valid number, got '{}'",
                index, input
            ),
            ValidationError::StackSizeOutOfRange {
                index,
                bounds,
                value,
            } => write!(
                f,
                "Thread {} stack size must be within {}, got {}",
                index, bounds, value
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// `render()` was called on a model that still has violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreconditionError {
    pub violations: Vec<ValidationError>,
}

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Configuration has {} violation(s)",
            self.violations.len()
        )?;
        for v in &self.violations {
            write!(f, "; {}", v)?;
        }
        Ok(())
    }
}

impl std::error::Error for PreconditionError {}

/// Failure of a full generate request.
#[derive(Debug)]
pub enum GenerateError<E> {
    Precondition(PreconditionError),
    /// The output destination refused the text.
    Destination(E),
}

impl<E: fmt::Display> fmt::Display for GenerateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Precondition(e) => write!(f, "{}", e),
            GenerateError::Destination(e) => write!(f, "Failed to write configuration: {}", e),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for GenerateError<E> {}

impl<E> From<PreconditionError> for GenerateError<E> {
    fn from(e: PreconditionError) -> Self {
        GenerateError::Precondition(e)
    }
}
