use std::result;

use thiserror::Error as ThisError;

pub type Result<T, E = EmptyStackError> = result::Result<T, E>;

/// Returned by `Stack::head` and `Stack::pop` when the stack holds no
/// elements. The stack is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[error("tried to access the head of an empty stack")]
pub struct EmptyStackError;
