//! A move-only LIFO stack built on an exclusively-owned chain of boxed
//! nodes.
//!
//! The only recoverable failure is [`EmptyStackError`], returned by
//! [`Stack::head`] and [`Stack::pop`] on an empty stack.

pub mod error;
pub mod stack;

pub use crate::error::{EmptyStackError, Result};
pub use crate::stack::Stack;


///////////////////////////////////////////////////////////////////////////////
//// Utilities
///////////////////////////////////////////////////////////////////////////////




///////////////////////////////////////////////////////////////////////////////
//// Stack Tests
///////////////////////////////////////////////////////////////////////////////
