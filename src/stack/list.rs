use std::fmt;

use crate::error::{EmptyStackError, Result};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
  elem: T,
  next: Link<T>,
}

/// A move-only LIFO stack over a chain of boxed nodes.
///
/// Every node owns the node pushed before it, and the stack owns the top
/// node. Elements are only ever constructed, moved out, or dropped; the stack
/// never assigns over an element, so `T` needs no bound beyond what each
/// push method asks for.
///
/// ```
/// use chainstack::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.head(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert!(stack.pop().is_err());
/// ```
///
/// A `Stack` cannot be copied:
///
/// ```compile_fail
/// use chainstack::Stack;
///
/// let stack: Stack<i32> = Stack::new();
/// let copy: Stack<i32> = stack.clone();
/// ```
pub struct Stack<T> {
  head: Link<T>,
}

impl<T> Stack<T> {
  /// Creates a new, empty `Stack<T>`.
  pub fn new() -> Self {
    Self {
      head: None,
    }
  }

  /// Moves `elem` onto the top of the stack.
  pub fn push(&mut self, elem: T) {
    self.link(elem);
  }

  /// Pushes a clone of `elem`. If `T::clone` panics the stack is unchanged.
  pub fn push_cloned(&mut self, elem: &T)
  where T: Clone {
    self.link(elem.clone());
  }

  /// Builds the new top element from `args` via `T::from`.
  pub fn push_emplace<A>(&mut self, args: A)
  where T: From<A> {
    self.link(T::from(args));
  }

  /// Builds the new top element by calling `make`. If `make` panics the
  /// stack is unchanged.
  pub fn push_with<F>(&mut self, make: F)
  where F: FnOnce() -> T {
    self.link(make());
  }

  /// Borrows the top element.
  pub fn head(&self) -> Result<&T> {
    match self.head {
      Some(ref node) => Ok(&node.elem),
      None => Err(rejected("head")),
    }
  }

  /// Removes the top element and returns it by value.
  pub fn pop(&mut self) -> Result<T> {
    match self.head.take() {
      None => Err(rejected("pop")),
      Some(node) => {
        let node = *node;
        self.head = node.next;
        Ok(node.elem)
      }
    }
  }

  /// Predicate that tests if the stack is empty.
  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// Drops every element, top first, leaving the stack empty.
  pub fn clear(&mut self) {
    let mut released: usize = 0;
    let mut link = self.head.take();

    // Unhook each node before it drops so teardown never recurses.
    while let Some(mut node) = link {
      link = node.next.take();
      released += 1;
    }

    if released > 0 {
      tracing::trace!(released, "released stack chain");
    }
  }

  /// Moves the whole chain out, leaving `self` empty.
  pub fn take(&mut self) -> Self {
    Self {
      head: self.head.take(),
    }
  }

  /// Replaces the contents of `self` with the chain of `source`, leaving
  /// `source` empty. The previous contents of `self` are dropped.
  pub fn move_from(&mut self, source: &mut Self) {
    self.clear();
    self.head = source.head.take();
  }

  // The element is fully built before the node is allocated, and the node
  // is fully built before it becomes the head.
  fn link(&mut self, elem: T) {
    let mut node = Box::new(Node {
      elem: elem,
      next: None,
    });

    node.next = self.head.take();
    self.head = Some(node);
  }
}

fn rejected(op: &'static str) -> EmptyStackError {
  tracing::trace!(op, "rejected access to empty stack");
  EmptyStackError
}

impl<T> Drop for Stack<T> {
  fn drop(&mut self) {
    self.clear();
  }
}

impl<T> Default for Stack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Stack")
      .field("head", &self.head.as_ref().map(|node| &node.elem))
      .finish()
  }
}
