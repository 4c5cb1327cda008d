//! The owned-chain stack.
//!
//! `Stack<T>` is a singly-linked list of boxed nodes in the style of
//! [this blog post](http://cglab.ca/~abeinges/blah/too-many-lists/book/):
//! the stack owns the top node and each node owns the one pushed before it.
//! Push, peek and pop are O(1). Dropping or clearing a stack walks the chain
//! in a loop, so teardown depth does not grow with the number of elements.
//!
//! The stack is move-only. `take` and `move_from` transfer the whole chain
//! and leave the source empty; there is no `Clone` impl.

mod list;

pub use self::list::Stack;
