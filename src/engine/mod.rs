//! Recursive evaluation of a spec tree against an input value.
//!
//! `process` is a pure function of (SpecNode, Value): it never mutates its
//! input and never fails. Anything that does not fit the spec (missing keys,
//! mismatched types, rejected conditions) drops that branch as null.
//!
//! Recursion depth grows with spec depth times input nesting; there is no
//! explicit limit beyond the thread's stack.

mod fanout;
mod walk;

pub use walk::process;
