//! The two primitives signing relies on: a message digest and a source of
//! uniformly random integers.
pub mod hash;
pub mod random;
