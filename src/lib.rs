//! # stately
//!
//! The State monad for Rust: a composable, purely-functional wrapper around
//! a deferred stateful computation `S -> (A, S)`.
//!
//! ## Overview
//!
//! The crate provides exactly one abstraction, [`State`], plus its
//! constructors and combinators. A `State<S, A>` holds a function from an
//! input state to a `(value, next_state)` pair; composing computations with
//! [`State::chain`], [`State::map`], and [`State::ap`] builds a new deferred
//! function, and nothing executes until [`State::run`] (or [`State::eval_state`]
//! / [`State::exec`]) is applied to a concrete initial state.
//!
//! ## Example
//!
//! ```rust
//! use stately::State;
//!
//! let computation: State<i32, i32> = State::of(2)
//!     .chain(|x| State::get().map(move |y| x + y));
//!
//! assert_eq!(computation.eval_state(3), 5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use stately::prelude::*;
/// ```
pub mod prelude {
    pub use crate::state::State;
}

pub mod state;

pub use state::State;
