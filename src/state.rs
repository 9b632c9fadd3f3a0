//! The State monad - composable, deferred stateful computation.
//!
//! A `State<S, A>` wraps a single function `S -> (A, S)`: given the current
//! state it produces a result value and the next state. Nothing is executed
//! at construction or composition time; the wrapped function only runs when
//! the computation is applied to a concrete initial state with [`State::run`]
//! (or one of its projections, [`State::eval_state`] and [`State::exec`]).
//!
//! # Overview
//!
//! Computations are built up from small pieces:
//!
//! - [`State::of`] wraps a plain value, leaving the state untouched.
//! - [`State::get`] copies the current state into the value channel.
//! - [`State::modify`] and [`State::put`] rewrite the state.
//! - [`State::chain`] sequences a computation with one chosen from its
//!   result; [`State::map`] and [`State::ap`] are derived notions.
//!
//! The handle itself is immutable: every combinator returns a *new* `State`
//! wrapping a *new* composed closure, so a computation can be run any number
//! of times against the same or different initial states.
//!
//! # Laws
//!
//! `State` satisfies the Functor, Applicative, and Monad laws, plus the
//! MonadState-specific laws:
//!
//! - Left Identity: `State::of(a).chain(f) == f(a)`
//! - Right Identity: `m.chain(State::of) == m`
//! - Associativity: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
//! - Put Get Law: `put(s).then(get())` returns `s`
//! - Put Put Law: `put(s1).then(put(s2)) == put(s2)`
//! - Modify Composition: `modify(f).then(modify(g)) == modify(|s| g(f(s)))`
//!
//! All of these are checked by the property suite in `tests/state_laws.rs`.
//!
//! # Examples
//!
//! A counter threaded through a pure pipeline:
//!
//! ```rust
//! use stately::State;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(State::get());
//!
//! let (count, final_state) = computation.run(0);
//! assert_eq!(count, 2);
//! assert_eq!(final_state, 2);
//! ```
//!
//! # Failure semantics
//!
//! The library defines no error type of its own. A panic raised by a
//! caller-supplied closure propagates unmodified out of whichever call
//! triggered execution; composition performs no catching or wrapping.

use std::rc::Rc;

/// A deferred stateful computation: a wrapped function `S -> (A, S)`.
///
/// # Type Parameters
///
/// - `S`: the state type, threaded through the computation
/// - `A`: the result type
///
/// Both are fully opaque to the library; bounds appear only where an
/// operation forces them (`of` and `put` hand out owned copies on every run,
/// so they require `Clone`).
///
/// # Examples
///
/// ```rust
/// use stately::State;
///
/// let computation: State<i32, i32> = State::get()
///     .chain(|current| State::put(current + 1).then(State::of(current)));
///
/// let (value, final_state) = computation.run(10);
/// assert_eq!(value, 10);
/// assert_eq!(final_state, 11);
/// ```
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// The wrapped state transition function.
    /// Uses Rc so the handle can be cloned by combinators whose callbacks
    /// may run more than once.
    computation: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a new State from a state transition function.
    ///
    /// The function is stored verbatim and not invoked until the computation
    /// is run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stately::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// let (value, final_state) = state.run(10);
    /// assert_eq!(value, 20);
    /// assert_eq!(final_state, 11);
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            computation: Rc::new(action),
        }
    }

    /// Wraps a value in a computation that leaves the state untouched.
    ///
    /// This is the monadic/applicative unit: running `State::of(x)` on any
    /// state yields `(x, state)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stately::State;
    ///
    /// let state: State<i32, &str> = State::of("constant");
    /// let (value, final_state) = state.run(42);
    /// assert_eq!(value, "constant");
    /// assert_eq!(final_state, 42);
    /// ```
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Creates a State that projects a value out of the current state.
    ///
    /// A convenience combining [`State::get`] with a by-reference projection,
    /// avoiding the full state copy that `get().map(..)` would make.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stately::State;
    ///
    /// #[derive(Clone)]
    /// struct Register { value: u16 }
    ///
    /// let state: State<Register, u16> = State::gets(|r: &Register| r.value);
    /// assert_eq!(state.eval_state(Register { value: 7 }), 7);
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let value = projection(&state);
            (value, state)
        })
    }

    /// Runs the computation with the given initial state.
    ///
    /// This is the only true executor; [`State::eval_state`] and
    /// [`State::exec`] are projections of its result. The handle is not
    /// consumed, so the same computation may be run repeatedly.
    ///
    /// # Returns
    ///
    /// The `(value, final_state)` pair, value first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stately::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s + 1, s * 2));
    /// let (value, final_state) = state.run(10);
    /// assert_eq!(value, 11);
    /// assert_eq!(final_state, 20);
    /// ```
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.computation)(initial_state)
    }

    /// Runs the computation and returns only the value, discarding the
    /// final state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stately::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.eval_state(10), 20);
    /// ```
    pub fn eval_state(&self, initial_state: S) -> A {
        let (value, _) = self.run(initial_state);
        value
    }

    /// Runs the computation and returns only the final state, discarding
    /// the value.
    ///
    /// Despite the name suggesting a general "execute", the contract is
    /// specifically that of the conventional `execState`: final state, not
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stately::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.exec(10), 11);
    /// ```
    pub fn exec(&self, initial_state: S) -> S {
        let (_, final_state) = self.run(initial_state);
        final_state
    }

    /// Sequences this computation with one chosen from its result.
    ///
    /// This is the monadic bind. The returned computation, when run: runs
    /// the receiver on the incoming state, feeds the resulting value to
    /// `function`, and runs the computation it returns on the intermediate
    /// state. Sequencing is strict and left-to-right; `chain` performs no
    /// error handling of its own.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stately::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let chained = state.chain(|value| {
    ///     State::new(move |s: i32| (value + s, s * 2))
    /// });
    /// let (value, final_state) = chained.run(10);
    /// // First: (10, 11), then with state 11: (10 + 11, 22)
    /// assert_eq!(value, 21);
    /// assert_eq!(final_state, 22);
    /// ```
    pub fn chain<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let computation = self.computation;
        State::new(move |state| {
            let (value, intermediate_state) = (computation)(state);
            function(value).run(intermediate_state)
        })
    }

    /// Transforms the value produced by this computation.
    ///
    /// This is the functor map, semantically `chain(|x| State::of(f(x)))`;
    /// it is implemented directly on the wrapped closure so the result type
    /// needs no `Clone` bound. State flows through `map` unchanged (though
    /// the receiver's own execution may have changed it before `function`
    /// sees the value).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stately::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s));
    /// let mapped = state.map(|value| value * 2);
    /// let (value, final_state) = mapped.run(21);
    /// assert_eq!(value, 42);
    /// assert_eq!(final_state, 21);
    /// ```
    pub fn map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let computation = self.computation;
        State::new(move |state| {
            let (value, next_state) = (computation)(state);
            (function(value), next_state)
        })
    }

    /// Applicative apply: the receiver produces a function, which is then
    /// mapped over `that`.
    ///
    /// Defined via [`State::chain`], so the receiver's state effect applies
    /// strictly before `that`'s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stately::State;
    ///
    /// fn increment(x: i32) -> i32 {
    ///     x + 1
    /// }
    ///
    /// let applied: State<(), i32> = State::of(increment).ap(State::of(1));
    /// assert_eq!(applied.eval_state(()), 2);
    /// ```
    pub fn ap<T, B>(self, that: State<S, T>) -> State<S, B>
    where
        A: Fn(T) -> B + 'static,
        T: 'static,
        B: 'static,
    {
        self.chain(move |function| that.clone().map(function))
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stately::State;
    ///
    /// let first: State<i32, i32> = State::new(|s: i32| (s, s + 10));
    /// let second: State<i32, &str> = State::of("result");
    /// let (value, final_state) = first.then(second).run(42);
    /// assert_eq!(value, "result");
    /// assert_eq!(final_state, 52);
    /// ```
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.chain(move |_| next.clone())
    }
}

// =============================================================================
// MonadState Operations
// =============================================================================

impl<St> State<St, St>
where
    St: Clone + 'static,
{
    /// Creates a State that copies the current state into the value channel
    /// without altering it.
    ///
    /// This is the fundamental "get" operation: running it on `state` yields
    /// `(state, state)`, making the ambient state available to `map` and
    /// `chain`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stately::State;
    ///
    /// let state: State<i32, i32> = State::get();
    /// let (value, final_state) = state.run(42);
    /// assert_eq!(value, 42);
    /// assert_eq!(final_state, 42);
    /// ```
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: St| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Creates a State that rewrites the current state with a function,
    /// producing no meaningful value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stately::State;
    ///
    /// let state: State<i32, ()> = State::modify(|x| x * 2);
    /// let ((), final_state) = state.run(21);
    /// assert_eq!(final_state, 42);
    /// ```
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }

    /// Creates a State that unconditionally replaces the current state.
    ///
    /// Equivalent to `modify(|_| new_state)`, which is how it is defined.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stately::State;
    ///
    /// let state: State<i32, ()> = State::put(100);
    /// let ((), final_state) = state.run(42);
    /// assert_eq!(final_state, 100);
    /// ```
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::modify(move |_| new_state.clone())
    }
}

// =============================================================================
// Clone / Debug
// =============================================================================

// Manual impl: deriving would demand S: Clone and A: Clone, which the
// handle itself never needs.
impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            computation: self.computation.clone(),
        }
    }
}

impl<S, A> std::fmt::Debug for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("State(..)")
    }
}
