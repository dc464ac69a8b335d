//! Redux-compatible reducer construction.
//!
//! Two phases: a build phase fills a table of action type → reducer, and the
//! resulting [`BoundReducer`] only ever reads that table. Dispatch goes
//! through [`choose`] with the action type as key, so an unknown type always
//! lands on the default reducer.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::core::choice::choose;
use crate::redux::action::{PayloadAction, PayloadActionCreator, Typed};

/// Pure state transition. The state is moved in; returning it untouched is
/// the no-op.
pub type Reducer<S, A> = Rc<dyn Fn(S, &A) -> S>;

/// Action type → reducer.
pub type ReducersMap<K, S, A> = HashMap<K, Reducer<S, A>>;

/// Dispatch-table entry: a reducer taking `(state, action)` as one argument.
type Entry<S, A> = Box<dyn Fn((S, &A)) -> S>;

/// Wrap a closure as a shareable [`Reducer`].
pub fn reducer<S, A, F>(f: F) -> Reducer<S, A>
where
    F: Fn(S, &A) -> S + 'static,
{
    Rc::new(f)
}

fn entry<S, A, F>(f: F) -> Entry<S, A>
where
    F: Fn((S, &A)) -> S + 'static,
{
    Box::new(f)
}

/// Returned by [`create_reducer`]; binds reducer maps to an initial state.
#[derive(Debug, Clone)]
pub struct ReducerFactory<S> {
    init: S,
}

/// Create clean and readable reducers around `init`.
pub fn create_reducer<S>(init: S) -> ReducerFactory<S> {
    ReducerFactory { init }
}

impl<S: Clone + 'static> ReducerFactory<S> {
    /// Bind `reducers`; unknown action types return the state unchanged.
    pub fn bind<A>(&self, reducers: ReducersMap<A::Type, S, A>) -> BoundReducer<S, A>
    where
        A: Typed + 'static,
        A::Type: Eq + Hash,
    {
        self.bind_entries(reducers, entry(|(state, _)| state))
    }

    /// Bind `reducers` with `default_reducer` handling unknown action types.
    pub fn bind_with_default<A>(
        &self,
        reducers: ReducersMap<A::Type, S, A>,
        default_reducer: Reducer<S, A>,
    ) -> BoundReducer<S, A>
    where
        A: Typed + 'static,
        A::Type: Eq + Hash,
    {
        self.bind_entries(
            reducers,
            entry(move |(state, action)| default_reducer(state, action)),
        )
    }

    fn bind_entries<A>(
        &self,
        reducers: ReducersMap<A::Type, S, A>,
        fallback: Entry<S, A>,
    ) -> BoundReducer<S, A>
    where
        A: Typed + 'static,
        A::Type: Eq + Hash,
    {
        let table = reducers
            .into_iter()
            .map(|(action_type, handler)| {
                let dispatch = entry(move |(state, action)| handler(state, action));
                (action_type, dispatch)
            })
            .collect();
        BoundReducer {
            init: self.init.clone(),
            table,
            fallback,
        }
    }
}

/// A reducer with its dispatch table fixed.
pub struct BoundReducer<S, A: Typed> {
    init: S,
    table: HashMap<A::Type, Entry<S, A>>,
    fallback: Entry<S, A>,
}

impl<S, A> BoundReducer<S, A>
where
    S: Clone,
    A: Typed,
    A::Type: Eq + Hash + fmt::Debug,
{
    /// Apply `action`. A missing state is replaced by the initial state.
    pub fn reduce(&self, state: Option<S>, action: &A) -> S {
        let state = state.unwrap_or_else(|| self.init.clone());
        choose(
            action.action_type(),
            &self.table,
            |args| {
                trace!(action_type = ?action.action_type(), "no reducer registered, using default");
                (self.fallback)(args)
            },
            (state, action),
        )
    }

    /// Thread `state` through every action in order.
    pub fn fold<'a, I>(&self, state: Option<S>, actions: I) -> S
    where
        I: IntoIterator<Item = &'a A>,
        A: 'a,
    {
        let init = state.unwrap_or_else(|| self.init.clone());
        actions
            .into_iter()
            .fold(init, |state, action| self.reduce(Some(state), action))
    }

    pub fn initial_state(&self) -> &S {
        &self.init
    }

    /// True if `action_type` has a registered reducer.
    pub fn handles(&self, action_type: &A::Type) -> bool {
        self.table.contains_key(action_type)
    }
}

impl<S: fmt::Debug, A: Typed> fmt::Debug for BoundReducer<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundReducer")
            .field("init", &self.init)
            .field("handlers", &self.table.len())
            .finish_non_exhaustive()
    }
}

/// Returned by [`slice_reducer`]; consumes a builder closure.
#[derive(Debug, Clone)]
pub struct SliceReducer<S> {
    init: S,
}

/// Statically typed reducer for a slice of state.
///
/// ```text
/// let counter = slice_reducer(0).build(|slice: &mut SliceBuilder<i64, Counter>| {
///     slice
///         .handle(&increment, |count| count + 1)
///         .handle_payload(&add, |count, amount| count + amount);
/// });
/// ```
pub fn slice_reducer<S>(init: S) -> SliceReducer<S> {
    SliceReducer { init }
}

impl<S: Clone + 'static> SliceReducer<S> {
    /// Run `builder` against a fresh registration table and bind the result.
    pub fn build<A, B>(self, builder: B) -> BoundReducer<S, A>
    where
        A: Typed + 'static,
        A::Type: Eq + Hash + Clone + fmt::Debug,
        B: FnOnce(&mut SliceBuilder<S, A>),
    {
        let mut slice = SliceBuilder {
            reducers: HashMap::new(),
            default_reducer: None,
        };
        builder(&mut slice);

        let create = create_reducer(self.init);
        match slice.default_reducer {
            Some(default_reducer) => create.bind_with_default(slice.reducers, default_reducer),
            None => create.bind(slice.reducers),
        }
    }
}

/// Chainable registration API handed to the [`SliceReducer::build`] closure.
pub struct SliceBuilder<S, A: Typed> {
    reducers: ReducersMap<A::Type, S, A>,
    default_reducer: Option<Reducer<S, A>>,
}

impl<S, A> SliceBuilder<S, A>
where
    S: 'static,
    A: Typed + 'static,
    A::Type: Eq + Hash + Clone + fmt::Debug,
{
    /// Register a reducer that only looks at the state.
    pub fn handle<C, F>(&mut self, creator: &C, handler: F) -> &mut Self
    where
        C: Typed<Type = A::Type>,
        F: Fn(S) -> S + 'static,
    {
        let wrapped = reducer(move |state, _: &A| handler(state));
        self.register(creator.action_type().clone(), wrapped)
    }

    /// Register a reducer that receives the action's payload.
    ///
    /// An action of this type arriving without a payload leaves the state
    /// unchanged.
    pub fn handle_payload<Args, F>(
        &mut self,
        creator: &PayloadActionCreator<A::Type, Args, A::Payload>,
        handler: F,
    ) -> &mut Self
    where
        A: PayloadAction,
        F: Fn(S, &A::Payload) -> S + 'static,
    {
        let wrapped = reducer(move |state, action: &A| match action.payload() {
            Some(payload) => handler(state, payload),
            None => {
                debug!(
                    action_type = ?action.action_type(),
                    "payload reducer got action without payload"
                );
                state
            }
        });
        self.register(creator.action_type().clone(), wrapped)
    }

    /// Reducer for action types nothing else handles.
    pub fn default<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(S, &A) -> S + 'static,
    {
        self.default_reducer = Some(reducer(handler));
        self
    }

    fn register(&mut self, action_type: A::Type, wrapped: Reducer<S, A>) -> &mut Self {
        trace!(action_type = ?action_type, "registered slice reducer");
        if self.reducers.insert(action_type.clone(), wrapped).is_some() {
            debug!(action_type = ?action_type, "replaced previously registered reducer");
        }
        self
    }
}
