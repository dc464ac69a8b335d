//! Pure reducer construction and action dispatch.
//!
//! There is no store here: no subscriptions, middleware or dispatch queue.
//! Callers own the state and thread it through [`BoundReducer::reduce`].

pub mod action;
pub mod reducer;

pub use action::{
    Action, EmptyActionCreator, PayloadAction, PayloadActionCreator, Typed, action_creator,
    payload_action_creator,
};
pub use reducer::{
    BoundReducer, Reducer, ReducerFactory, ReducersMap, SliceBuilder, SliceReducer,
    create_reducer, reducer, slice_reducer,
};
