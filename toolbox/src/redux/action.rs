//! Redux-compatible actions and action creators.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Anything carrying an action `type`: actions and their creators alike.
pub trait Typed {
    type Type;

    fn action_type(&self) -> &Self::Type;
}

/// An action that may carry a payload next to its `type`.
pub trait PayloadAction: Typed {
    type Payload;

    fn payload(&self) -> Option<&Self::Payload>;
}

/// `{ "type": ..., "payload": ... }` with the payload omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action<T, P = ()> {
    #[serde(rename = "type")]
    pub kind: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<P>,
}

impl<T, P> Action<T, P> {
    /// Action carrying only its type.
    pub fn new(kind: T) -> Self {
        Self {
            kind,
            payload: None,
        }
    }

    pub fn with_payload(kind: T, payload: P) -> Self {
        Self {
            kind,
            payload: Some(payload),
        }
    }
}

impl<T, P> Typed for Action<T, P> {
    type Type = T;

    fn action_type(&self) -> &T {
        &self.kind
    }
}

impl<T, P> PayloadAction for Action<T, P> {
    type Payload = P;

    fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }
}

/// Creator of actions that carry nothing but their type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyActionCreator<T> {
    action_type: T,
}

/// Creator for payload-free actions of `action_type`.
pub fn action_creator<T>(action_type: T) -> EmptyActionCreator<T> {
    EmptyActionCreator { action_type }
}

impl<T: Clone> EmptyActionCreator<T> {
    /// New action of this creator's type, without a payload.
    pub fn create<P>(&self) -> Action<T, P> {
        Action::new(self.action_type.clone())
    }
}

impl<T> Typed for EmptyActionCreator<T> {
    type Type = T;

    fn action_type(&self) -> &T {
        &self.action_type
    }
}

/// Creator of actions whose payload is computed from `Args`.
pub struct PayloadActionCreator<T, Args, P> {
    action_type: T,
    make: Rc<dyn Fn(Args) -> P>,
}

pub fn payload_action_creator<T, Args, P, F>(
    action_type: T,
    make: F,
) -> PayloadActionCreator<T, Args, P>
where
    F: Fn(Args) -> P + 'static,
{
    PayloadActionCreator {
        action_type,
        make: Rc::new(make),
    }
}

impl<T: Clone, Args, P> PayloadActionCreator<T, Args, P> {
    /// New action whose payload is computed from `args`.
    pub fn create(&self, args: Args) -> Action<T, P> {
        Action::with_payload(self.action_type.clone(), (self.make)(args))
    }
}

impl<T, Args, P> Typed for PayloadActionCreator<T, Args, P> {
    type Type = T;

    fn action_type(&self) -> &T {
        &self.action_type
    }
}

impl<T: Clone, Args, P> Clone for PayloadActionCreator<T, Args, P> {
    fn clone(&self) -> Self {
        Self {
            action_type: self.action_type.clone(),
            make: Rc::clone(&self.make),
        }
    }
}

impl<T: fmt::Debug, Args, P> fmt::Debug for PayloadActionCreator<T, Args, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadActionCreator")
            .field("action_type", &self.action_type)
            .finish_non_exhaustive()
    }
}
