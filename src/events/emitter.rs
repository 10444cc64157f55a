//! Event emitter.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// An event with a kind handlers subscribe to.
pub trait Event {
    type Kind: Copy + Eq + Hash;

    fn kind(&self) -> Self::Kind;
}

type Handler<E> = Box<dyn FnMut(&E) + Send>;

/// Registry of handlers per event kind.
pub struct Evented<E: Event> {
    handlers: HashMap<E::Kind, Vec<Handler<E>>>,
}

impl<E: Event> Evented<E> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` for events of `kind`.
    pub fn on<F>(&mut self, kind: E::Kind, handler: F)
    where
        F: FnMut(&E) + Send + 'static,
    {
        self.handlers.entry(kind).or_default().push(Box::new(handler));
    }

    /// Call every handler registered for the event's kind.
    pub fn emit(&mut self, event: &E) {
        if let Some(handlers) = self.handlers.get_mut(&event.kind()) {
            for handler in handlers.iter_mut() {
                handler(event);
            }
        }
    }

    pub fn handler_count(&self, kind: E::Kind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }
}

impl<E: Event> Default for Evented<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> fmt::Debug for Evented<E>
where
    E::Kind: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<_, _> = self.handlers.iter().map(|(k, v)| (k, v.len())).collect();
        f.debug_struct("Evented").field("handlers", &counts).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Kind {
        Ping,
        Pong,
    }

    #[derive(Debug, PartialEq)]
    struct Msg {
        kind: Kind,
        payload: u32,
    }

    impl Event for Msg {
        type Kind = Kind;

        fn kind(&self) -> Kind {
            self.kind
        }
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut evented = Evented::<Msg>::new();

        for tag in ["first", "second"] {
            let seen = seen.clone();
            evented.on(Kind::Ping, move |msg: &Msg| {
                seen.lock().unwrap().push((tag, msg.payload));
            });
        }

        evented.emit(&Msg { kind: Kind::Ping, payload: 7 });
        assert_eq!(*seen.lock().unwrap(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_only_matching_kind_is_called() {
        let seen = Arc::new(Mutex::new(0));
        let mut evented = Evented::<Msg>::new();
        let counter = seen.clone();
        evented.on(Kind::Pong, move |_: &Msg| *counter.lock().unwrap() += 1);

        evented.emit(&Msg { kind: Kind::Ping, payload: 0 });
        assert_eq!(*seen.lock().unwrap(), 0);

        evented.emit(&Msg { kind: Kind::Pong, payload: 0 });
        assert_eq!(*seen.lock().unwrap(), 1);
        assert_eq!(evented.handler_count(Kind::Pong), 1);
        assert_eq!(evented.handler_count(Kind::Ping), 0);
    }
}
