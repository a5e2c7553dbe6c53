/// Receives solver events and decides how the iteration should proceed.
///
/// A solver hands each event to its observer and acts on the returned
/// `Option<A>`: `Some(action)` requests a solver-specific action and `None`
/// lets the iteration continue unchanged. Observers are how callers trace,
/// log, or cut short a run without a separate solver API.
///
/// Closures of type `FnMut(&E) -> Option<A>` implement `Observer`, and `()`
/// is a no-op observer.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
