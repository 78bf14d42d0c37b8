/// Actions an observer can take during a rod-cutting solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver immediately.
    ///
    /// A partially filled table has no answer for the requested length, so
    /// the solver returns [`Error::StoppedByObserver`](super::Error::StoppedByObserver).
    StopEarly,
}
