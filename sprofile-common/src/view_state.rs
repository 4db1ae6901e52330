/// Outcome of the session probe that gates the protected views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Probe still in flight. Nothing protected is mounted yet.
    Checking,
    /// Token-presence endpoint answered with a 2xx status.
    Authenticated,
    /// Anything else: non-2xx, transport failure or timeout.
    Anonymous,
}

#[allow(clippy::derivable_impls)]
impl Default for SessionState {
    fn default() -> Self {
        SessionState::Checking
    }
}

/// Rendering state for a view that fetches one resource on mount.
///
/// `Loading` is the only initial state. The other three are terminal: once a
/// view reaches one of them it stays there until it is remounted.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    /// The resource arrived and has something to show.
    Ready(T),
    /// The resource arrived but holds nothing to render.
    Empty,
    /// Any failure, already reduced to the message the view displays.
    Failed(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    /// Transform the ready value, keeping every other state as is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewState<U> {
        match self {
            ViewState::Loading => ViewState::Loading,
            ViewState::Ready(value) => ViewState::Ready(f(value)),
            ViewState::Empty => ViewState::Empty,
            ViewState::Failed(message) => ViewState::Failed(message),
        }
    }

    /// Build a terminal state from a fetched value, collapsing to `Empty`
    /// when `is_empty` says there is nothing to show.
    pub fn settle(value: T, is_empty: impl FnOnce(&T) -> bool) -> Self {
        if is_empty(&value) {
            ViewState::Empty
        } else {
            ViewState::Ready(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_initial_states() {
        assert_eq!(SessionState::default(), SessionState::Checking);
        assert_eq!(ViewState::<u32>::default(), ViewState::Loading);
    }

    #[test]
    fn settle_collapses_empty_collections() {
        let empty: ViewState<Vec<u32>> = ViewState::settle(vec![], |v| v.is_empty());
        assert_eq!(empty, ViewState::Empty);

        let ready = ViewState::settle(vec![1, 2], |v| v.is_empty());
        assert_eq!(ready, ViewState::Ready(vec![1, 2]));
    }

    #[test]
    fn map_only_touches_ready() {
        assert_eq!(ViewState::Ready(2).map(|n| n * 10), ViewState::Ready(20));
        assert_eq!(ViewState::<u32>::Empty.map(|n| n * 10), ViewState::Empty);
        assert_eq!(
            ViewState::<u32>::Failed("boom".to_string()).map(|n| n * 10),
            ViewState::Failed("boom".to_string())
        );
        assert_eq!(ViewState::<u32>::Loading.map(|n| n + 1), ViewState::Loading);
    }
}
