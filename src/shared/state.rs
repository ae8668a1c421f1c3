//! Page-level request state.
//!
//! Every page owns exactly one in-flight request at a time and moves through
//! idle -> loading -> {loaded, failed}. A zero-length result set is a loaded
//! state, not a failure: the empty and error renderings are distinct.

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Nothing submitted yet.
    Idle,
    /// Request in flight. Not cancellable; a page navigated away from simply
    /// discards the eventual result.
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state: FetchState<Vec<String>> = FetchState::default();
        assert_eq!(state, FetchState::Idle);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_empty_result_is_loaded_not_failed() {
        let state: FetchState<Vec<String>> = FetchState::Loaded(Vec::new());
        assert_eq!(state.loaded().map(Vec::len), Some(0));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_failed_exposes_message() {
        let state: FetchState<()> = FetchState::Failed("Backend error".to_string());
        assert_eq!(state.error(), Some("Backend error"));
        assert!(state.loaded().is_none());
    }
}
