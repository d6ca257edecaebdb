/// Lifecycle of a simple fetch-and-render flow.
///
/// The forecast explorer carries richer per-level state in its own crate;
/// this is for the pages where one request feeds one view.
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
