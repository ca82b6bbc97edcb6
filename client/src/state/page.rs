//! Page shell state for the single timeline fetch.
//!
//! DESIGN
//! ======
//! The shell is a tri-state over one in-flight request. `from_fetch` folds the
//! resource value into that state so rendering never inspects fetch details.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::net::api::FetchError;
use crate::net::types::TimelineData;

/// Loading/error/ready state of the home page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PageState {
    #[default]
    Loading,
    Ready(TimelineData),
    /// Terminal failure with the user-facing message.
    Error(String),
}

impl PageState {
    /// Fold a resource value (`None` while in flight) into page state.
    #[must_use]
    pub fn from_fetch(result: Option<Result<TimelineData, FetchError>>) -> Self {
        match result {
            None => Self::Loading,
            Some(Ok(data)) => Self::Ready(data),
            Some(Err(e)) => Self::Error(e.user_message().to_owned()),
        }
    }

    /// The about section renders only when at least one body entry exists.
    #[must_use]
    pub fn show_about(&self) -> bool {
        matches!(self, Self::Ready(data) if data.about().is_some())
    }

    #[must_use]
    pub fn show_timeline(&self) -> bool {
        matches!(self, Self::Ready(data) if !data.is_empty_timeline())
    }

    /// Ready with no timeline entries: render the explicit empty-state text.
    #[must_use]
    pub fn show_empty_timeline(&self) -> bool {
        matches!(self, Self::Ready(data) if data.is_empty_timeline())
    }
}
