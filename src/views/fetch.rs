// ABOUTME: Three-phase fetch state shared by the read-path views
// ABOUTME: Loading until the single adapter call settles into Loaded or Failed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Phase of a fetch-then-render view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchPhase<T> {
    /// Call in flight; nothing is shown
    #[default]
    Loading,
    /// Call succeeded
    Loaded(T),
    /// Call failed; the message is shown verbatim
    Failed(String),
}

impl<T> FetchPhase<T> {
    /// Whether the call is still in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded data
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Failure message
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
