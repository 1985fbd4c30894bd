// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and evaluation errors.
use thiserror::Error;

/// Errors returned by the cards and evaluation types.
///
/// Both kinds signal a caller contract violation, there are no partial
/// results on error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument is not valid, for example a hand without five cards.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The deck has fewer cards than requested.
    #[error("deck exhausted: requested {requested} cards with {remaining} remaining")]
    Exhausted {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

impl Error {
    /// Creates an [Error::InvalidInput] error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result type for cards and evaluation operations.
pub type Result<T> = std::result::Result<T, Error>;
