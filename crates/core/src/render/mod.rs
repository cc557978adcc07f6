//! Plain-text rendering of the view models, for terminals and logs.

pub mod text;
