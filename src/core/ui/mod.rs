//! Core domain: intro screen.

pub(crate) mod intro;
