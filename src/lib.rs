//! Support tooling for the AgriVerse platform.
//!
//! Two unrelated utilities live here: the connectivity smoke test that
//! probes the REST backend (`connectivity-test` binary) and the pitch deck
//! generator that writes `AgriVerse_Ultimate.pptx` (`ppt-generator`
//! binary). The two module trees share no code.

pub mod connectivity;
pub mod slides;
