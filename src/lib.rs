//! Search-as-you-type article picker
//!
//! The [`suggest`] module is the retrieval pipeline: a debounce gate, the
//! prefix-search query builder, the response normalizer and the fetch state
//! controller. [`app`] is the terminal front end built on top of it.

pub mod app;
pub mod config;
pub mod error;
pub mod placeholder;
pub mod suggest;


pub use error::SuggestError;
