pub mod controller;
pub mod debouncer;
pub mod normalizer;
pub mod query;
pub mod response;
pub mod transport;
pub mod types;
pub mod worker;

// Re-export public types
pub use controller::{FetchState, SuggestionController};
pub use debouncer::Debouncer;
pub use normalizer::normalize;
pub use query::SearchQuery;
pub use response::{PageRecord, SearchResponse};
pub use transport::{SearchTransport, WikipediaClient};
pub use types::{Suggestion, SuggestionList};
pub use worker::WorkerRuntime;
