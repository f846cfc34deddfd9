pub mod audit;
pub mod error;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
pub mod telemetry;

pub use state::AppState;
pub use store::DictionaryStore;
