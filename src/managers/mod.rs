pub mod results_table;
pub mod search_session;

// Re-export for convenience
pub use results_table::{ResultRow, ResultsTable};
pub use search_session::{InputAction, SearchRequest, SearchSession};
