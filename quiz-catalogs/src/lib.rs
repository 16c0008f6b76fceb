pub mod nutrition;

// Re-export nutrition catalog and its labels
pub use nutrition::{REDO_LABEL, RESULTS_LABEL, SERIES_LABEL, TITLE, nutrition};
