pub mod pagination;
pub mod results_table;
pub mod search_page;

pub use pagination::PaginationControls;
pub use results_table::ResultsTable;
pub use search_page::SearchPage;
