pub mod assemble;
pub mod sort;

pub use assemble::{assemble_results, percent_of_total};
pub use sort::{compare_entries, paginate, sort_entries, Pagination, SortDirection};
