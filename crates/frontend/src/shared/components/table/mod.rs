pub mod number_format;
pub mod sortable_header_cell;

pub use number_format::format_amount;
pub use sortable_header_cell::SortableHeaderCell;
