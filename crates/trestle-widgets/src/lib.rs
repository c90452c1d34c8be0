//! Widgets for Trestle: a sortable, selectable data table and a styled text field.

pub mod data_table;
pub mod field;
pub mod record;
pub mod selection;
pub mod sort;

pub use data_table::{
    BodyState, CellRenderer, DataTable, RowSelectCallback, SortIcon, TableColumn, TableHit,
    TableSelectionChanged, TableSortChanged, TextAlign, EMPTY_MESSAGE, LOADING_ROW_COUNT,
};
pub use field::{
    ChangeCallback, Field, FieldChanged, FieldMessage, FieldSize, FieldVariant,
    DEFAULT_PLACEHOLDER,
};
pub use record::{CellValue, TableRecord};
pub use selection::SelectionSet;
pub use sort::{ActiveSort, SortDirection, SortState};
