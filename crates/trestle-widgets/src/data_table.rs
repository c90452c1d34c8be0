//! `DataTable` widget for displaying sortable, selectable tabular data.

use crate::record::TableRecord;
use crate::selection::SelectionSet;
use crate::sort::{SortDirection, SortState};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};
use trestle_core::{
    palette,
    widget::{AccessibleRole, LayoutResult, TextStyle},
    Canvas, ClassList, Color, Constraints, Element, Event, FontWeight, MouseButton, Node, Point,
    Rect, Size, TypeId, Widget,
};

/// Number of placeholder rows shown while loading.
pub const LOADING_ROW_COUNT: usize = 5;

/// Text of the placeholder row shown when there is nothing to display.
pub const EMPTY_MESSAGE: &str = "No data available.";

const DEFAULT_COLUMN_WIDTH: f32 = 160.0;
const CELL_PADDING_X: f32 = 24.0;
const CHECKBOX_SIZE: f32 = 16.0;

const WRAPPER_CLASSES: &str = "overflow-x-auto rounded-lg border border-gray-200";
const TABLE_CLASSES: &str = "min-w-full divide-y divide-gray-200 bg-white";
const HEAD_CLASSES: &str = "bg-gray-50";
const BODY_CLASSES: &str = "divide-y divide-gray-200";
const CHECKBOX_HEADER_CLASSES: &str = "px-6 py-3 text-left";
const HEADER_CLASSES: &str =
    "px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500 cursor-pointer";
const CHECKBOX_CLASSES: &str = "h-4 w-4 rounded border-gray-300 text-blue-600 focus:ring-blue-500";
const CHECKBOX_CELL_CLASSES: &str = "px-6 py-4";
const CELL_CLASSES: &str = "whitespace-nowrap px-6 py-4 text-sm text-gray-800";
const SKELETON_CELL_CLASSES: &str = "px-6 py-4";
const SKELETON_BAR_CLASSES: &str = "h-4 bg-gray-200 rounded animate-pulse";
const SKELETON_BOX_CLASSES: &str = "h-4 w-4 bg-gray-200 rounded animate-pulse";
const EMPTY_CELL_CLASSES: &str = "px-6 py-12 text-center text-gray-500";
const ROW_CLASSES: &str = "hover:bg-gray-50";
const SELECTED_ROW_CLASSES: &str = "bg-blue-50";

/// Custom cell renderer: turns a row into the cell's content.
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> Node + Send + Sync>;

/// Callback invoked with the selected rows whenever the selection changes.
pub type RowSelectCallback<T> = Box<dyn FnMut(&[T]) + Send + Sync>;

/// Column definition for a data table.
pub struct TableColumn<T> {
    /// Column key (field name in the row)
    pub key: String,
    /// Display header
    pub header: String,
    /// Column width when painted (None = default)
    pub width: Option<f32>,
    /// Text alignment when painted
    pub align: TextAlign,
    render: Option<CellRenderer<T>>,
}

impl<T> TableColumn<T> {
    /// Create a new column.
    #[must_use]
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width: None,
            align: TextAlign::Left,
            render: None,
        }
    }

    /// Set column width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width.max(20.0));
        self
    }

    /// Set text alignment.
    #[must_use]
    pub const fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Render cells with `render` instead of the raw field value.
    #[must_use]
    pub fn render(mut self, render: impl Fn(&T) -> Node + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Check if the column has a custom renderer.
    #[must_use]
    pub const fn has_renderer(&self) -> bool {
        self.render.is_some()
    }

    fn painted_width(&self) -> f32 {
        self.width.unwrap_or(DEFAULT_COLUMN_WIDTH)
    }
}

impl<T: TableRecord> TableColumn<T> {
    /// Content of this column's cell for `row`.
    #[must_use]
    pub fn cell(&self, row: &T) -> Node {
        match &self.render {
            Some(render) => render(row),
            None => Node::text(row.field(&self.key).display()),
        }
    }
}

impl<T> Clone for TableColumn<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            width: self.width,
            align: self.align,
            render: self.render.clone(),
        }
    }
}

impl<T> fmt::Debug for TableColumn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableColumn")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("render", &self.render.is_some())
            .finish()
    }
}

/// Text alignment within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    /// Text starts after the cell padding
    #[default]
    Left,
    /// Text is centered on the cell
    Center,
    /// Text ends before the cell padding
    Right,
}

/// Icon shown next to a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIcon {
    /// Column is not the sorted column
    Unsorted,
    /// Column is sorted ascending
    Ascending,
    /// Column is sorted descending
    Descending,
}

impl SortIcon {
    /// Icon for a column sorted in `direction` (or not sorted).
    #[must_use]
    pub const fn for_direction(direction: Option<SortDirection>) -> Self {
        match direction {
            None => Self::Unsorted,
            Some(SortDirection::Ascending) => Self::Ascending,
            Some(SortDirection::Descending) => Self::Descending,
        }
    }

    /// Icon name, used as `data-icon` in markup.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unsorted => "sort",
            Self::Ascending => "sort-up",
            Self::Descending => "sort-down",
        }
    }

    /// Glyph drawn on canvas.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Unsorted => "\u{21c5}",
            Self::Ascending => "\u{25b2}",
            Self::Descending => "\u{25bc}",
        }
    }

    const fn classes(self) -> &'static str {
        match self {
            Self::Unsorted => "inline ml-1 text-gray-400",
            Self::Ascending | Self::Descending => "inline ml-1",
        }
    }

    fn view(self) -> Node {
        Element::new("span")
            .class(self.classes())
            .attr("data-icon", self.name())
            .attr("aria-hidden", "true")
            .child(self.glyph())
            .into()
    }
}

/// What the table body currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    /// Placeholder rows while data is loading
    Loading,
    /// A single "no data" row
    Empty,
    /// One row per data item
    Rows(usize),
}

/// Region of the painted table under a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableHit {
    /// The header checkbox cell
    SelectAll,
    /// A column header, by column index
    Header(usize),
    /// A row's checkbox cell, by position in the sorted view
    RowCheckbox(usize),
}

/// Message emitted when table sorting changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSortChanged {
    /// Column key being sorted
    pub column: String,
    /// Sort direction
    pub direction: SortDirection,
}

/// Message emitted when the row selection changes.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSelectionChanged<T> {
    /// Selected rows, in data order
    pub rows: Vec<T>,
}

/// `DataTable` widget for displaying tabular data.
///
/// Clicking a column header sorts by that column (clicking it again flips
/// the direction). With `selectable` on, each row gets a checkbox and the
/// header gets a select-all checkbox; every selection change is reported
/// through the `on_row_select` callback with the selected rows.
pub struct DataTable<T: TableRecord> {
    /// Column definitions
    columns: Vec<TableColumn<T>>,
    /// Row data, in host order
    data: Vec<T>,
    /// Whether data is still loading
    loading: bool,
    /// Whether rows are selectable
    selectable: bool,
    /// Selection callback
    on_row_select: Option<RowSelectCallback<T>>,
    /// Extra wrapper classes
    class: Option<String>,
    /// Current sort
    sort: SortState,
    /// Selected row ids
    selection: SelectionSet<T::Id>,
    /// Row height
    row_height: f32,
    /// Header height
    header_height: f32,
    /// Width of the checkbox column
    checkbox_width: f32,
    /// Header background color
    header_bg: Color,
    /// Row background color
    row_bg: Color,
    /// Selected row background color
    selected_bg: Color,
    /// Border color
    border_color: Color,
    /// Text color
    text_color: Color,
    /// Header text color
    header_text_color: Color,
    /// Placeholder bar color
    skeleton_color: Color,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
}

impl<T: TableRecord> Default for DataTable<T> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            data: Vec::new(),
            loading: false,
            selectable: false,
            on_row_select: None,
            class: None,
            sort: SortState::new(),
            selection: SelectionSet::new(),
            row_height: 52.0,
            header_height: 40.0,
            checkbox_width: 64.0,
            header_bg: palette::GRAY_50,
            row_bg: Color::WHITE,
            selected_bg: palette::BLUE_50,
            border_color: palette::GRAY_200,
            text_color: palette::GRAY_800,
            header_text_color: palette::GRAY_500,
            skeleton_color: palette::GRAY_200,
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }
}

impl<T: TableRecord> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("rows", &self.data.len())
            .field("loading", &self.loading)
            .field("selectable", &self.selectable)
            .field("sort", &self.sort)
            .field("selected", &self.selection.len())
            .finish_non_exhaustive()
    }
}

impl<T: TableRecord> DataTable<T> {
    /// Create a new empty data table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn<T>) -> Self {
        self.columns.push(column);
        self
    }

    /// Add multiple columns.
    #[must_use]
    pub fn columns(mut self, columns: impl IntoIterator<Item = TableColumn<T>>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Add rows.
    #[must_use]
    pub fn data(mut self, rows: impl IntoIterator<Item = T>) -> Self {
        self.data.extend(rows);
        self
    }

    /// Show loading placeholders instead of data.
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Enable row selection.
    #[must_use]
    pub const fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Set the selection callback.
    #[must_use]
    pub fn on_row_select(mut self, callback: impl FnMut(&[T]) + Send + Sync + 'static) -> Self {
        self.on_row_select = Some(Box::new(callback));
        self
    }

    /// Add wrapper classes after the built-in ones.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set row height.
    #[must_use]
    pub fn row_height(mut self, height: f32) -> Self {
        self.row_height = height.max(20.0);
        self
    }

    /// Set header height.
    #[must_use]
    pub fn header_height(mut self, height: f32) -> Self {
        self.header_height = height.max(20.0);
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Replace the rows. Sort and selection state are kept as they are.
    pub fn set_data(&mut self, rows: Vec<T>) {
        self.data = rows;
    }

    /// Toggle the loading placeholders.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Get column count.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get row count.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get columns.
    #[must_use]
    pub fn get_columns(&self) -> &[TableColumn<T>] {
        &self.columns
    }

    /// Get rows in host order.
    #[must_use]
    pub fn get_data(&self) -> &[T] {
        &self.data
    }

    /// Check if placeholders are shown.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Check if rows are selectable.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Current sort.
    #[must_use]
    pub const fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &SelectionSet<T::Id> {
        &self.selection
    }

    /// Check if a row is selected.
    #[must_use]
    pub fn is_selected(&self, id: &T::Id) -> bool {
        self.selection.contains(id)
    }

    /// Header checkbox state.
    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(self.data.len())
    }

    /// Rows in display order.
    #[must_use]
    pub fn sorted_rows(&self) -> Vec<&T> {
        self.sort.apply(&self.data)
    }

    /// Selected rows in data order.
    #[must_use]
    pub fn selected_rows(&self) -> Vec<&T> {
        self.selection.filter(&self.data)
    }

    /// What the body shows right now.
    #[must_use]
    pub fn body_state(&self) -> BodyState {
        if self.loading {
            BodyState::Loading
        } else if self.data.is_empty() {
            BodyState::Empty
        } else {
            BodyState::Rows(self.data.len())
        }
    }

    /// Icon shown next to the header of `column`.
    #[must_use]
    pub fn sort_icon(&self, column: &str) -> SortIcon {
        SortIcon::for_direction(self.sort.direction_for(column))
    }

    /// Handle a click on the header of `column`. Returns the new direction.
    pub fn click_header(&mut self, column: &str) -> SortDirection {
        let direction = self.sort.toggle(column);
        debug!(column, ?direction, "table sort changed");
        direction
    }

    // ===== Geometry =====

    fn checkbox_column_width(&self) -> f32 {
        if self.selectable {
            self.checkbox_width
        } else {
            0.0
        }
    }

    /// Calculate total width.
    fn calculate_width(&self) -> f32 {
        let columns: f32 = self.columns.iter().map(TableColumn::painted_width).sum();
        (self.checkbox_column_width() + columns).max(100.0)
    }

    fn body_row_count(&self) -> usize {
        match self.body_state() {
            BodyState::Loading => LOADING_ROW_COUNT,
            BodyState::Empty => 1,
            BodyState::Rows(n) => n,
        }
    }

    /// Calculate total height.
    fn calculate_height(&self) -> f32 {
        (self.body_row_count() as f32).mul_add(self.row_height, self.header_height)
    }

    /// Get row Y position.
    fn row_y(&self, index: usize) -> f32 {
        (index as f32).mul_add(self.row_height, self.bounds.y + self.header_height)
    }

    /// Left edge of each column, after the checkbox column.
    fn column_xs(&self) -> impl Iterator<Item = (f32, &TableColumn<T>)> {
        let mut x = self.bounds.x + self.checkbox_column_width();
        self.columns.iter().map(move |col| {
            let left = x;
            x += col.painted_width();
            (left, col)
        })
    }

    /// Find which interactive region of the laid-out table contains `point`.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<TableHit> {
        if !self.bounds.contains_point(&point) {
            return None;
        }
        let in_checkbox_column =
            self.selectable && point.x < self.bounds.x + self.checkbox_column_width();

        if point.y < self.bounds.y + self.header_height {
            if in_checkbox_column {
                return Some(TableHit::SelectAll);
            }
            return self
                .column_xs()
                .position(|(left, col)| point.x >= left && point.x < left + col.painted_width())
                .map(TableHit::Header);
        }

        let BodyState::Rows(count) = self.body_state() else {
            return None;
        };
        if !in_checkbox_column {
            return None;
        }
        let offset = point.y - self.bounds.y - self.header_height;
        let index = (offset / self.row_height).floor() as usize;
        (index < count).then_some(TableHit::RowCheckbox(index))
    }

    // ===== Markup =====

    fn checkbox_input(checked: bool) -> Element {
        Element::new("input")
            .attr("type", "checkbox")
            .class(CHECKBOX_CLASSES)
            .flag("checked", checked)
    }

    fn header_cell(&self, col: &TableColumn<T>) -> Node {
        Element::new("th")
            .attr("scope", "col")
            .attr("data-column", col.key.as_str())
            .class(HEADER_CLASSES)
            .child(col.header.as_str())
            .child(self.sort_icon(&col.key).view())
            .into()
    }

    fn header_row(&self) -> Element {
        let select_all = self.selectable.then(|| {
            Element::new("th").class(CHECKBOX_HEADER_CLASSES).child(
                Self::checkbox_input(self.is_all_selected()).attr("data-select", "all"),
            )
        });
        Element::new("tr")
            .child_opt(select_all)
            .children(self.columns.iter().map(|col| self.header_cell(col)))
    }

    fn loading_rows(&self) -> Vec<Node> {
        (0..LOADING_ROW_COUNT)
            .map(|_| -> Node {
                let checkbox = self.selectable.then(|| {
                    Element::new("td")
                        .class(SKELETON_CELL_CLASSES)
                        .child(Element::new("div").class(SKELETON_BOX_CLASSES))
                });
                Element::new("tr")
                    .attr("data-placeholder", "loading")
                    .child_opt(checkbox)
                    .children(self.columns.iter().map(|_| {
                        Node::from(
                            Element::new("td")
                                .class(SKELETON_CELL_CLASSES)
                                .child(Element::new("div").class(SKELETON_BAR_CLASSES)),
                        )
                    }))
                    .into()
            })
            .collect()
    }

    fn empty_row(&self) -> Node {
        let span = self.columns.len() + usize::from(self.selectable);
        Element::new("tr")
            .attr("data-placeholder", "empty")
            .child(
                Element::new("td")
                    .attr("colspan", span.to_string())
                    .class(EMPTY_CELL_CLASSES)
                    .child(EMPTY_MESSAGE),
            )
            .into()
    }

    fn data_row(&self, row: &T) -> Node {
        let id = row.id();
        let selected = self.selection.contains(&id);
        let checkbox = self.selectable.then(|| {
            Element::new("td").class(CHECKBOX_CELL_CLASSES).child(
                Self::checkbox_input(selected).attr("data-select", id.to_string()),
            )
        });
        Element::new("tr")
            .attr("data-row-id", id.to_string())
            .classes(ClassList::from(ROW_CLASSES).with_if(selected, SELECTED_ROW_CLASSES))
            .child_opt(checkbox)
            .children(self.columns.iter().map(|col| {
                Node::from(Element::new("td").class(CELL_CLASSES).child(col.cell(row)))
            }))
            .into()
    }

    fn body_rows(&self) -> Vec<Node> {
        match self.body_state() {
            BodyState::Loading => self.loading_rows(),
            BodyState::Empty => vec![self.empty_row()],
            BodyState::Rows(_) => self
                .sorted_rows()
                .into_iter()
                .map(|row| self.data_row(row))
                .collect(),
        }
    }

    // ===== Painting =====

    fn paint_checkbox(canvas: &mut dyn Canvas, cell: Rect, checked: bool) {
        let check = cell.centered_square(CHECKBOX_SIZE);
        if checked {
            canvas.fill_rounded_rect(check, 4.0, palette::BLUE_600);
            let inner = check.inset(4.0);
            canvas.draw_line(
                Point::new(inner.x, inner.center().y),
                Point::new(inner.center().x, inner.bottom()),
                Color::WHITE,
                2.0,
            );
            canvas.draw_line(
                Point::new(inner.center().x, inner.bottom()),
                Point::new(inner.right(), inner.y),
                Color::WHITE,
                2.0,
            );
        } else {
            canvas.fill_rounded_rect(check, 4.0, Color::WHITE);
            canvas.stroke_rect(check, palette::GRAY_300, 1.0);
        }
    }

    fn text_x(align: TextAlign, left: f32, width: f32) -> f32 {
        match align {
            TextAlign::Left => left + CELL_PADDING_X,
            TextAlign::Center => left + width / 2.0,
            TextAlign::Right => left + width - CELL_PADDING_X,
        }
    }

    fn paint_header(&self, canvas: &mut dyn Canvas) {
        let header_rect = Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.header_height,
        );
        canvas.fill_rect(header_rect, self.header_bg);

        if self.selectable {
            let cell = Rect::new(
                self.bounds.x,
                self.bounds.y,
                self.checkbox_width,
                self.header_height,
            );
            Self::paint_checkbox(canvas, cell, self.is_all_selected());
        }

        let style = TextStyle::sized(12.0, self.header_text_color).weight(FontWeight::Medium);
        let text_y = self.bounds.y + self.header_height / 2.0;
        for (left, col) in self.column_xs() {
            let label = format!(
                "{} {}",
                col.header.to_uppercase(),
                self.sort_icon(&col.key).glyph()
            );
            canvas.draw_text(
                &label,
                Point::new(Self::text_x(TextAlign::Left, left, col.painted_width()), text_y),
                &style,
            );
        }
    }

    fn paint_loading(&self, canvas: &mut dyn Canvas) {
        for index in 0..LOADING_ROW_COUNT {
            let row_y = self.row_y(index);
            canvas.fill_rect(
                Rect::new(self.bounds.x, row_y, self.bounds.width, self.row_height),
                self.row_bg,
            );
            if self.selectable {
                let cell = Rect::new(self.bounds.x, row_y, self.checkbox_width, self.row_height);
                canvas.fill_rounded_rect(
                    cell.centered_square(CHECKBOX_SIZE),
                    4.0,
                    self.skeleton_color,
                );
            }
            for (left, col) in self.column_xs() {
                let cell = Rect::new(left, row_y, col.painted_width(), self.row_height);
                let bar = Rect::new(
                    cell.x + CELL_PADDING_X,
                    cell.center().y - 8.0,
                    2.0f32.mul_add(-CELL_PADDING_X, cell.width).max(0.0),
                    16.0,
                );
                canvas.fill_rounded_rect(bar, 4.0, self.skeleton_color);
            }
        }
    }

    fn paint_empty(&self, canvas: &mut dyn Canvas) {
        let row = Rect::new(
            self.bounds.x,
            self.row_y(0),
            self.bounds.width,
            self.row_height,
        );
        canvas.fill_rect(row, self.row_bg);
        canvas.draw_text(
            EMPTY_MESSAGE,
            row.center(),
            &TextStyle::sized(14.0, palette::GRAY_500),
        );
    }

    fn paint_rows(&self, canvas: &mut dyn Canvas) {
        let style = TextStyle::sized(14.0, self.text_color);
        for (index, row) in self.sorted_rows().into_iter().enumerate() {
            let row_y = self.row_y(index);
            let selected = self.selection.contains(&row.id());
            let bg = if selected {
                self.selected_bg
            } else {
                self.row_bg
            };
            canvas.fill_rect(
                Rect::new(self.bounds.x, row_y, self.bounds.width, self.row_height),
                bg,
            );

            if self.selectable {
                let cell = Rect::new(self.bounds.x, row_y, self.checkbox_width, self.row_height);
                Self::paint_checkbox(canvas, cell, selected);
            }

            let text_y = row_y + self.row_height / 2.0;
            for (left, col) in self.column_xs() {
                let text = col.cell(row).text_content();
                let x = Self::text_x(col.align, left, col.painted_width());
                canvas.draw_text(&text, Point::new(x, text_y), &style);
            }
        }
    }

    fn paint_dividers(&self, canvas: &mut dyn Canvas) {
        for index in 0..self.body_row_count() {
            let y = self.row_y(index);
            canvas.draw_line(
                Point::new(self.bounds.x, y),
                Point::new(self.bounds.right(), y),
                self.border_color,
                1.0,
            );
        }
    }
}

impl<T: TableRecord + Clone> DataTable<T> {
    /// Handle a click on the checkbox of the row with `id`.
    ///
    /// Returns the selected rows after the change, or `None` when the table
    /// is not selectable.
    pub fn toggle_row(&mut self, id: &T::Id) -> Option<Vec<T>> {
        if !self.selectable {
            trace!(row = %id, "row toggle ignored, table not selectable");
            return None;
        }
        let selected = self.selection.toggle(id);
        debug!(row = %id, selected, "row selection toggled");
        Some(self.notify_selection())
    }

    /// Handle a change of the header checkbox.
    ///
    /// Checking selects every current row, unchecking clears the selection.
    /// Returns the selected rows after the change, or `None` when the table
    /// is not selectable.
    pub fn set_all_selected(&mut self, checked: bool) -> Option<Vec<T>> {
        if !self.selectable {
            trace!(checked, "select-all ignored, table not selectable");
            return None;
        }
        if checked {
            self.selection
                .select_all(self.data.iter().map(TableRecord::id));
        } else {
            self.selection.clear();
        }
        debug!(checked, selected = self.selection.len(), "select-all changed");
        Some(self.notify_selection())
    }

    fn notify_selection(&mut self) -> Vec<T> {
        let rows: Vec<T> = self
            .selection
            .filter(&self.data)
            .into_iter()
            .cloned()
            .collect();
        if let Some(callback) = self.on_row_select.as_mut() {
            callback(&rows);
        }
        rows
    }
}

impl<T> Widget for DataTable<T>
where
    T: TableRecord + Clone + Send + Sync + 'static,
    T::Id: Send + Sync,
{
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let preferred = Size::new(self.calculate_width(), self.calculate_height());
        constraints.constrain(preferred)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.paint_header(canvas);

        match self.body_state() {
            BodyState::Loading => self.paint_loading(canvas),
            BodyState::Empty => self.paint_empty(canvas),
            BodyState::Rows(_) => self.paint_rows(canvas),
        }

        self.paint_dividers(canvas);

        let border_rect = Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.calculate_height().min(self.bounds.height),
        );
        canvas.stroke_rect(border_rect, self.border_color, 1.0);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let Event::MouseDown {
            position,
            button: MouseButton::Left,
        } = event
        else {
            return None;
        };

        let Some(hit) = self.hit_test(*position) else {
            trace!(x = position.x, y = position.y, "click outside interactive regions");
            return None;
        };

        match hit {
            TableHit::SelectAll => {
                let checked = !self.is_all_selected();
                let rows = self.set_all_selected(checked)?;
                Some(Box::new(TableSelectionChanged { rows }))
            }
            TableHit::Header(index) => {
                let column = self.columns.get(index)?.key.clone();
                let direction = self.click_header(&column);
                Some(Box::new(TableSortChanged { column, direction }))
            }
            TableHit::RowCheckbox(index) => {
                let id = self.sorted_rows().get(index).map(|row| row.id())?;
                let rows = self.toggle_row(&id)?;
                Some(Box::new(TableSelectionChanged { rows }))
            }
        }
    }

    fn view(&self) -> Node {
        let table = Element::new("table")
            .class(TABLE_CLASSES)
            .child(
                Element::new("thead")
                    .class(HEAD_CLASSES)
                    .child(self.header_row()),
            )
            .child(
                Element::new("tbody")
                    .class(BODY_CLASSES)
                    .children(self.body_rows()),
            );
        let table = match &self.accessible_name_value {
            Some(name) => table.attr("aria-label", name.as_str()),
            None => table,
        };

        let wrapper = Element::new("div")
            .classes(ClassList::from(WRAPPER_CLASSES).with_opt(self.class.as_deref()))
            .child(table);
        match &self.test_id_value {
            Some(id) => wrapper.attr("data-testid", id.as_str()).into(),
            None => wrapper.into(),
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn is_focusable(&self) -> bool {
        self.selectable
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Table
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CellValue;
    use std::sync::Mutex;
    use trestle_core::{DrawCommand, RecordingCanvas};

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        id: u32,
        name: String,
        age: u32,
    }

    impl TableRecord for Person {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn field(&self, key: &str) -> CellValue {
            match key {
                "name" => self.name.as_str().into(),
                "age" => self.age.into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn person(id: u32, name: &str, age: u32) -> Person {
        Person {
            id,
            name: name.to_string(),
            age,
        }
    }

    fn people() -> Vec<Person> {
        vec![
            person(1, "Cody", 45),
            person(2, "Anna", 28),
            person(3, "Bea", 32),
        ]
    }

    fn columns() -> Vec<TableColumn<Person>> {
        vec![
            TableColumn::new("name", "Name").width(100.0),
            TableColumn::new("age", "Age").width(100.0),
        ]
    }

    fn table() -> DataTable<Person> {
        DataTable::new().columns(columns()).data(people())
    }

    fn ids(rows: &[&Person]) -> Vec<u32> {
        rows.iter().map(|p| p.id).collect()
    }

    fn body_rows(node: &Node) -> Vec<&Element> {
        node.find_by_tag("tbody")[0]
            .children
            .iter()
            .filter_map(Node::as_element)
            .collect()
    }

    // ===== TableColumn Tests =====

    #[test]
    fn test_table_column_new() {
        let col: TableColumn<Person> = TableColumn::new("name", "Name");
        assert_eq!(col.key, "name");
        assert_eq!(col.header, "Name");
        assert!(col.width.is_none());
        assert!(!col.has_renderer());
    }

    #[test]
    fn test_table_column_width_min() {
        let col: TableColumn<Person> = TableColumn::new("id", "ID").width(5.0);
        assert_eq!(col.width, Some(20.0));
    }

    #[test]
    fn test_table_column_cell_raw_value() {
        let col = TableColumn::new("age", "Age");
        assert_eq!(col.cell(&person(1, "A", 30)).text_content(), "30");
    }

    #[test]
    fn test_table_column_renderer_takes_precedence() {
        let col = TableColumn::new("name", "Name")
            .render(|p: &Person| Element::new("strong").child(p.name.to_uppercase()).into());
        let cell = col.cell(&person(1, "ann", 30));
        assert_eq!(cell.text_content(), "ANN");
        assert_eq!(cell.find_by_tag("strong").len(), 1);
    }

    #[test]
    fn test_table_column_clone_shares_renderer() {
        let col = TableColumn::new("name", "Name").render(|_: &Person| Node::text("x"));
        let copy = col.clone();
        assert!(copy.has_renderer());
        assert_eq!(copy.cell(&person(1, "a", 1)).text_content(), "x");
    }

    #[test]
    fn test_text_align_default() {
        assert_eq!(TextAlign::default(), TextAlign::Left);
    }

    // ===== Construction Tests =====

    #[test]
    fn test_data_table_new() {
        let table: DataTable<Person> = DataTable::new();
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.row_count(), 0);
        assert!(!table.is_loading());
        assert!(!table.is_selectable());
        assert!(table.sort_state().active().is_none());
        assert!(table.selection().is_empty());
    }

    #[test]
    fn test_data_table_builder() {
        let table = table()
            .selectable(true)
            .loading(true)
            .class("shadow")
            .accessible_name("People")
            .test_id("people-table");
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 3);
        assert!(table.is_selectable());
        assert!(table.is_loading());
        assert_eq!(Widget::accessible_name(&table), Some("People"));
        assert_eq!(Widget::test_id(&table), Some("people-table"));
    }

    #[test]
    fn test_columns_keep_display_order() {
        let table = table();
        let keys: Vec<_> = table.get_columns().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["name", "age"]);
    }

    // ===== Sort Tests =====

    #[test]
    fn test_click_header_sorts_ascending_then_descending() {
        let mut table = table();
        assert_eq!(table.click_header("name"), SortDirection::Ascending);
        assert_eq!(ids(&table.sorted_rows()), vec![2, 3, 1]);

        assert_eq!(table.click_header("name"), SortDirection::Descending);
        assert_eq!(ids(&table.sorted_rows()), vec![1, 3, 2]);

        assert_eq!(table.click_header("name"), SortDirection::Ascending);
        assert_eq!(ids(&table.sorted_rows()), vec![2, 3, 1]);
    }

    #[test]
    fn test_switching_column_resets_direction() {
        let mut table = table();
        table.click_header("name");
        table.click_header("name");
        assert_eq!(table.click_header("age"), SortDirection::Ascending);
        assert_eq!(ids(&table.sorted_rows()), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_does_not_mutate_data() {
        let mut table = table();
        table.click_header("age");
        assert_eq!(table.get_data(), people().as_slice());
    }

    #[test]
    fn test_two_row_example() {
        let mut table = DataTable::new()
            .columns(columns())
            .data(vec![person(1, "B", 0), person(2, "A", 0)]);
        table.click_header("name");
        assert_eq!(ids(&table.sorted_rows()), vec![2, 1]);
        table.click_header("name");
        assert_eq!(ids(&table.sorted_rows()), vec![1, 2]);
    }

    #[test]
    fn test_sort_icons() {
        let mut table = table();
        assert_eq!(table.sort_icon("name"), SortIcon::Unsorted);
        table.click_header("name");
        assert_eq!(table.sort_icon("name"), SortIcon::Ascending);
        assert_eq!(table.sort_icon("age"), SortIcon::Unsorted);
        table.click_header("name");
        assert_eq!(table.sort_icon("name"), SortIcon::Descending);
    }

    // ===== Selection Tests =====

    #[test]
    fn test_toggle_row_reports_selected_rows() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut table = table()
            .selectable(true)
            .on_row_select(move |rows: &[Person]| {
                sink.lock().unwrap().push(rows.iter().map(|p| p.id).collect::<Vec<_>>());
            });

        table.toggle_row(&3);
        table.toggle_row(&1);
        table.toggle_row(&3);

        assert_eq!(*seen.lock().unwrap(), vec![vec![3], vec![1, 3], vec![1]]);
        assert!(table.is_selected(&1));
        assert!(!table.is_selected(&3));
    }

    #[test]
    fn test_selection_reported_in_data_order_when_sorted() {
        let mut table = table().selectable(true);
        table.click_header("name");
        table.toggle_row(&2);
        let rows = table.toggle_row(&1).unwrap();
        assert_eq!(rows.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_select_all_then_deselect_one() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut table = table()
            .selectable(true)
            .on_row_select(move |rows: &[Person]| sink.lock().unwrap().push(rows.to_vec()));

        table.set_all_selected(true);
        assert!(table.is_all_selected());
        table.toggle_row(&2);

        let calls = seen.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].len(), 3);
        let last = &calls[1];
        assert_eq!(last.len(), 2);
        assert!(last.iter().all(|p| p.id != 2));
        assert!(!table.is_all_selected());
    }

    #[test]
    fn test_unselect_all_reports_empty() {
        let mut table = table().selectable(true);
        table.set_all_selected(true);
        let rows = table.set_all_selected(false).unwrap();
        assert!(rows.is_empty());
        assert!(table.selection().is_empty());
    }

    #[test]
    fn test_all_selected_false_for_empty_data() {
        let mut table: DataTable<Person> = DataTable::new().columns(columns()).selectable(true);
        table.set_all_selected(true);
        assert!(!table.is_all_selected());
    }

    #[test]
    fn test_selection_ignored_when_not_selectable() {
        let calls = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&calls);
        let mut table = table().on_row_select(move |_: &[Person]| *sink.lock().unwrap() += 1);

        assert!(table.toggle_row(&1).is_none());
        assert!(table.set_all_selected(true).is_none());
        assert!(table.selection().is_empty());
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_stale_selection_survives_data_change() {
        let mut table = table().selectable(true);
        table.toggle_row(&1);
        table.toggle_row(&2);
        table.set_data(vec![person(2, "Anna", 28), person(4, "Dan", 50)]);

        assert_eq!(table.selection().len(), 2);
        assert_eq!(ids(&table.selected_rows()), vec![2]);
        // Count-based header state is fooled by the stale id.
        assert!(table.is_all_selected());
    }

    // ===== Body State Tests =====

    #[test]
    fn test_body_state_priority() {
        assert_eq!(table().loading(true).body_state(), BodyState::Loading);
        let empty: DataTable<Person> = DataTable::new().loading(true);
        assert_eq!(empty.body_state(), BodyState::Loading);
        let empty: DataTable<Person> = DataTable::new();
        assert_eq!(empty.body_state(), BodyState::Empty);
        assert_eq!(table().body_state(), BodyState::Rows(3));
    }

    #[test]
    fn test_set_loading_replaces_rows_with_placeholders() {
        let mut table = table();
        assert_eq!(body_rows(&table.view()).len(), 3);

        table.set_loading(true);
        let node = table.view();
        let rows = body_rows(&node);
        assert_eq!(rows.len(), LOADING_ROW_COUNT);
        assert!(rows
            .iter()
            .all(|row| row.get_attr("data-placeholder") == Some("loading")));
        assert!(node.find_by_attr("data-row-id", "1").is_empty());

        table.set_loading(false);
        assert_eq!(table.body_state(), BodyState::Rows(3));
    }

    // ===== Markup Tests =====

    #[test]
    fn test_view_loading_renders_five_placeholders() {
        for data in [Vec::new(), people()] {
            let table = DataTable::new()
                .columns(columns())
                .data(data)
                .loading(true)
                .selectable(true);
            let node = table.view();
            let rows = body_rows(&node);
            assert_eq!(rows.len(), LOADING_ROW_COUNT);
            for row in rows {
                assert_eq!(row.get_attr("data-placeholder"), Some("loading"));
                // One skeleton per column plus the checkbox skeleton.
                assert_eq!(row.children.len(), 3);
            }
            assert!(node.find_by_attr("data-row-id", "1").is_empty());
        }
    }

    #[test]
    fn test_view_empty_renders_single_spanning_row() {
        let table: DataTable<Person> = DataTable::new().columns(columns());
        let node = table.view();
        let rows = body_rows(&node);
        assert_eq!(rows.len(), 1);
        let cell = rows[0].children[0].as_element().unwrap();
        assert_eq!(cell.get_attr("colspan"), Some("2"));
        assert_eq!(cell.text_content(), EMPTY_MESSAGE);
    }

    #[test]
    fn test_view_empty_span_counts_checkbox_column() {
        let table: DataTable<Person> = DataTable::new().columns(columns()).selectable(true);
        let node = table.view();
        let cell = body_rows(&node)[0].children[0].as_element().unwrap();
        assert_eq!(cell.get_attr("colspan"), Some("3"));
    }

    #[test]
    fn test_view_rows_follow_sort() {
        let mut table = table();
        table.click_header("age");
        let node = table.view();
        let order: Vec<_> = body_rows(&node)
            .iter()
            .filter_map(|row| row.get_attr("data-row-id"))
            .collect();
        assert_eq!(order, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_view_header_icons() {
        let mut table = table();
        table.click_header("age");
        table.click_header("age");
        let node = table.view();
        let age = node.find_by_attr("data-column", "age")[0];
        let icon = age.children[1].as_element().unwrap();
        assert_eq!(icon.get_attr("data-icon"), Some("sort-down"));
        let name = node.find_by_attr("data-column", "name")[0];
        let icon = name.children[1].as_element().unwrap();
        assert_eq!(icon.get_attr("data-icon"), Some("sort"));
        assert!(icon.has_class("text-gray-400"));
    }

    #[test]
    fn test_view_selection_markup() {
        let mut table = table().selectable(true);
        table.toggle_row(&3);
        let node = table.view();

        let select_all = node.find_by_attr("data-select", "all")[0];
        assert!(!select_all.has_attr("checked"));
        let row = node.find_by_attr("data-row-id", "3")[0];
        assert!(row.has_class("bg-blue-50"));
        let checkbox = node.find_by_attr("data-select", "3")[0];
        assert!(checkbox.has_attr("checked"));
        let other = node.find_by_attr("data-row-id", "1")[0];
        assert!(!other.has_class("bg-blue-50"));

        table.set_all_selected(true);
        let node = table.view();
        assert!(node.find_by_attr("data-select", "all")[0].has_attr("checked"));
    }

    #[test]
    fn test_view_no_checkboxes_when_not_selectable() {
        let node = table().view();
        assert!(node.find_by_attr("type", "checkbox").is_empty());
    }

    #[test]
    fn test_view_custom_renderer_and_class_override() {
        let table = DataTable::new()
            .column(
                TableColumn::new("name", "Name")
                    .render(|p: &Person| Element::new("em").child(p.name.as_str()).into()),
            )
            .data(people())
            .class("mt-4");
        let node = table.view();
        let wrapper = node.as_element().unwrap();
        assert!(wrapper.has_class("overflow-x-auto"));
        assert!(wrapper.has_class("mt-4"));
        assert_eq!(node.find_by_tag("em").len(), 3);
    }

    #[test]
    fn test_to_html_contains_structure() {
        let html = table().test_id("people").to_html();
        assert!(html.starts_with("<div class=\"overflow-x-auto"));
        assert!(html.contains("data-testid=\"people\""));
        assert!(html.contains("scope=\"col\""));
        assert!(html.contains(">Anna</td>"));
    }

    // ===== Widget Trait Tests =====

    #[test]
    fn test_data_table_type_id() {
        let table: DataTable<Person> = DataTable::new();
        assert_eq!(Widget::type_id(&table), TypeId::of::<DataTable<Person>>());
    }

    #[test]
    fn test_data_table_measure() {
        let table = table().header_height(40.0).row_height(30.0);
        let size = table.measure(Constraints::loose(Size::new(1000.0, 1000.0)));
        assert_eq!(size.width, 200.0);
        assert_eq!(size.height, 40.0 + 90.0);
    }

    #[test]
    fn test_data_table_measure_placeholders() {
        let loading = table().loading(true).header_height(40.0).row_height(30.0);
        let size = loading.measure(Constraints::unbounded());
        assert_eq!(size.height, 40.0 + 150.0);

        let empty: DataTable<Person> = DataTable::new()
            .columns(columns())
            .header_height(40.0)
            .row_height(30.0)
            .selectable(true);
        let size = empty.measure(Constraints::unbounded());
        assert_eq!(size.height, 70.0);
        assert_eq!(size.width, 264.0);
    }

    #[test]
    fn test_data_table_layout() {
        let mut table = table();
        let bounds = Rect::new(10.0, 20.0, 500.0, 300.0);
        let result = table.layout(bounds);
        assert_eq!(result.size, Size::new(500.0, 300.0));
        assert_eq!(Widget::bounds(&table), bounds);
    }

    #[test]
    fn test_data_table_accessibility() {
        let table = table();
        assert_eq!(table.accessible_role(), AccessibleRole::Table);
        assert!(table.is_interactive());
        assert!(!table.is_focusable());
        assert!(table.selectable(true).is_focusable());
    }

    // ===== Hit Test / Event Tests =====

    fn laid_out(table: DataTable<Person>) -> DataTable<Person> {
        let mut table = table.header_height(40.0).row_height(40.0);
        table.layout(Rect::new(0.0, 0.0, 400.0, 400.0));
        table
    }

    #[test]
    fn test_hit_test_regions() {
        let table = laid_out(table().selectable(true));
        // checkbox column is 64 wide, then two 100-wide columns
        assert_eq!(table.hit_test(Point::new(10.0, 10.0)), Some(TableHit::SelectAll));
        assert_eq!(table.hit_test(Point::new(80.0, 10.0)), Some(TableHit::Header(0)));
        assert_eq!(table.hit_test(Point::new(170.0, 10.0)), Some(TableHit::Header(1)));
        assert_eq!(table.hit_test(Point::new(300.0, 10.0)), None);
        assert_eq!(table.hit_test(Point::new(10.0, 50.0)), Some(TableHit::RowCheckbox(0)));
        assert_eq!(table.hit_test(Point::new(10.0, 125.0)), Some(TableHit::RowCheckbox(2)));
        assert_eq!(table.hit_test(Point::new(10.0, 165.0)), None);
        assert_eq!(table.hit_test(Point::new(100.0, 50.0)), None);
        assert_eq!(table.hit_test(Point::new(-1.0, 10.0)), None);
    }

    #[test]
    fn test_hit_test_no_row_checkboxes_while_loading() {
        let table = laid_out(table().selectable(true).loading(true));
        assert_eq!(table.hit_test(Point::new(10.0, 50.0)), None);
        assert_eq!(table.hit_test(Point::new(10.0, 10.0)), Some(TableHit::SelectAll));
    }

    #[test]
    fn test_event_header_click_sorts() {
        let mut table = laid_out(table());
        let msg = table.event(&Event::click(20.0, 10.0)).unwrap();
        let msg = msg.downcast::<TableSortChanged>().unwrap();
        assert_eq!(msg.column, "name");
        assert_eq!(msg.direction, SortDirection::Ascending);

        let msg = table.event(&Event::click(20.0, 10.0)).unwrap();
        let msg = msg.downcast::<TableSortChanged>().unwrap();
        assert_eq!(msg.direction, SortDirection::Descending);
    }

    #[test]
    fn test_event_select_all_does_not_sort() {
        let mut table = laid_out(table().selectable(true));
        let msg = table.event(&Event::click(10.0, 10.0)).unwrap();
        let msg = msg.downcast::<TableSelectionChanged<Person>>().unwrap();
        assert_eq!(msg.rows.len(), 3);
        assert!(table.sort_state().active().is_none());

        // Clicking again clears the selection.
        let msg = table.event(&Event::click(10.0, 10.0)).unwrap();
        let msg = msg.downcast::<TableSelectionChanged<Person>>().unwrap();
        assert!(msg.rows.is_empty());
    }

    #[test]
    fn test_event_row_checkbox_uses_sorted_position() {
        let mut table = laid_out(table().selectable(true));
        table.click_header("name");
        // First sorted row is Anna (id 2).
        let msg = table.event(&Event::click(10.0, 50.0)).unwrap();
        let msg = msg.downcast::<TableSelectionChanged<Person>>().unwrap();
        assert_eq!(msg.rows, vec![person(2, "Anna", 28)]);
        assert_eq!(table.sort_state().direction(), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_event_header_click_keeps_selection() {
        let mut table = laid_out(table().selectable(true));
        table.toggle_row(&1);
        table.event(&Event::click(80.0, 10.0));
        assert!(table.is_selected(&1));
        assert_eq!(table.selection().len(), 1);
    }

    #[test]
    fn test_event_ignores_other_input() {
        let mut table = laid_out(table().selectable(true));
        assert!(table.event(&Event::text("x")).is_none());
        let right_click = Event::MouseDown {
            position: Point::new(10.0, 10.0),
            button: MouseButton::Right,
        };
        assert!(table.event(&right_click).is_none());
        assert!(table.selection().is_empty());
    }

    // ===== Paint Tests =====

    #[test]
    fn test_paint_rows() {
        let table = laid_out(table());
        let mut canvas = RecordingCanvas::new();
        table.paint(&mut canvas);
        let texts = canvas.texts();
        assert!(texts.contains(&"Cody"));
        assert!(texts.contains(&"45"));
        assert!(texts.iter().any(|t| t.starts_with("NAME")));
    }

    fn text_x(canvas: &RecordingCanvas, text: &str) -> Option<f32> {
        canvas.commands().iter().find_map(|cmd| match cmd {
            DrawCommand::Text {
                content, position, ..
            } if content == text => Some(position.x),
            _ => None,
        })
    }

    #[test]
    fn test_paint_cell_alignment() {
        let table = laid_out(DataTable::new().data(people()).columns([
            TableColumn::new("name", "Name")
                .width(100.0)
                .align(TextAlign::Center),
            TableColumn::new("age", "Age")
                .width(100.0)
                .align(TextAlign::Right),
        ]));
        let mut canvas = RecordingCanvas::new();
        table.paint(&mut canvas);
        // Columns span 0..100 and 100..200; cell padding is 24.
        assert_eq!(text_x(&canvas, "Cody"), Some(50.0));
        assert_eq!(text_x(&canvas, "45"), Some(176.0));
    }

    #[test]
    fn test_paint_loading_draws_skeletons() {
        let table = laid_out(table().loading(true));
        let mut canvas = RecordingCanvas::new();
        table.paint(&mut canvas);
        // Two columns times five rows of skeleton bars; header shares the color
        // only with the border, which is stroked, not filled.
        assert_eq!(canvas.fill_count(palette::GRAY_200), 2 * LOADING_ROW_COUNT);
        assert!(!canvas.texts().contains(&"Cody"));
    }

    #[test]
    fn test_paint_empty_message() {
        let table: DataTable<Person> = laid_out(DataTable::new().columns(columns()));
        let mut canvas = RecordingCanvas::new();
        table.paint(&mut canvas);
        assert!(canvas.texts().contains(&EMPTY_MESSAGE));
    }

    #[test]
    fn test_paint_selected_row_highlight() {
        let mut table = laid_out(table().selectable(true));
        table.toggle_row(&2);
        let mut canvas = RecordingCanvas::new();
        table.paint(&mut canvas);
        assert_eq!(canvas.fill_count(palette::BLUE_50), 1);
        assert_eq!(canvas.fill_count(palette::BLUE_600), 1);
    }
}
