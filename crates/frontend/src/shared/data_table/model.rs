//! Pure view-model of the generic data table.
//!
//! Pipeline applied by [`derive_view`], in this order:
//! 1. free-text search: case-insensitive substring match over the configured
//!    search fields only;
//! 2. equality filters, one per configured [`FilterDef`];
//! 3. single-key sort (numbers numerically, everything else by a
//!    case-insensitive collation);
//! 4. pagination with the requested page clamped into range.

use leptos::prelude::AnyView;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::hash::Hash;

pub const DEFAULT_PAGE_SIZE: usize = 10;

// ============================================================================
// Descriptors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn class(&self) -> &'static str {
        match self {
            Align::Left => "table__cell--left",
            Align::Center => "table__cell--center",
            Align::Right => "table__cell--right",
        }
    }
}

/// Column of a [`super::DataTable`]. `cell` overrides the default rendering
/// of the row's field as plain text.
pub struct ColumnDef<T> {
    pub key: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    pub align: Align,
    /// Minimum width in pixels.
    pub width: Option<f64>,
    pub cell: Option<fn(&T) -> AnyView>,
}

impl<T> ColumnDef<T> {
    pub fn new(key: &'static str, header: &'static str) -> Self {
        Self {
            key,
            header,
            sortable: false,
            align: Align::Left,
            width: None,
            cell: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn cell(mut self, render: fn(&T) -> AnyView) -> Self {
        self.cell = Some(render);
        self
    }
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            header: self.header,
            sortable: self.sortable,
            align: self.align,
            width: self.width,
            cell: self.cell,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Dropdown filter keeping rows whose `key` field equals the chosen value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDef {
    pub key: &'static str,
    pub label: String,
    pub options: Vec<FilterOption>,
}

impl FilterDef {
    pub fn new(key: &'static str, label: impl Into<String>, options: Vec<FilterOption>) -> Self {
        Self {
            key,
            label: label.into(),
            options,
        }
    }

    /// Label shown on the filter button: the chosen option or the filter name.
    pub fn button_label(&self, value: &str) -> String {
        if value.is_empty() {
            return self.label.clone();
        }
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.clone())
            .unwrap_or_else(|| self.label.clone())
    }
}

// ============================================================================
// Rows
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

/// A record the data table can show.
pub trait TableRow {
    type Key: Clone + Eq + Hash;

    fn row_key(&self) -> Self::Key;

    /// Value of the field named `key`; [`CellValue::Empty`] for unknown keys.
    fn field(&self, key: &str) -> CellValue;
}

// ============================================================================
// Sorting
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Header click: the active key flips direction, any other key becomes
    /// active in ascending order.
    pub fn toggle(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.key = Some(key.to_string());
            self.direction = SortDirection::Asc;
        }
    }

    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        (self.key.as_deref() == Some(key)).then_some(self.direction)
    }
}

/// Case-insensitive first; among equal letters lowercase sorts first.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Number(x), CellValue::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        _ => collate(&a.display(), &b.display()),
    }
}

// ============================================================================
// Query
// ============================================================================

/// Everything the user controls in the toolbar, header and pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub search: String,
    pub filter_values: BTreeMap<String, String>,
    pub sort: SortState,
    /// 1-based.
    pub page: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter_values: BTreeMap::new(),
            sort: SortState::default(),
            page: 1,
        }
    }
}

impl TableQuery {
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    pub fn set_filter(&mut self, key: &str, value: String) {
        if value.is_empty() {
            self.filter_values.remove(key);
        } else {
            self.filter_values.insert(key.to_string(), value);
        }
        self.page = 1;
    }

    pub fn clear_filter(&mut self, key: &str) {
        self.set_filter(key, String::new());
    }

    pub fn filter_value(&self, key: &str) -> &str {
        self.filter_values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.filter_values.clear();
        self.page = 1;
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.trim().is_empty() || self.filter_values.values().any(|v| !v.is_empty())
    }

    pub fn toggle_sort(&mut self, key: &str) {
        self.sort.toggle(key);
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

// ============================================================================
// Derived view
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct TableView<T> {
    pub rows: Vec<T>,
    /// Rows left after search and filters, before pagination.
    pub filtered_count: usize,
    /// Always at least 1.
    pub total_pages: usize,
    /// Requested page clamped into `1..=total_pages`.
    pub page: usize,
    pub page_size: usize,
}

impl<T> TableView<T> {
    /// 1-based index of the first row on the page, 0 when nothing matched.
    pub fn range_start(&self) -> usize {
        if self.filtered_count == 0 {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    pub fn range_end(&self) -> usize {
        (self.page * self.page_size).min(self.filtered_count)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

fn matches_search<T: TableRow>(row: &T, search_fields: &[&str], needle: &str) -> bool {
    search_fields
        .iter()
        .any(|f| row.field(f).display().to_lowercase().contains(needle))
}

pub fn derive_view<T>(
    data: &[T],
    search_fields: &[&str],
    filters: &[FilterDef],
    query: &TableQuery,
    page_size: usize,
) -> TableView<T>
where
    T: TableRow + Clone,
{
    let page_size = page_size.max(1);
    let mut rows: Vec<&T> = data.iter().collect();

    if !query.search.trim().is_empty() && !search_fields.is_empty() {
        let needle = query.search.to_lowercase();
        rows.retain(|row| matches_search(*row, search_fields, &needle));
    }

    for filter in filters {
        let value = query.filter_value(filter.key);
        if !value.is_empty() {
            rows.retain(|row| row.field(filter.key).display() == value);
        }
    }

    if let Some(key) = query.sort.key.as_deref() {
        let direction = query.sort.direction;
        rows.sort_by(|a, b| {
            let cmp = compare_cells(&a.field(key), &b.field(key));
            match direction {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        });
    }

    let filtered_count = rows.len();
    let total_pages = filtered_count.div_ceil(page_size).max(1);
    let page = query.page.clamp(1, total_pages);
    let rows = rows
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    TableView {
        rows,
        filtered_count,
        total_pages,
        page,
        page_size,
    }
}

// ============================================================================
// Pager
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page buttons to render: first, last, and the current page with its
/// neighbours; every gap between them becomes a single ellipsis.
pub fn page_numbers(total_pages: usize, current: usize) -> Vec<PageItem> {
    let mut items = Vec::new();
    let mut prev: Option<usize> = None;
    for p in 1..=total_pages.max(1) {
        let visible = p == 1 || p == total_pages || p.abs_diff(current) <= 1;
        if !visible {
            continue;
        }
        if let Some(prev) = prev {
            if p - prev > 1 {
                items.push(PageItem::Ellipsis);
            }
        }
        items.push(PageItem::Page(p));
        prev = Some(p);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        title: &'static str,
        kind: &'static str,
        views: f64,
    }

    impl TableRow for Row {
        type Key = u32;

        fn row_key(&self) -> u32 {
            self.id
        }

        fn field(&self, key: &str) -> CellValue {
            match key {
                "id" => CellValue::Number(self.id as f64),
                "title" => self.title.into(),
                "kind" => self.kind.into(),
                "views" => CellValue::Number(self.views),
                _ => CellValue::Empty,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, title: "Workshop Santri", kind: "Pendidikan", views: 11.0 },
            Row { id: 2, title: "Bakti Sosial", kind: "Kegiatan", views: 33.0 },
            Row { id: 3, title: "Penerimaan Santri Baru", kind: "Pengumuman", views: 6.0 },
            Row { id: 4, title: "artikel inspiratif", kind: "Artikel", views: 5.0 },
            Row { id: 5, title: "Seminar Kesehatan", kind: "Kegiatan", views: 14.0 },
        ]
    }

    fn ids(view: &TableView<Row>) -> Vec<u32> {
        view.rows.iter().map(|r| r.id).collect()
    }

    fn filters() -> Vec<FilterDef> {
        vec![FilterDef::new(
            "kind",
            "Kategori",
            vec![
                FilterOption::new("Kegiatan", "Kegiatan"),
                FilterOption::new("Artikel", "Artikel"),
            ],
        )]
    }

    #[test]
    fn no_query_keeps_input_order() {
        let view = derive_view(&rows(), &["title"], &[], &TableQuery::default(), 10);
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5]);
        assert_eq!(view.filtered_count, 5);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut query = TableQuery::default();
        query.set_search("SANTRI".into());
        let view = derive_view(&rows(), &["title"], &[], &query, 10);
        assert_eq!(ids(&view), vec![1, 3]);
    }

    #[test]
    fn search_only_looks_at_configured_fields() {
        let mut query = TableQuery::default();
        query.set_search("kegiatan".into());
        let view = derive_view(&rows(), &["title"], &[], &query, 10);
        assert!(view.rows.is_empty());
        assert_eq!(view.range_start(), 0);

        let view = derive_view(&rows(), &["title", "kind"], &[], &query, 10);
        assert_eq!(ids(&view), vec![2, 5]);
    }

    #[test]
    fn search_without_fields_or_blank_is_ignored() {
        let mut query = TableQuery::default();
        query.set_search("zzz".into());
        assert_eq!(derive_view(&rows(), &[], &[], &query, 10).filtered_count, 5);

        query.set_search("   ".into());
        assert_eq!(derive_view(&rows(), &["title"], &[], &query, 10).filtered_count, 5);
    }

    #[test]
    fn filters_match_by_equality() {
        let mut query = TableQuery::default();
        query.set_filter("kind", "Kegiatan".into());
        let view = derive_view(&rows(), &["title"], &filters(), &query, 10);
        assert_eq!(ids(&view), vec![2, 5]);

        query.set_search("bakti".into());
        let view = derive_view(&rows(), &["title"], &filters(), &query, 10);
        assert_eq!(ids(&view), vec![2]);
    }

    #[test]
    fn filter_values_for_unconfigured_keys_are_ignored() {
        let mut query = TableQuery::default();
        query.set_filter("title", "Bakti Sosial".into());
        let view = derive_view(&rows(), &["title"], &filters(), &query, 10);
        assert_eq!(view.filtered_count, 5);
    }

    #[test]
    fn numeric_sort_and_toggle() {
        let mut query = TableQuery::default();
        query.toggle_sort("views");
        let view = derive_view(&rows(), &[], &[], &query, 10);
        assert_eq!(ids(&view), vec![4, 3, 1, 5, 2]);

        query.toggle_sort("views");
        assert_eq!(query.sort.direction, SortDirection::Desc);
        let view = derive_view(&rows(), &[], &[], &query, 10);
        assert_eq!(ids(&view), vec![2, 5, 1, 3, 4]);
    }

    #[test]
    fn string_sort_ignores_case() {
        let mut query = TableQuery::default();
        query.toggle_sort("title");
        let view = derive_view(&rows(), &[], &[], &query, 10);
        assert_eq!(ids(&view), vec![4, 2, 3, 5, 1]);
    }

    #[test]
    fn sorting_a_new_key_resets_to_ascending() {
        let mut sort = SortState::default();
        sort.toggle("title");
        sort.toggle("title");
        assert_eq!(sort.direction, SortDirection::Desc);

        sort.toggle("views");
        assert_eq!(sort.key.as_deref(), Some("views"));
        assert_eq!(sort.direction, SortDirection::Asc);
        assert_eq!(sort.direction_for("views"), Some(SortDirection::Asc));
        assert_eq!(sort.direction_for("title"), None);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let mut query = TableQuery::default();
        query.toggle_sort("kind");
        let view = derive_view(&rows(), &[], &[], &query, 10);
        // Kegiatan rows 2 and 5 stay in input order.
        assert_eq!(ids(&view), vec![4, 2, 5, 1, 3]);
    }

    #[test]
    fn pagination_slices_and_clamps() {
        let mut query = TableQuery::default();
        let view = derive_view(&rows(), &[], &[], &query, 2);
        assert_eq!(view.total_pages, 3);
        assert_eq!(ids(&view), vec![1, 2]);
        assert_eq!((view.range_start(), view.range_end()), (1, 2));
        assert!(!view.has_prev());
        assert!(view.has_next());

        query.set_page(3);
        let view = derive_view(&rows(), &[], &[], &query, 2);
        assert_eq!(ids(&view), vec![5]);
        assert_eq!((view.range_start(), view.range_end()), (5, 5));

        query.set_page(99);
        let view = derive_view(&rows(), &[], &[], &query, 2);
        assert_eq!(view.page, 3);
        assert!(!view.has_next());
    }

    #[test]
    fn empty_result_has_one_page() {
        let view = derive_view::<Row>(&[], &["title"], &[], &TableQuery::default(), 10);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page, 1);
        assert_eq!((view.range_start(), view.range_end()), (0, 0));
    }

    #[test]
    fn search_and_filter_changes_go_back_to_first_page() {
        let mut query = TableQuery::default();
        query.set_page(3);
        query.set_search("a".into());
        assert_eq!(query.page, 1);

        query.set_page(2);
        query.set_filter("kind", "Artikel".into());
        assert_eq!(query.page, 1);
        assert!(query.has_active_filters());

        query.set_page(2);
        query.reset_filters();
        assert_eq!(query.page, 1);
        assert!(!query.has_active_filters());
        assert_eq!(query.filter_value("kind"), "");
    }

    #[test]
    fn clearing_a_filter_deactivates_it() {
        let mut query = TableQuery::default();
        query.set_filter("kind", "Artikel".into());
        query.clear_filter("kind");
        assert!(!query.has_active_filters());
    }

    #[test]
    fn filter_button_label_shows_choice() {
        let f = &filters()[0];
        assert_eq!(f.button_label(""), "Kategori");
        assert_eq!(f.button_label("Artikel"), "Artikel");
        assert_eq!(f.button_label("unknown"), "Kategori");
    }

    #[test]
    fn page_numbers_small_total_shows_all() {
        use PageItem::*;
        assert_eq!(page_numbers(1, 1), vec![Page(1)]);
        assert_eq!(
            page_numbers(5, 3),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn page_numbers_collapse_gaps() {
        use PageItem::*;
        assert_eq!(
            page_numbers(10, 5),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(page_numbers(10, 1), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(page_numbers(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
        assert_eq!(page_numbers(4, 1), vec![Page(1), Page(2), Ellipsis, Page(4)]);
    }

    #[test]
    fn number_cells_display_without_trailing_zero() {
        assert_eq!(CellValue::Number(11.0).display(), "11");
        assert_eq!(CellValue::Empty.display(), "");
    }
}
