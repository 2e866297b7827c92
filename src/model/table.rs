//! Tabular data view - the filter / paginate / export engine
//!
//! A `TableView` owns a record collection together with its `FilterState`
//! and derives everything else (filtered set, visible page, stats, CSV)
//! on demand. Each dataset plugs in through the `Dataset` trait, which
//! supplies a declarative `TableSchema`.

use anyhow::Result;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selection value meaning "no restriction" for a discrete filter
pub const ALL: &str = "All";

// ═══════════════════════════════════════════════════════════════════════════════
// Schema
// ═══════════════════════════════════════════════════════════════════════════════

/// One table column: header label, cell accessor, and whether the
/// free-text search looks at it
pub struct Column<R> {
    pub label: &'static str,
    pub value: fn(&R) -> String,
    pub searchable: bool,
}

impl<R> Column<R> {
    pub fn new(label: &'static str, value: fn(&R) -> String) -> Self {
        Self {
            label,
            value,
            searchable: false,
        }
    }

    /// Include this column in free-text search
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }
}

/// A value the free-text search looks at without it being a column.
/// Records for which the accessor yields `None` never match on it.
pub struct SearchField<R> {
    pub name: &'static str,
    pub value: fn(&R) -> Option<String>,
}

impl<R> SearchField<R> {
    pub fn new(name: &'static str, value: fn(&R) -> Option<String>) -> Self {
        Self { name, value }
    }
}

/// Where a discrete filter gets its allowed values from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOptions {
    /// A fixed set of values known up front (e.g. status enums)
    Fixed(&'static [&'static str]),
    /// Distinct values of the full collection, in order of first occurrence
    Derived,
}

/// A categorical predicate restricting one field to a single value or "All"
pub struct FilterDef<R> {
    pub key: &'static str,
    pub label: &'static str,
    pub value: fn(&R) -> String,
    pub options: FilterOptions,
}

/// Declarative configuration for one dataset
pub struct TableSchema<R> {
    /// Dataset label, used as the export file prefix
    pub label: &'static str,
    /// Human-readable title for the view
    pub title: &'static str,
    pub columns: Vec<Column<R>>,
    /// Searched in addition to the searchable columns
    pub search_fields: Vec<SearchField<R>>,
    pub filters: Vec<FilterDef<R>>,
    /// Fixed maximum rows per page
    pub page_size: usize,
    /// Placeholder shown when the filtered set is empty
    pub empty_message: &'static str,
}

impl<R> TableSchema<R> {
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label).collect()
    }

    pub fn filter(&self, key: &str) -> Option<&FilterDef<R>> {
        self.filters.iter().find(|f| f.key == key)
    }

    /// Render a record as one cell per column
    pub fn row(&self, record: &R) -> Vec<String> {
        self.columns.iter().map(|c| (c.value)(record)).collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Dataset Trait
// ═══════════════════════════════════════════════════════════════════════════════

/// A labelled figure shown above a table
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

impl StatCard {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Aggregates that know how to present themselves as stat cards
pub trait StatSummary {
    fn cards(&self) -> Vec<StatCard>;
}

/// A record type that can back a `TableView`
pub trait Dataset: Sized {
    type Stats: StatSummary;

    fn schema() -> TableSchema<Self>;

    /// Stable identifier of the record
    fn id(&self) -> &str;

    /// Aggregate over the filtered set. `all` is the full collection for
    /// figures that are defined over everything loaded.
    fn stats(filtered: &[&Self], all: &[Self]) -> Self::Stats;
}

// ═══════════════════════════════════════════════════════════════════════════════
// Filter State
// ═══════════════════════════════════════════════════════════════════════════════

/// The transient query: search term, discrete selections, and current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub selections: BTreeMap<&'static str, String>,
    /// 1-based page number
    pub page: usize,
}

impl FilterState {
    fn for_schema<R>(schema: &TableSchema<R>) -> Self {
        Self {
            search_term: String::new(),
            selections: schema
                .filters
                .iter()
                .map(|f| (f.key, ALL.to_string()))
                .collect(),
            page: 1,
        }
    }

    /// Current selection for a filter key ("All" when unset)
    pub fn selection(&self, key: &str) -> &str {
        self.selections.get(key).map(String::as_str).unwrap_or(ALL)
    }

    /// Whether any predicate narrows the collection
    pub fn is_filtering(&self) -> bool {
        !self.search_term.is_empty() || self.selections.values().any(|v| v != ALL)
    }
}

/// How exported cell values are quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportQuoting {
    /// Wrap every value in double quotes without escaping embedded quotes.
    /// The header row is written bare.
    #[default]
    Verbatim,
    /// RFC 4180 quoting: every field quoted, embedded quotes doubled
    Escaped,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Table View
// ═══════════════════════════════════════════════════════════════════════════════

/// A queryable, paginated, exportable view over an owned record collection
pub struct TableView<R: Dataset> {
    schema: TableSchema<R>,
    records: Vec<R>,
    state: FilterState,
}

impl<R: Dataset> TableView<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self::with_schema(R::schema(), records)
    }

    pub fn with_schema(schema: TableSchema<R>, records: Vec<R>) -> Self {
        let state = FilterState::for_schema(&schema);
        Self {
            schema,
            records,
            state,
        }
    }

    pub fn schema(&self) -> &TableSchema<R> {
        &self.schema
    }

    /// The full, unfiltered collection in insertion order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn page(&self) -> usize {
        self.state.page
    }

    pub fn search_term(&self) -> &str {
        &self.state.search_term
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Predicates
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the free-text term and go back to page 1
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.state.page = 1;
    }

    /// Select a value for a discrete filter and go back to page 1.
    ///
    /// Returns false (leaving state untouched) when the key is unknown or the
    /// value is neither "All" nor one of the filter's allowed values.
    pub fn set_filter(&mut self, key: &str, value: &str) -> bool {
        let Some(def) = self.schema.filter(key) else {
            return false;
        };
        if value != ALL && !self.allowed_values(def).iter().any(|v| v == value) {
            return false;
        }
        let key = def.key;
        self.state.selections.insert(key, value.to_string());
        self.state.page = 1;
        true
    }

    /// Reset every predicate
    pub fn clear_filters(&mut self) {
        self.state = FilterState::for_schema(&self.schema);
    }

    /// Allowed values for a filter, "All" first, as a select list shows them
    pub fn filter_options(&self, key: &str) -> Vec<String> {
        let Some(def) = self.schema.filter(key) else {
            return Vec::new();
        };
        std::iter::once(ALL.to_string())
            .chain(self.allowed_values(def))
            .collect()
    }

    fn allowed_values(&self, def: &FilterDef<R>) -> Vec<String> {
        match def.options {
            FilterOptions::Fixed(values) => values.iter().map(|v| v.to_string()).collect(),
            FilterOptions::Derived => {
                let mut seen: Vec<String> = Vec::new();
                for record in &self.records {
                    let value = (def.value)(record);
                    if !seen.contains(&value) {
                        seen.push(value);
                    }
                }
                seen
            }
        }
    }

    fn matches(&self, record: &R, term: &str) -> bool {
        let passes_filters = self.schema.filters.iter().all(|def| {
            let selected = self.state.selection(def.key);
            selected == ALL || (def.value)(record) == selected
        });
        if !passes_filters {
            return false;
        }

        if term.is_empty() {
            return true;
        }
        let in_columns = self
            .schema
            .columns
            .iter()
            .filter(|c| c.searchable)
            .any(|c| (c.value)(record).to_lowercase().contains(term));
        in_columns
            || self.schema.search_fields.iter().any(|f| {
                (f.value)(record).is_some_and(|v| v.to_lowercase().contains(term))
            })
    }

    /// Every record surviving the discrete and free-text predicates, in
    /// collection order
    pub fn filtered(&self) -> Vec<&R> {
        let term = self.state.search_term.to_lowercase();
        self.records
            .iter()
            .filter(|record| self.matches(record, &term))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination
    // ─────────────────────────────────────────────────────────────────────────

    fn pages_for(&self, count: usize) -> usize {
        count.div_ceil(self.schema.page_size.max(1)).max(1)
    }

    /// Number of pages in the filtered set, never less than 1
    pub fn total_pages(&self) -> usize {
        self.pages_for(self.filtered().len())
    }

    /// Move to page `n`, clamped into `[1, total_pages]`
    pub fn set_page(&mut self, n: usize) {
        self.state.page = n.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.state.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.state.page.saturating_sub(1));
    }

    pub fn first_page(&mut self) {
        self.set_page(1);
    }

    pub fn last_page(&mut self) {
        self.set_page(self.total_pages());
    }

    pub fn has_previous(&self) -> bool {
        self.state.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.state.page < self.total_pages()
    }

    /// The slice of the filtered set on the current page
    pub fn visible(&self) -> Vec<&R> {
        let size = self.schema.page_size.max(1);
        let start = (self.state.page - 1) * size;
        self.filtered().into_iter().skip(start).take(size).collect()
    }

    /// `(first, last, total)` for a "Showing X to Y of Z results" caption.
    /// `first` and `last` are 1-based and both zero when nothing matches.
    pub fn showing_range(&self) -> (usize, usize, usize) {
        let total = self.filtered().len();
        if total == 0 {
            return (0, 0, 0);
        }
        let size = self.schema.page_size.max(1);
        let first = (self.state.page - 1) * size + 1;
        let last = (self.state.page * size).min(total);
        (first, last, total)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Put a newly discovered record at the front of the collection
    pub fn prepend(&mut self, record: R) {
        self.records.insert(0, record);
        self.state.page = 1;
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived Output
    // ─────────────────────────────────────────────────────────────────────────

    pub fn compute_stats(&self) -> R::Stats {
        R::stats(&self.filtered(), &self.records)
    }

    /// Serialise the filtered set (not just the visible page) as CSV.
    ///
    /// One header line followed by one line per record, joined by `\n` with
    /// no terminator after the last line. Writing into memory cannot fail in
    /// practice; the `Result` only carries the csv writer's signature.
    pub fn export_csv(&self, quoting: ExportQuoting) -> Result<Vec<u8>> {
        let rows: Vec<Vec<String>> = self
            .filtered()
            .into_iter()
            .map(|record| self.schema.row(record))
            .collect();
        write_csv(&self.schema.headers(), &rows, quoting)
    }
}

fn write_csv(headers: &[&str], rows: &[Vec<String>], quoting: ExportQuoting) -> Result<Vec<u8>> {
    let quote_style = match quoting {
        ExportQuoting::Verbatim => QuoteStyle::Never,
        ExportQuoting::Escaped => QuoteStyle::Always,
    };
    let mut writer = WriterBuilder::new()
        .quote_style(quote_style)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(headers)?;
    for row in rows {
        match quoting {
            ExportQuoting::Verbatim => {
                writer.write_record(row.iter().map(|cell| format!("\"{}\"", cell)))?
            }
            ExportQuoting::Escaped => writer.write_record(row)?,
        }
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to finish CSV export: {}", e))?;
    // Lines are separators, not terminators
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(bytes)
}

#[cfg(test)]
#[path = "table_proptests.rs"]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        name: String,
        kind: String,
    }

    struct ItemStats {
        total: usize,
    }

    impl StatSummary for ItemStats {
        fn cards(&self) -> Vec<StatCard> {
            vec![StatCard::new("Total", self.total.to_string())]
        }
    }

    impl Dataset for Item {
        type Stats = ItemStats;

        fn schema() -> TableSchema<Self> {
            TableSchema {
                label: "items",
                title: "Items",
                columns: vec![
                    Column::new("Name", |i: &Item| i.name.clone()).searchable(),
                    Column::new("Kind", |i: &Item| i.kind.clone()),
                ],
                search_fields: vec![SearchField::new("id", |i: &Item| {
                    (i.id != "4").then(|| format!("#{}", i.id))
                })],
                filters: vec![FilterDef {
                    key: "kind",
                    label: "Kind",
                    value: |i: &Item| i.kind.clone(),
                    options: FilterOptions::Derived,
                }],
                page_size: 2,
                empty_message: "Nothing here",
            }
        }

        fn id(&self) -> &str {
            &self.id
        }

        fn stats(filtered: &[&Self], _all: &[Self]) -> ItemStats {
            ItemStats {
                total: filtered.len(),
            }
        }
    }

    fn item(id: &str, name: &str, kind: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            kind: kind.to_string(),
        }
    }

    fn sample() -> TableView<Item> {
        TableView::new(vec![
            item("1", "Alpha", "b"),
            item("2", "Beta", "a"),
            item("3", "Gamma", "b"),
            item("4", "alphabet", "c"),
            item("5", "Delta", "a"),
        ])
    }

    fn ids(records: &[&Item]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut view = sample();
        view.set_search_term("ALPHA");
        assert_eq!(ids(&view.filtered()), vec!["1", "4"]);
    }

    #[test]
    fn test_search_ignores_non_searchable_columns() {
        let mut view = sample();
        view.set_search_term("c");
        // "c" only appears in the Kind column of item 4, which is not searchable
        assert!(view.filtered().is_empty());
    }

    #[test]
    fn test_search_fields_match_only_when_present() {
        let mut view = sample();
        view.set_search_term("#2");
        assert_eq!(ids(&view.filtered()), vec!["2"]);
        // Item 4 has no search value, so its id never matches
        view.set_search_term("#4");
        assert!(view.filtered().is_empty());
        // Search-only values are not exported
        assert_eq!(view.schema().headers(), vec!["Name", "Kind"]);
    }

    #[test]
    fn test_derived_options_follow_first_occurrence() {
        let view = sample();
        assert_eq!(view.filter_options("kind"), vec!["All", "b", "a", "c"]);
        assert!(view.filter_options("missing").is_empty());
    }

    #[test]
    fn test_set_filter_rejects_unknown_values() {
        let mut view = sample();
        assert!(!view.set_filter("kind", "z"));
        assert!(!view.set_filter("nope", "a"));
        assert_eq!(view.state().selection("kind"), ALL);
        assert!(view.set_filter("kind", "a"));
        assert_eq!(ids(&view.filtered()), vec!["2", "5"]);
    }

    #[test]
    fn test_filters_and_search_combine() {
        let mut view = sample();
        view.set_filter("kind", "b");
        view.set_search_term("gam");
        assert_eq!(ids(&view.filtered()), vec!["3"]);
    }

    #[test]
    fn test_predicate_changes_reset_page() {
        let mut view = sample();
        view.set_page(3);
        assert_eq!(view.page(), 3);
        view.set_search_term("");
        assert_eq!(view.page(), 1);

        view.set_page(2);
        view.set_filter("kind", ALL);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn test_page_clamping() {
        let mut view = sample();
        assert_eq!(view.total_pages(), 3);
        view.set_page(0);
        assert_eq!(view.page(), 1);
        view.set_page(99);
        assert_eq!(view.page(), 3);
        assert_eq!(ids(&view.visible()), vec!["5"]);
        assert!(!view.has_next());
        assert!(view.has_previous());
    }

    #[test]
    fn test_empty_result_keeps_single_page() {
        let mut view = sample();
        view.set_search_term("zzz");
        assert_eq!(view.total_pages(), 1);
        view.set_page(4);
        assert_eq!(view.page(), 1);
        assert!(view.visible().is_empty());
        assert_eq!(view.showing_range(), (0, 0, 0));
        assert!(!view.has_previous());
        assert!(!view.has_next());
    }

    #[test]
    fn test_showing_range() {
        let mut view = sample();
        assert_eq!(view.showing_range(), (1, 2, 5));
        view.last_page();
        assert_eq!(view.showing_range(), (5, 5, 5));
    }

    #[test]
    fn test_prepend_goes_to_front() {
        let mut view = sample();
        view.set_page(2);
        view.prepend(item("9", "Omega", "a"));
        assert_eq!(view.page(), 1);
        assert_eq!(view.records()[0].id, "9");
        assert!(view.contains_id("9"));
        assert_eq!(view.filter_options("kind"), vec!["All", "a", "b", "c"]);
    }

    #[test]
    fn test_export_covers_filtered_set_not_page() {
        let mut view = sample();
        view.set_filter("kind", "a");
        view.set_page(1);
        let csv = String::from_utf8(view.export_csv(ExportQuoting::Verbatim).unwrap()).unwrap();
        assert_eq!(csv, "Name,Kind\n\"Beta\",\"a\"\n\"Delta\",\"a\"");
    }

    #[test]
    fn test_export_empty_is_header_only() {
        let mut view = sample();
        view.set_search_term("zzz");
        let csv = String::from_utf8(view.export_csv(ExportQuoting::Verbatim).unwrap()).unwrap();
        assert_eq!(csv, "Name,Kind");
    }

    #[test]
    fn test_verbatim_export_does_not_escape_quotes() {
        let view = TableView::new(vec![item("1", "say \"hi\"", "a")]);
        let csv = String::from_utf8(view.export_csv(ExportQuoting::Verbatim).unwrap()).unwrap();
        assert_eq!(csv, "Name,Kind\n\"say \"hi\"\",\"a\"");
    }

    #[test]
    fn test_escaped_export_doubles_quotes() {
        let view = TableView::new(vec![item("1", "say \"hi\", twice", "a")]);
        let csv = String::from_utf8(view.export_csv(ExportQuoting::Escaped).unwrap()).unwrap();
        assert_eq!(
            csv,
            "\"Name\",\"Kind\"\n\"say \"\"hi\"\", twice\",\"a\""
        );
    }

    #[test]
    fn test_clear_filters() {
        let mut view = sample();
        view.set_filter("kind", "a");
        view.set_search_term("x");
        assert!(view.state().is_filtering());
        view.clear_filters();
        assert!(!view.state().is_filtering());
        assert_eq!(view.filtered().len(), 5);
    }

    #[test]
    fn test_stats_follow_filtered_set() {
        let mut view = sample();
        view.set_filter("kind", "b");
        assert_eq!(view.compute_stats().cards()[0].value, "2");
    }
}
