use super::*;
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: String,
    text: String,
    group: String,
}

struct RowStats;

impl StatSummary for RowStats {
    fn cards(&self) -> Vec<StatCard> {
        Vec::new()
    }
}

impl Dataset for Row {
    type Stats = RowStats;

    fn schema() -> TableSchema<Self> {
        TableSchema {
            label: "rows",
            title: "Rows",
            columns: vec![
                Column::new("Text", |r: &Row| r.text.clone()).searchable(),
                Column::new("Group", |r: &Row| r.group.clone()),
            ],
            search_fields: Vec::new(),
            filters: vec![FilterDef {
                key: "group",
                label: "Group",
                value: |r: &Row| r.group.clone(),
                options: FilterOptions::Fixed(&["red", "green", "blue"]),
            }],
            page_size: 3,
            empty_message: "empty",
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn stats(_filtered: &[&Self], _all: &[Self]) -> RowStats {
        RowStats
    }
}

/// Rows with short lowercase text so random terms hit often
fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        (
            "[a-d]{0,6}",
            prop::sample::select(vec!["red", "green", "blue"]),
        ),
        0..25,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (text, group))| Row {
                id: i.to_string(),
                text,
                group: group.to_string(),
            })
            .collect()
    })
}

fn group_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["All", "red", "green", "blue"])
}

proptest! {
    /// Every filtered record satisfies the selected group
    #[test]
    fn prop_filtered_records_match_selection(
        rows in rows_strategy(),
        group in group_strategy()
    ) {
        let mut view = TableView::new(rows);
        prop_assert!(view.set_filter("group", group));
        for record in view.filtered() {
            prop_assert!(group == ALL || record.group == group);
        }
    }

    /// Every filtered record contains the term in a searchable column
    #[test]
    fn prop_search_results_contain_term(
        rows in rows_strategy(),
        term in "[a-dA-D]{1,2}"
    ) {
        let mut view = TableView::new(rows);
        view.set_search_term(term.clone());
        let needle = term.to_lowercase();
        for record in view.filtered() {
            prop_assert!(record.text.to_lowercase().contains(&needle));
        }
    }

    /// Without predicates the filtered set is the whole collection in order
    #[test]
    fn prop_no_predicates_keeps_everything(rows in rows_strategy()) {
        let view = TableView::new(rows.clone());
        let filtered: Vec<Row> = view.filtered().into_iter().cloned().collect();
        prop_assert_eq!(filtered, rows);
    }

    /// Setting the same page twice is the same as setting it once
    #[test]
    fn prop_set_page_is_idempotent(rows in rows_strategy(), page in 0usize..15) {
        let mut view = TableView::new(rows);
        view.set_page(page);
        let once = view.page();
        view.set_page(page);
        prop_assert_eq!(view.page(), once);
    }

    /// Walking every page reproduces the filtered set exactly
    #[test]
    fn prop_pages_concatenate_to_filtered(
        rows in rows_strategy(),
        group in group_strategy()
    ) {
        let mut view = TableView::new(rows);
        view.set_filter("group", group);
        let expected: Vec<String> = view.filtered().iter().map(|r| r.id.clone()).collect();

        let mut seen = Vec::new();
        for page in 1..=view.total_pages() {
            view.set_page(page);
            let visible = view.visible();
            prop_assert!(visible.len() <= view.schema().page_size);
            seen.extend(visible.iter().map(|r| r.id.clone()));
        }
        prop_assert_eq!(seen, expected);
    }

    /// Out-of-range pages clamp to the first or last page
    #[test]
    fn prop_page_clamps(rows in rows_strategy()) {
        let mut view = TableView::new(rows);
        let total = view.total_pages();
        prop_assert!(total >= 1);

        view.set_page(0);
        prop_assert_eq!(view.page(), 1);
        view.set_page(total + 5);
        prop_assert_eq!(view.page(), total);
    }

    /// Changing a predicate always lands on page 1
    #[test]
    fn prop_predicate_change_resets_page(
        rows in rows_strategy(),
        page in 1usize..10,
        group in group_strategy(),
        term in "[a-d]{0,2}"
    ) {
        let mut view = TableView::new(rows);
        view.set_page(page);
        view.set_filter("group", group);
        prop_assert_eq!(view.page(), 1);

        view.set_page(page);
        view.set_search_term(term);
        prop_assert_eq!(view.page(), 1);
    }

    /// Export has a header plus one line per filtered record, in order,
    /// with no newline after the last line
    #[test]
    fn prop_export_lines_follow_filtered_set(
        rows in rows_strategy(),
        group in group_strategy(),
        term in "[a-d]{0,2}"
    ) {
        let mut view = TableView::new(rows);
        view.set_filter("group", group);
        view.set_search_term(term);

        let bytes = view.export_csv(ExportQuoting::Verbatim).unwrap();
        let csv = String::from_utf8(bytes).unwrap();
        prop_assert!(!csv.ends_with('\n'));
        let lines: Vec<&str> = csv.split('\n').collect();
        let filtered = view.filtered();

        prop_assert_eq!(lines.len(), filtered.len() + 1);
        prop_assert_eq!(lines[0], "Text,Group");
        for (line, record) in lines.iter().skip(1).zip(filtered) {
            let expected = format!("\"{}\",\"{}\"", record.text, record.group);
            prop_assert_eq!(*line, expected.as_str());
        }
    }
}
