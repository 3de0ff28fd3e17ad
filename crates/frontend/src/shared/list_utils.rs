//! List screen helpers: client-side search and pagination.
//!
//! Every resource screen fetches its full list once and then filters,
//! slices, and pages that in-memory array. The helpers here are pure so
//! the screen behavior can be tested without a DOM.

use leptos::prelude::*;

/// Types that can be matched against a free-text search box.
pub trait Searchable {
    /// Case-insensitive substring match over the type's searchable fields.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Filter a list by search text. An empty (or whitespace) filter keeps
/// everything; recomputation is synchronous, there is no debounce.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Case-insensitive `contains` used by `Searchable` implementations.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Number of pages for `total` items, `ceil(total / page_size)`.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Slice out one page (1-based). An out-of-range page clamps to the last
/// page, so the last page is never empty while the list has items.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if items.is_empty() || page_size == 0 {
        return Vec::new();
    }
    let pages = page_count(items.len(), page_size);
    let page = page.clamp(1, pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

/// Add or remove every id on the current page from the selection. Ids
/// selected on other pages are left alone, so paging back and forth does
/// not lose them.
pub fn select_page(selected: &mut Vec<String>, page_ids: &[String], checked: bool) {
    if checked {
        for id in page_ids {
            if !selected.contains(id) {
                selected.push(id.clone());
            }
        }
    } else {
        selected.retain(|id| !page_ids.contains(id));
    }
}

/// True when every row on the current page is selected; drives the
/// checked state of the header select-all checkbox.
pub fn page_selected(selected: &[String], page_ids: &[String]) -> bool {
    !page_ids.is_empty() && page_ids.iter().all(|id| selected.contains(id))
}

/// Search box shared by the list screens. Updates on every keystroke;
/// the caller resets its page to 1 in `on_change`.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            {crate::shared::icons::icon("search")}
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || {
                if value.get().is_empty() {
                    ().into_any()
                } else {
                    view! {
                        <button
                            class="search-input__clear"
                            title="Clear"
                            on:click=move |_| on_change.run(String::new())
                        >
                            {crate::shared::icons::icon("x")}
                        </button>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        name: String,
        mobile: String,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(&self.name, filter) || contains_ci(&self.mobile, filter)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Rahim Uddin".into(),
                mobile: "01712345678".into(),
            },
            Row {
                name: "Karim Mia".into(),
                mobile: "01898765432".into(),
            },
            Row {
                name: "Fatema Begum".into(),
                mobile: "01511112222".into(),
            },
        ]
    }

    #[test]
    fn empty_filter_returns_full_list() {
        let items = rows();
        assert_eq!(filter_list(&items, "").len(), items.len());
        assert_eq!(filter_list(&items, "   ").len(), items.len());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let items = rows();
        let hits = filter_list(&items, "RAHIM");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Rahim Uddin");

        // matches across any searchable field
        let hits = filter_list(&items, "0189");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Karim Mia");
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        assert!(filter_list(&rows(), "zzz").is_empty());
    }

    #[test]
    fn page_count_is_ceiling() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 5), 5);
    }

    #[test]
    fn paginate_displayed_count_property() {
        // displayed = min(page_size, filtered - (page-1)*page_size)
        let items: Vec<u32> = (0..23).collect();
        let page_size = 10;
        for page in 1..=page_count(items.len(), page_size) {
            let displayed = paginate(&items, page, page_size).len();
            let expected = page_size.min(items.len() - (page - 1) * page_size);
            assert_eq!(displayed, expected, "page {}", page);
        }
    }

    #[test]
    fn last_page_never_empty_for_nonempty_list() {
        let items: Vec<u32> = (0..21).collect();
        let last = page_count(items.len(), 10);
        assert!(!paginate(&items, last, 10).is_empty());
        // out-of-range page clamps to the last page rather than going blank
        assert_eq!(paginate(&items, last + 5, 10), paginate(&items, last, 10));
    }

    #[test]
    fn paginate_empty_list() {
        let items: Vec<u32> = Vec::new();
        assert!(paginate(&items, 1, 10).is_empty());
    }

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn select_page_adds_without_duplicates() {
        let mut selected = ids(&["a"]);
        select_page(&mut selected, &ids(&["a", "b", "c"]), true);
        assert_eq!(selected, ids(&["a", "b", "c"]));
    }

    #[test]
    fn deselect_page_keeps_other_pages() {
        // "z" was selected on another page and must survive
        let mut selected = ids(&["a", "b", "z"]);
        select_page(&mut selected, &ids(&["a", "b"]), false);
        assert_eq!(selected, ids(&["z"]));
    }

    #[test]
    fn page_selected_requires_every_row() {
        let page = ids(&["a", "b"]);
        assert!(page_selected(&ids(&["b", "a", "z"]), &page));
        assert!(!page_selected(&ids(&["a"]), &page));
    }

    #[test]
    fn empty_page_is_never_selected() {
        assert!(!page_selected(&ids(&["a"]), &[]));
    }

    #[test]
    fn select_then_deselect_round_trips() {
        let mut selected = Vec::new();
        let page = ids(&["a", "b"]);
        select_page(&mut selected, &page, true);
        assert!(page_selected(&selected, &page));
        select_page(&mut selected, &page, false);
        assert!(selected.is_empty());
    }
}
