use crate::hierarchy::HierarchyNode;
use crate::settings::Pagination;

/// Anything listed by name in a paged view.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for HierarchyNode {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// One page of a filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Items left after filtering, across all pages
    pub total_count: usize,
    /// Always at least 1, even for an empty list
    pub total_pages: usize,
    /// The page actually returned, after clamping
    pub page: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }
}

/// Filter `items` by a case-insensitive substring of their name, then cut out one page.
///
/// An out-of-range `page` is clamped to the last page, so a stale index held
/// across a shrinking list still yields a page. A `page_size` of 0 is treated as 1.
pub fn slice<I>(items: I, search_term: &str, page: usize, page_size: usize) -> Page<I::Item>
where
    I: IntoIterator,
    I::Item: Named,
{
    let page_size = page_size.max(1);
    let needle = search_term.to_lowercase();
    let filtered: Vec<I::Item> = items
        .into_iter()
        .filter(|item| needle.is_empty() || item.name().to_lowercase().contains(&needle))
        .collect();

    let total_count = filtered.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let page = page.min(total_pages - 1);

    let items = filtered
        .into_iter()
        .skip(page * page_size)
        .take(page_size)
        .collect();

    Page {
        items,
        total_count,
        total_pages,
        page,
    }
}

/// Search and paging state for one list view. Owned by the caller, not the slicer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search_term: String,
    pub page: usize,
    pub page_size: usize,
}

impl ListQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            page: 0,
            page_size,
        }
    }

    pub fn from_settings(settings: &Pagination) -> Self {
        Self::new(settings.page_size)
    }

    /// Call after drilling in or out; the old page index means nothing at the new level.
    pub fn reset_page(&mut self) {
        self.page = 0;
    }

    /// A new search term restarts from the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 0;
    }

    pub fn apply<I>(&self, items: I) -> Page<I::Item>
    where
        I: IntoIterator,
        I::Item: Named,
    {
        slice(items, &self.search_term, self.page, self.page_size)
    }
}
