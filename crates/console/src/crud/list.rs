use backoffice_client::ClientResult;

use super::Searchable;
use crate::Notice;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Fetched collection plus the search box and pager over it.
#[derive(Debug, Clone)]
pub struct ListView<T> {
    items: Vec<T>,
    query: String,
    page: usize,
    page_size: usize,
    loading: bool,
    notice: Option<Notice>,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            query: String::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            loading: false,
            notice: None,
        }
    }
}

impl<T: Searchable> ListView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero page size is treated as one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Replace the collection. A failed fetch keeps what was shown before.
    pub fn apply_fetch(&mut self, result: ClientResult<Vec<T>>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.notice = None;
                self.page = self.page.min(self.last_page());
            }
            Err(err) => self.notice = Some(Notice::from(&err)),
        }
    }

    /// Changing the query always goes back to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 0;
    }

    pub fn filtered(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| item.matches(&self.query))
            .collect()
    }

    /// At least one page, even when nothing matches.
    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size).max(1)
    }

    fn last_page(&self) -> usize {
        self.page_count() - 1
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.last_page());
    }

    pub fn page_rows(&self) -> Vec<&T> {
        self.filtered()
            .into_iter()
            .skip(self.page * self.page_size)
            .take(self.page_size)
            .collect()
    }

    pub async fn refresh<F, Fut>(&mut self, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<Vec<T>>>,
    {
        self.begin_fetch();
        let result = fetch().await;
        self.apply_fetch(result);
    }
}
