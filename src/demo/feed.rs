/// Items shown in one demo pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    pub label: String,
    pub items: Vec<String>,
    /// Items appended per load
    pub page_size: usize,
    /// Number of dispatches evaluated for this feed
    pub checks: usize,
    pub pages_loaded: usize,
}

impl FeedState {
    pub fn new(label: &str, page_size: usize, initial_pages: usize) -> Self {
        let mut feed = Self {
            label: label.to_string(),
            items: Vec::new(),
            page_size,
            checks: 0,
            pages_loaded: 0,
        };
        for _ in 0..initial_pages {
            feed.load_page();
        }
        feed
    }

    pub fn load_page(&mut self) {
        let start = self.items.len();
        let label = &self.label;
        self.items
            .extend((start..start + self.page_size).map(|n| format!("{} item {}", label, n + 1)));
        self.pages_loaded += 1;
    }

    pub fn record_check(&mut self) {
        self.checks += 1;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items visible in a window of `height` lines starting at `offset`
    pub fn visible(&self, offset: usize, height: usize) -> &[String] {
        let start = offset.min(self.items.len());
        let end = start.saturating_add(height).min(self.items.len());
        &self.items[start..end]
    }
}
