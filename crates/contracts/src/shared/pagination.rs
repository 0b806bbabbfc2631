//! "Load more" pagination over image lists.

use super::api_status::ApiStatus;

/// More pages are assumed to exist while a page comes back full.
pub fn has_more_images(fetched_count: usize, limit: u32) -> bool {
    fetched_count == limit as usize
}

/// Append `new_items` to `current`, or replace `current` entirely.
pub fn update_image_collection<T>(mut current: Vec<T>, new_items: Vec<T>, append: bool) -> Vec<T> {
    if append {
        current.extend(new_items);
        current
    } else {
        new_items
    }
}

/// What a paged list should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedView {
    Loading,
    Error,
    Empty,
    Items,
}

/// State of a paged image list: shown items, last requested page, whether
/// another page is expected, and the status of the latest request.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageFeed<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub has_more: bool,
    pub status: ApiStatus,
}

impl<T> Default for ImageFeed<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            has_more: true,
            status: ApiStatus::Idle,
        }
    }
}

impl<T> ImageFeed<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items paired with their position. Random pages may repeat an image
    /// already shown, so list keys need the position as well as the id.
    pub fn indexed_items(&self) -> Vec<(usize, T)>
    where
        T: Clone,
    {
        self.items.iter().cloned().enumerate().collect()
    }

    /// Begin (re)loading page 0. Items stay visible until the response lands.
    pub fn start_first_page(&mut self) -> u32 {
        self.page = 0;
        self.status = ApiStatus::Loading;
        self.page
    }

    /// Begin loading the page after the current one, returns its number.
    pub fn start_next_page(&mut self) -> u32 {
        self.page += 1;
        self.status = ApiStatus::Loading;
        self.page
    }

    /// Apply a successful response. Page 0 replaces, later pages append.
    pub fn finish(&mut self, page: u32, fetched: Vec<T>, limit: u32) {
        self.has_more = has_more_images(fetched.len(), limit);
        let current = std::mem::take(&mut self.items);
        self.items = update_image_collection(current, fetched, page > 0);
        self.page = page;
        self.status = ApiStatus::Success;
    }

    /// Record a failed request. Shown items are kept and a failed "load more"
    /// steps the page back so the next attempt re-requests it.
    pub fn fail(&mut self, page: u32) {
        if page > 0 && self.page == page {
            self.page -= 1;
        }
        self.status = ApiStatus::Error;
    }

    pub fn view(&self) -> FeedView {
        if !self.items.is_empty() {
            return FeedView::Items;
        }
        match self.status {
            ApiStatus::Idle | ApiStatus::Loading => FeedView::Loading,
            ApiStatus::Error => FeedView::Error,
            ApiStatus::Success => FeedView::Empty,
        }
    }

    /// A request is running while items are already on screen.
    pub fn is_loading_more(&self) -> bool {
        self.status.is_loading() && !self.items.is_empty()
    }

    pub fn can_load_more(&self) -> bool {
        self.has_more && !self.status.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_more_images() {
        assert!(has_more_images(10, 10));
        assert!(!has_more_images(7, 10));
        assert!(!has_more_images(0, 8));
    }

    #[test]
    fn test_update_image_collection() {
        assert_eq!(update_image_collection(vec![1, 2], vec![3], true), vec![1, 2, 3]);
        assert_eq!(update_image_collection(vec![1, 2], vec![3], false), vec![3]);
    }

    #[test]
    fn test_load_more_appends() {
        let mut feed = ImageFeed::new();
        let page = feed.start_first_page();
        feed.finish(page, vec!["a", "b"], 2);
        assert_eq!(feed.view(), FeedView::Items);
        assert!(feed.has_more);

        let page = feed.start_next_page();
        assert_eq!(page, 1);
        assert!(feed.is_loading_more());
        assert!(!feed.can_load_more());
        feed.finish(page, vec!["c"], 2);

        assert_eq!(feed.items, vec!["a", "b", "c"]);
        assert!(!feed.has_more);
        assert!(!feed.can_load_more());
    }

    #[test]
    fn test_load_more_keeps_repeated_items() {
        let mut feed = ImageFeed::new();
        feed.finish(0, vec!["a", "b"], 2);
        let page = feed.start_next_page();
        feed.finish(page, vec!["c", "a"], 2);

        assert_eq!(feed.items, vec!["a", "b", "c", "a"]);
        let indexed = feed.indexed_items();
        assert_eq!(indexed.len(), 4);
        assert_eq!(indexed[3], (3, "a"));
        let mut keys: Vec<_> = indexed.iter().map(|(i, id)| (*i, *id)).collect();
        keys.dedup();
        assert_eq!(keys.len(), feed.items.len());
    }

    #[test]
    fn test_first_page_replaces() {
        let mut feed = ImageFeed::new();
        feed.finish(0, vec![1, 2, 3], 3);
        feed.finish(1, vec![4, 5, 6], 3);

        let page = feed.start_first_page();
        assert_eq!(feed.items.len(), 6);
        feed.finish(page, vec![9], 3);
        assert_eq!(feed.items, vec![9]);
        assert_eq!(feed.page, 0);
    }

    #[test]
    fn test_first_load_failure_shows_error_without_items() {
        let mut feed: ImageFeed<u32> = ImageFeed::new();
        assert_eq!(feed.view(), FeedView::Loading);

        let page = feed.start_first_page();
        feed.fail(page);

        assert_eq!(feed.view(), FeedView::Error);
        assert!(feed.items.is_empty());
        assert_eq!(feed.page, 0);
    }

    #[test]
    fn test_empty_response_is_not_an_error() {
        let mut feed: ImageFeed<u32> = ImageFeed::new();
        let page = feed.start_first_page();
        feed.finish(page, Vec::new(), 10);

        assert_eq!(feed.view(), FeedView::Empty);
        assert!(!feed.has_more);
        assert!(feed.status.is_success());
    }

    #[test]
    fn test_failed_load_more_keeps_items_and_retries_same_page() {
        let mut feed = ImageFeed::new();
        feed.finish(0, vec![1, 2], 2);

        let page = feed.start_next_page();
        feed.fail(page);

        assert_eq!(feed.view(), FeedView::Items);
        assert_eq!(feed.items, vec![1, 2]);
        assert!(feed.status.is_error());
        assert!(feed.can_load_more());
        assert_eq!(feed.start_next_page(), 1);
    }
}
