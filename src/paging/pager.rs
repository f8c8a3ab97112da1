/// Split `items` into pages of `page_size` (a size of 0 is treated as 1).
///
/// Empty input yields no pages; the last page may be partial.
pub fn paginate<T: Clone>(items: &[T], page_size: usize) -> Vec<Vec<T>> {
    items
        .chunks(page_size.max(1))
        .map(<[T]>::to_vec)
        .collect()
}

/// A paginated list with a current page cursor.
#[derive(Debug, Clone)]
pub struct Pager<T> {
    pages: Vec<Vec<T>>,
    page_size: usize,
    current: usize,
}

impl<T: Clone> Pager<T> {
    pub fn new(items: &[T], page_size: usize) -> Self {
        Self {
            pages: paginate(items, page_size),
            page_size: page_size.max(1),
            current: 0,
        }
    }

    /// Replace the items, keeping the current page if it still exists.
    pub fn set_items(&mut self, items: &[T]) {
        self.pages = paginate(items, self.page_size);
        self.current = self.current.min(self.page_count().saturating_sub(1));
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> &[T] {
        self.pages.get(self.current).map_or(&[], Vec::as_slice)
    }

    pub fn current_page_mut(&mut self) -> &mut [T] {
        match self.pages.get_mut(self.current) {
            Some(page) => page.as_mut_slice(),
            None => &mut [],
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.page_count()
    }

    pub fn has_prev(&self) -> bool {
        self.current > 0
    }

    /// Advance one page; stays on the last page.
    pub fn next(&mut self) {
        if self.has_next() {
            self.current += 1;
        }
    }

    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Jump to the last page.
    pub fn last(&mut self) {
        self.current = self.page_count().saturating_sub(1);
    }

    /// Item at `index` in the full list, whichever page it is on.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.pages.get(index / self.page_size)?.get(index % self.page_size)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.pages
            .get_mut(index / self.page_size)?
            .get_mut(index % self.page_size)
    }

    pub fn len(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Index into the full item list of the `slot`-th item on the current page.
    pub fn absolute_index(&self, slot: usize) -> usize {
        self.current * self.page_size + slot
    }

    pub fn label(&self) -> String {
        format!("Page {}/{}", self.current + 1, self.page_count().max(1))
    }
}
