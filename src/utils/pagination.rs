//! Page slicing over an ordered collection.

use thiserror::Error;

/// Errors raised when a page cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Requested page is outside `[1, total_pages]`. An empty source has no
    /// pages, so every index is out of range for it.
    #[error("Invalid page index")]
    InvalidPage { page_index: u32, total_pages: u32 },

    #[error("Invalid page size")]
    InvalidPageSize { page_size: u32 },
}

/// One page of an ordered collection plus its position metadata.
///
/// Only the items of the current page are held.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedList<T> {
    items: Vec<T>,
    page_index: u32,
    page_size: u32,
    total_pages: u32,
    total_count: usize,
}

impl<T> PaginatedList<T> {
    /// Slices `source` into the page `page_index` (1-based) of `page_size` items.
    ///
    /// # Errors
    /// - `InvalidPageSize` when `page_size` is zero
    /// - `InvalidPage` when `page_index` is 0 or greater than the page count,
    ///   including every index over an empty source
    pub fn create<I>(source: I, page_index: u32, page_size: u32) -> Result<Self, PaginationError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        if page_size == 0 {
            return Err(PaginationError::InvalidPageSize { page_size });
        }

        let source = source.into_iter();
        let total_count = source.len();
        let total_pages = total_pages(total_count, page_size);

        if page_index == 0 || page_index > total_pages {
            return Err(PaginationError::InvalidPage {
                page_index,
                total_pages,
            });
        }

        let skip = (page_index as usize - 1) * page_size as usize;
        let items: Vec<T> = source.skip(skip).take(page_size as usize).collect();

        Ok(Self {
            items,
            page_index,
            page_size,
            total_pages,
            total_count,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page_index < self.total_pages
    }

    /// Converts the items of this page, keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> PaginatedList<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedList {
            items: self.items.into_iter().map(f).collect(),
            page_index: self.page_index,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_count: self.total_count,
        }
    }
}

fn total_pages(total_count: usize, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size as usize) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_slices_requested_page() {
        let list = PaginatedList::create(1..101, 4, 10).unwrap();

        assert_eq!(list.items(), (31..=40).collect::<Vec<_>>().as_slice());
        assert_eq!(list.page_index(), 4);
        assert_eq!(list.total_pages(), 10);
        assert_eq!(list.total_count(), 100);
        assert!(list.has_previous_page());
        assert!(list.has_next_page());
    }

    #[test]
    fn test_first_and_last_page_flags() {
        let first = PaginatedList::create(1..101, 1, 10).unwrap();
        assert!(!first.has_previous_page());
        assert!(first.has_next_page());

        let last = PaginatedList::create(1..101, 10, 10).unwrap();
        assert!(last.has_previous_page());
        assert!(!last.has_next_page());
    }

    #[test]
    fn test_partial_last_page_is_clipped() {
        let list = PaginatedList::create(1..24, 3, 10).unwrap();
        assert_eq!(list.items(), &[21, 22, 23]);
        assert_eq!(list.total_pages(), 3);
    }

    #[test]
    fn test_page_zero_is_invalid() {
        let err = PaginatedList::create(1..101, 0, 10).unwrap_err();
        assert_eq!(
            err,
            PaginationError::InvalidPage {
                page_index: 0,
                total_pages: 10
            }
        );
        assert_eq!(err.to_string(), "Invalid page index");
    }

    #[test]
    fn test_page_past_end_is_invalid() {
        let err = PaginatedList::create(1..101, 11, 10).unwrap_err();
        assert!(matches!(err, PaginationError::InvalidPage { page_index: 11, .. }));
    }

    #[test]
    fn test_empty_source_has_no_valid_page() {
        let err = PaginatedList::create(Vec::<i32>::new(), 1, 10).unwrap_err();
        assert_eq!(
            err,
            PaginationError::InvalidPage {
                page_index: 1,
                total_pages: 0
            }
        );
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let err = PaginatedList::create(1..11, 1, 0).unwrap_err();
        assert_eq!(err, PaginationError::InvalidPageSize { page_size: 0 });
    }

    #[test]
    fn test_source_is_not_consumed_beyond_copy() {
        let source = vec!["a", "b", "c", "d", "e"];
        let list = PaginatedList::create(source.clone(), 2, 2).unwrap();
        assert_eq!(list.items(), &["c", "d"]);
        assert_eq!(source.len(), 5);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let list = PaginatedList::create(1..26, 2, 10).unwrap();
        let mapped = list.map(|n| n.to_string());
        assert_eq!(mapped.items().first().map(String::as_str), Some("11"));
        assert_eq!(mapped.page_index(), 2);
        assert_eq!(mapped.total_pages(), 3);
        assert_eq!(mapped.total_count(), 25);
        assert_eq!(mapped.page_size(), 10);
    }
}
