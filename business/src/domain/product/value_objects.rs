use super::errors::ProductError;
use super::model::Product;

/// A validated page request. Pages are 1-based; the size must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    pub const DEFAULT_PAGE_SIZE: u32 = 10;

    pub fn new(page: u32, page_size: u32) -> Result<Self, ProductError> {
        if page == 0 {
            return Err(ProductError::InvalidPage);
        }
        if page_size == 0 {
            return Err(ProductError::InvalidPageSize);
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}

/// Optional catalog filters: case-insensitive substring match on the
/// product name, exact match on category.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// One page of the catalog together with the derived page count.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub items: Vec<Product>,
    pub total: u64,
    pub current_page: u32,
    pub total_pages: u32,
}

impl CatalogPage {
    /// An empty catalog still reports one page, matching what clients of
    /// the listing endpoint have always been shown.
    pub fn assemble(items: Vec<Product>, total: u64, request: PageRequest) -> Self {
        let total_pages = total
            .div_ceil(u64::from(request.page_size()))
            .max(1)
            .min(u64::from(u32::MAX)) as u32;
        Self {
            items,
            total,
            current_page: request.page(),
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_reject_zero_page() {
        assert!(matches!(
            PageRequest::new(0, 10),
            Err(ProductError::InvalidPage)
        ));
    }

    #[test]
    fn should_reject_zero_page_size() {
        assert!(matches!(
            PageRequest::new(1, 0),
            Err(ProductError::InvalidPageSize)
        ));
    }

    #[test]
    fn should_compute_offset_from_page_and_size() {
        let request = PageRequest::new(3, 10).unwrap();
        assert_eq!(request.offset(), 20);
    }

    #[test]
    fn should_report_one_page_for_empty_catalog() {
        let request = PageRequest::new(1, 10).unwrap();
        let page = CatalogPage::assemble(vec![], 0, request);
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    proptest! {
        #[test]
        fn total_pages_is_ceiling_of_total_over_size(
            total in 1u64..100_000,
            page_size in 1u32..500,
        ) {
            let request = PageRequest::new(1, page_size).unwrap();
            let page = CatalogPage::assemble(vec![], total, request);
            prop_assert_eq!(
                u64::from(page.total_pages),
                total.div_ceil(u64::from(page_size))
            );
        }

        #[test]
        fn offset_never_overflows_for_valid_requests(
            page in 1u32..=u32::MAX,
            page_size in 1u32..=u32::MAX,
        ) {
            let request = PageRequest::new(page, page_size).unwrap();
            // u32 * u32 always fits in u64
            prop_assert!(request.offset() <= u64::from(u32::MAX) * u64::from(u32::MAX));
        }
    }
}
