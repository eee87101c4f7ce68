//! Paging parameters and page results

use serde::{Deserialize, Serialize};

use crate::core::error::ShipError;
use crate::core::order::{OrderSpec, ShipOrder, SortDirection};

pub const DEFAULT_PAGE_NUMBER: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// Zero-based page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Fails for a page size of zero
    pub fn new(page_number: u32, page_size: u32) -> Result<Self, ShipError> {
        if page_size == 0 {
            return Err(ShipError::InvalidQuery(
                "pageSize must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            page_number,
            page_size,
        })
    }

    /// Index of the first record of this page
    pub fn offset(&self) -> usize {
        self.page_number as usize * self.page_size as usize
    }

    pub fn limit(&self) -> usize {
        self.page_size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Sort and paging parameters of a listing, named as on the query string
///
/// # Example
/// ```text
/// GET /rest/ships?order=SPEED&direction=desc&pageNumber=1&pageSize=10
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub order: Option<ShipOrder>,
    pub direction: Option<SortDirection>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListParams {
    pub fn order_spec(&self) -> OrderSpec {
        OrderSpec::new(
            self.order.unwrap_or_default(),
            self.direction.unwrap_or_default(),
        )
    }

    pub fn page_request(&self) -> Result<PageRequest, ShipError> {
        PageRequest::new(
            self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// One page of matching records
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    /// Number of matching records across all pages
    pub total_elements: usize,
    pub total_pages: usize,
    pub has_next: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: usize) -> Self {
        let limit = request.limit().max(1);
        let total_pages = total_elements.div_ceil(limit);

        Self {
            content,
            page_number: request.page_number,
            page_size: request.page_size,
            total_elements,
            total_pages,
            has_next: request.offset() + limit < total_elements,
        }
    }
}
