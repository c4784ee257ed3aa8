//! Fixed-size page slicing for list pages
//!
//! The page number comes straight from the `page` query parameter. It is
//! either a 1-based integer or the literal `last`. Anything else, and any
//! number outside `1..=num_pages`, is an invalid page which list pages turn
//! into a 404. The first page of an empty table is always valid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::Error;

pub const LAST_PAGE: &str = "last";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPage {
    #[error("Page is not 'last', nor can it be converted to an int.")]
    NotAnInteger,
    #[error("That page number is less than 1")]
    LessThanOne,
    #[error("That page contains no results")]
    Empty,
}

impl From<InvalidPage> for Error {
    fn from(e: InvalidPage) -> Self {
        Error::not_found(format!("Invalid page ({e})"))
    }
}

/// Query string of a paginated list page
///
/// A repeated `page` key is not an error, the last one wins.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(from = "Vec<(String, String)>")]
pub struct PaginationRequest {
    pub page: Option<String>,
}

impl From<Vec<(String, String)>> for PaginationRequest {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let page = pairs
            .into_iter()
            .filter(|(key, _)| key == "page")
            .map(|(_, value)| value)
            .last();

        Self { page }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Paginator {
    pub count: u64,
    pub per_page: u64,
    pub num_pages: u64,
}

impl Paginator {
    pub fn new(count: u64, per_page: u64) -> Self {
        let per_page = per_page.max(1);
        let num_pages = count.max(1).div_ceil(per_page);

        Self {
            count,
            per_page,
            num_pages,
        }
    }

    /// Parse the raw `page` parameter, defaulting to the first page
    pub fn number(&self, page: Option<&str>) -> Result<u64, InvalidPage> {
        let page = match page.map(str::trim) {
            None | Some("") => return self.validate(1),
            Some(LAST_PAGE) => return Ok(self.num_pages),
            Some(page) => page,
        };

        match page.parse::<i64>() {
            Ok(number) if number < 1 => Err(InvalidPage::LessThanOne),
            Ok(number) => self.validate(number as u64),
            Err(_) => Err(InvalidPage::NotAnInteger),
        }
    }

    fn validate(&self, number: u64) -> Result<u64, InvalidPage> {
        if number > self.num_pages {
            return Err(InvalidPage::Empty);
        }

        Ok(number)
    }

    pub fn page(&self, page: Option<&str>) -> Result<Page, InvalidPage> {
        let number = self.number(page)?;

        Ok(Page {
            number,
            offset: (number - 1) * self.per_page,
            len: self.per_page.min(self.count.saturating_sub((number - 1) * self.per_page)),
            paginator: *self,
        })
    }
}

/// One slice of a [`Paginator`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    pub number: u64,
    offset: u64,
    len: u64,
    paginator: Paginator,
}

impl Page {
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u64 {
        self.paginator.per_page
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_next(&self) -> bool {
        self.number < self.paginator.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_other_pages(&self) -> bool {
        self.has_next() || self.has_previous()
    }

    pub fn next_page_number(&self) -> Option<u64> {
        self.has_next().then(|| self.number + 1)
    }

    pub fn previous_page_number(&self) -> Option<u64> {
        self.has_previous().then(|| self.number - 1)
    }

    /// 1-based index of the first item on this page, 0 when empty
    pub fn start_index(&self) -> u64 {
        if self.paginator.count == 0 {
            0
        } else {
            self.offset + 1
        }
    }

    pub fn end_index(&self) -> u64 {
        self.offset + self.len
    }

    pub fn context(&self) -> PageContext {
        PageContext {
            number: self.number,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
            has_other_pages: self.has_other_pages(),
            next_page_number: self.next_page_number(),
            previous_page_number: self.previous_page_number(),
            start_index: self.start_index(),
            end_index: self.end_index(),
        }
    }
}

/// The rows of one page together with the page bookkeeping
#[derive(Clone, Debug)]
pub struct Listing<T> {
    pub paginator: Paginator,
    pub page: Page,
    pub items: Vec<T>,
}

/// Template view of a [`Page`], exposed as `page_obj`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    pub number: u64,
    pub has_next: bool,
    pub has_previous: bool,
    pub has_other_pages: bool,
    pub next_page_number: Option<u64>,
    pub previous_page_number: Option<u64>,
    pub start_index: u64,
    pub end_index: u64,
}
