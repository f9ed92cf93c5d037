use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `"desc"` in any case means descending, anything else ascending.
    pub fn parse_lenient(value: Option<&str>) -> SortDirection {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

/// Which page of a listing the client asked for. Pages are numbered from 0.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub size: u32,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub direction: SortDirection,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: None,
            direction: SortDirection::Asc,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> PageRequest {
        PageRequest {
            page,
            size,
            ..Default::default()
        }
    }

    pub fn sorted(mut self, sort_by: impl ToString, direction: SortDirection) -> PageRequest {
        self.sort_by = Some(sort_by.to_string());
        self.direction = direction;
        self
    }

    /// Keeps `size` within `1..=max`.
    pub fn clamp_size(mut self, max: u32) -> PageRequest {
        self.size = self.size.clamp(1, max.max(1));
        self
    }

    /// Sort column, or `default` when none or a blank one was given.
    pub fn sort_by_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.sort_by.as_deref() {
            Some(column) if !column.trim().is_empty() => column,
            _ => default,
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> PageResponse<T> {
    /// Wraps one page of content. `total_elements` counts the whole listing.
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> PageResponse<T> {
        let size = u64::from(request.size.max(1));
        let total_pages = u32::try_from((total_elements + size - 1) / size).unwrap_or(u32::MAX);
        let has_next = u64::from(request.page) + 1 < u64::from(total_pages);
        let has_previous = request.page > 0;

        PageResponse {
            content,
            page_number: request.page,
            page_size: request.size,
            total_elements,
            total_pages,
            first: !has_previous,
            last: !has_next,
            has_next,
            has_previous,
        }
    }

    /// Cuts the requested page out of a complete, already ordered listing.
    pub fn paginate(all: Vec<T>, request: &PageRequest) -> PageResponse<T> {
        let total = all.len() as u64;
        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = all
            .into_iter()
            .skip(skip)
            .take(request.size as usize)
            .collect();

        PageResponse::new(content, request, total)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            content: self.content.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            first: self.first,
            last: self.last,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}
