use serde::Deserialize;

/// One page of a list endpoint.
///
/// The backend also sends `total_pages`, `next` and `previous`; they are
/// ignored. Every field is optional so a malformed body still decodes and
/// simply renders without page links.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
