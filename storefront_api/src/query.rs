//! Query-string building for list endpoints.

use url::Url;

/// Name the backend uses for the page-size parameter. Users and blogs take
/// `limit`; categories, products, and quotes take `page_size`.
#[derive(Clone, Copy, Debug)]
pub enum SizeParam {
    Limit,
    PageSize,
}

impl SizeParam {
    fn key(self) -> &'static str {
        match self {
            SizeParam::Limit => "limit",
            SizeParam::PageSize => "page_size",
        }
    }
}

/// Pagination parameters for list endpoints.
#[derive(Clone, Copy, Debug)]
pub struct PageQuery {
    /// Page number (1-indexed). Defaults to 1.
    pub page: u64,
    /// Results per page. `None` uses the backend default.
    pub size: Option<u64>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1, size: None }
    }
}

impl PageQuery {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size: Some(size),
        }
    }

    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }

    /// Sets the number of results per page.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Appends the pagination parameters to the given URL.
    pub fn add_to_url(&self, url: &Url, size_param: SizeParam) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string());
        if let Some(size) = self.size {
            url.query_pairs_mut()
                .append_pair(size_param.key(), &size.to_string());
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{PageQuery, SizeParam};

    #[test]
    fn default_query_only_sends_page() {
        let url = Url::parse("http://127.0.0.1:8000/api/blogs/").unwrap();
        let built = PageQuery::default().add_to_url(&url, SizeParam::Limit);
        assert_eq!(built.as_str(), "http://127.0.0.1:8000/api/blogs/?page=1");
    }

    #[test]
    fn limit_endpoints_use_limit() {
        let url = Url::parse("http://127.0.0.1:8000/api/users/").unwrap();
        let built = PageQuery::new(2, 25).add_to_url(&url, SizeParam::Limit);
        assert_eq!(
            built.as_str(),
            "http://127.0.0.1:8000/api/users/?page=2&limit=25"
        );
    }

    #[test]
    fn page_size_endpoints_use_page_size() {
        let url = Url::parse("http://127.0.0.1:8000/api/products").unwrap();
        let built = PageQuery::default()
            .with_page(3)
            .with_size(12)
            .add_to_url(&url, SizeParam::PageSize);
        assert_eq!(
            built.as_str(),
            "http://127.0.0.1:8000/api/products?page=3&page_size=12"
        );
    }
}
