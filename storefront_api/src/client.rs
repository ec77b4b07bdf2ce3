//! HTTP client for the storefront admin REST API.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::normalize;
use crate::query::{PageQuery, SizeParam};
use crate::types::{
    Blog, Category, Contact, Envelope, LoginResponse, PaginatedResult, Product, Quote,
    UploadResult, User,
};
use crate::{Error, Session};

/// Request timeout. The console is interactive; fail fast.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Page size assumed when the caller does not pick one, used as the
/// normalizer's fallback.
const DEFAULT_PAGE_SIZE: u64 = 10;

/// HTTP client for the storefront admin REST API.
///
/// Holds a reusable `reqwest::Client` and an injected [`Session`]. The bearer
/// token is attached to every request once the session carries one, so a
/// `login` call on a shared session authenticates every clone of it.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl Client {
    /// Creates a client with a fresh, unauthenticated session.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_session(base_url, Session::new())
    }

    /// Creates a client around an existing session (e.g. a token loaded from
    /// the environment).
    pub fn with_session(base_url: &str, session: Session) -> Result<Self, Error> {
        Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| Error::InvalidUrl(format!("{}{path}: {e}", self.base_url)))
    }

    fn authed(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.http.request(method, url);
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends the request and maps non-2xx statuses to typed errors. Transport
    /// failures never masquerade as empty results.
    async fn execute(&self, request: RequestBuilder) -> Result<String, Error> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(classify_status(status, &body));
        }
        Ok(body)
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &PageQuery,
        size_param: SizeParam,
    ) -> Result<PaginatedResult<T>, Error> {
        let url = query.add_to_url(&self.endpoint(path)?, size_param);
        let body = self.execute(self.authed(Method::GET, url)).await?;
        let value: Value =
            serde_json::from_str(&body).map_err(|e| Error::Decode(format!("{path}: {e}")))?;
        normalize::normalize(&value, query.page, query.size.unwrap_or(DEFAULT_PAGE_SIZE))
    }

    async fn get_enveloped<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.endpoint(path)?;
        let body = self.execute(self.authed(Method::GET, url)).await?;
        decode_enveloped(path, &body)
    }

    async fn send_enveloped<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: &impl Serialize,
    ) -> Result<T, Error> {
        let url = self.endpoint(path)?;
        let body = self.execute(self.authed(method, url).json(payload)).await?;
        decode_enveloped(path, &body)
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.endpoint(path)?;
        self.execute(self.authed(Method::DELETE, url)).await?;
        Ok(())
    }

    /// Authenticates with form-encoded credentials and stores the returned
    /// access token in the session. A 401 surfaces as [`Error::Unauthorized`].
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, Error> {
        let url = self.endpoint("/api/login")?;
        let request = self
            .http
            .post(url)
            .form(&[("username", username), ("password", password)]);
        let body = self.execute(request).await?;
        let login: LoginResponse = serde_json::from_str(&body)
            .map_err(|e| Error::Decode(format!("login response: {e}")))?;
        self.session.set_token(login.access_token.as_str());
        Ok(login)
    }

    // -- Users --

    pub async fn list_users(&self, query: &PageQuery) -> Result<PaginatedResult<User>, Error> {
        self.get_page("/api/users/", query, SizeParam::Limit).await
    }

    pub async fn get_user(&self, id: &str) -> Result<User, Error> {
        self.get_enveloped(&format!("/api/users/{id}/")).await
    }

    pub async fn create_user(&self, user: &User) -> Result<User, Error> {
        self.send_enveloped(Method::POST, "/api/users/", user).await
    }

    pub async fn update_user(&self, id: &str, user: &User) -> Result<User, Error> {
        self.send_enveloped(Method::PUT, &format!("/api/users/{id}"), user)
            .await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("/api/users/{id}/")).await
    }

    // -- Blogs --

    pub async fn list_blogs(&self, query: &PageQuery) -> Result<PaginatedResult<Blog>, Error> {
        self.get_page("/api/blogs/", query, SizeParam::Limit).await
    }

    pub async fn get_blog(&self, id: &str) -> Result<Blog, Error> {
        self.get_enveloped(&format!("/api/blogs/id/{id}")).await
    }

    pub async fn create_blog(&self, blog: &Blog) -> Result<Blog, Error> {
        self.send_enveloped(Method::POST, "/api/blogs", blog).await
    }

    pub async fn update_blog(&self, id: &str, blog: &Blog) -> Result<Blog, Error> {
        self.send_enveloped(Method::PUT, &format!("/api/blogs/{id}"), blog)
            .await
    }

    pub async fn delete_blog(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("/api/blogs/{id}")).await
    }

    // -- Categories --

    pub async fn list_categories(
        &self,
        query: &PageQuery,
    ) -> Result<PaginatedResult<Category>, Error> {
        self.get_page("/api/categories/paginated", query, SizeParam::PageSize)
            .await
    }

    /// Full parent/child category tree.
    pub async fn category_hierarchy(&self) -> Result<Vec<Category>, Error> {
        self.get_enveloped("/api/categories/hierarchy").await
    }

    /// Top-level categories only.
    pub async fn parent_categories(&self) -> Result<Vec<Category>, Error> {
        self.get_enveloped("/api/categories/parent").await
    }

    pub async fn get_category(&self, id: &str) -> Result<Category, Error> {
        self.get_enveloped(&format!("/api/categories/{id}")).await
    }

    pub async fn create_category(&self, category: &Category) -> Result<Category, Error> {
        self.send_enveloped(Method::POST, "/api/categories/", category)
            .await
    }

    pub async fn update_category(&self, id: &str, category: &Category) -> Result<Category, Error> {
        self.send_enveloped(Method::PUT, &format!("/api/categories/{id}"), category)
            .await
    }

    pub async fn delete_category(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("/api/categories/{id}")).await
    }

    // -- Products --

    pub async fn list_products(
        &self,
        query: &PageQuery,
    ) -> Result<PaginatedResult<Product>, Error> {
        self.get_page("/api/products", query, SizeParam::PageSize)
            .await
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, Error> {
        self.get_enveloped(&format!("/api/products/{id}")).await
    }

    pub async fn create_product(&self, product: &Product) -> Result<Product, Error> {
        self.send_enveloped(Method::POST, "/api/products/", product)
            .await
    }

    pub async fn update_product(&self, id: &str, product: &Product) -> Result<Product, Error> {
        self.send_enveloped(Method::PUT, &format!("/api/products/{id}"), product)
            .await
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("/api/products/{id}")).await
    }

    // -- Quotes --

    pub async fn list_quotes(&self, query: &PageQuery) -> Result<PaginatedResult<Quote>, Error> {
        self.get_page("/api/quotes", query, SizeParam::PageSize)
            .await
    }

    pub async fn get_quote(&self, id: &str) -> Result<Quote, Error> {
        self.get_enveloped(&format!("/api/quotes/{id}")).await
    }

    pub async fn delete_quote(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("/api/quotes/{id}")).await
    }

    // -- Contacts --

    /// Contacts are unpaginated; the response collapses through the
    /// array-shape path of the normalizer.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, Error> {
        let url = self.endpoint("/api/contacts")?;
        let body = self.execute(self.authed(Method::GET, url)).await?;
        let value: Value = serde_json::from_str(&body)
            .map_err(|e| Error::Decode(format!("/api/contacts: {e}")))?;
        Ok(normalize::normalize(&value, 1, 0)?.items)
    }

    pub async fn delete_contact(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("/api/contacts/{id}")).await
    }

    // -- Uploads --

    /// Uploads a file into the named folder and returns the *relative* stored
    /// path, regardless of which shape the backend answered with.
    pub async fn upload(
        &self,
        folder: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, Error> {
        let mut url = self.endpoint("/api/upload")?;
        url.query_pairs_mut().append_pair("folder", folder);
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        let body = self
            .execute(self.authed(Method::POST, url).multipart(form))
            .await?;
        let result: UploadResult = decode_enveloped("/api/upload", &body)?;
        Ok(crate::media::strip_base_url(
            &self.base_url,
            &result.into_path(),
        ))
    }
}

fn decode_enveloped<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, Error> {
    let envelope: Envelope<T> = serde_json::from_str(body).map_err(|e| {
        tracing::error!("failed to decode {} response: {} | body: {}", path, e, truncate_body(body));
        Error::Decode(format!("{path}: {e}"))
    })?;
    Ok(envelope.result)
}

fn classify_status(status: StatusCode, body: &str) -> Error {
    let snippet = truncate_body(body);
    tracing::error!("request failed with status {}: {}", status, snippet);
    match status {
        StatusCode::UNAUTHORIZED => Error::Unauthorized,
        StatusCode::NOT_FOUND => Error::NotFound,
        s if s.is_server_error() => Error::Server {
            status: s.as_u16(),
            body: snippet,
        },
        s => Error::HttpStatus {
            status: s.as_u16(),
            body: snippet,
        },
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
