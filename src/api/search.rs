//! Search: query builder, service, and lazy pagination.
//!
//! The registry's search endpoint pages with `start`/`rows` offsets and
//! reports the total match count on every page. [`SearchPager`] walks a
//! result set in the drain pattern (`advance` + accessors);
//! [`SearchStream`] exposes the same paging rule as a `futures` `Stream`.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use reqwest::Url;

use crate::client::ClientInner;
use crate::models::{ExpandedSearchResult, SearchRecord, SearchResult};
use crate::{Error, Result};

/// Page size used when the caller does not set one.
pub const DEFAULT_ROWS: u64 = 10;

/// Parameters for one search: the query string and the paging window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// The Solr query string.
    pub query: String,
    /// Offset of the first result to return.
    pub start: u64,
    /// Page size; `0` means [`DEFAULT_ROWS`].
    pub rows: u64,
}

impl SearchParams {
    /// Create parameters for `query` with the default paging window.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            start: 0,
            rows: DEFAULT_ROWS,
        }
    }

    /// The page size actually sent: `rows`, or [`DEFAULT_ROWS`] when zero.
    pub fn effective_rows(&self) -> u64 {
        if self.rows == 0 {
            DEFAULT_ROWS
        } else {
            self.rows
        }
    }

    /// Build the search URL against `api_url`.
    ///
    /// `start` is omitted when zero; `rows` falls back to
    /// [`DEFAULT_ROWS`] when zero.
    pub(crate) fn build_url(&self, api_url: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{api_url}/search"))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", &self.query);
            if self.start > 0 {
                pairs.append_pair("start", &self.start.to_string());
            }
            pairs.append_pair("rows", &self.effective_rows().to_string());
        }
        Ok(url)
    }
}

/// Fluent builder for registry search queries.
///
/// Accumulates field clauses and joins them with single spaces; combine
/// clauses with [`and`](SearchQuery::and), [`or`](SearchQuery::or), and
/// [`not`](SearchQuery::not). Values containing spaces are quoted.
///
/// # Example
///
/// ```
/// use orcid_rs::SearchQuery;
///
/// let params = SearchQuery::new()
///     .family_name("Carberry")
///     .and()
///     .affiliation_organization("Brown University")
///     .with_rows(50)
///     .build();
/// assert_eq!(
///     params.query,
///     r#"family-name:Carberry AND affiliation-org-name:"Brown University""#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    parts: Vec<String>,
    start: u64,
    rows: u64,
}

fn quote(value: &str) -> String {
    if value.contains(' ') {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

impl SearchQuery {
    /// Create an empty query with the default paging window.
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            start: 0,
            rows: DEFAULT_ROWS,
        }
    }

    fn field(mut self, name: &str, value: &str) -> Self {
        self.parts.push(format!("{name}:{}", quote(value)));
        self
    }

    /// Match an ORCID iD.
    pub fn orcid(self, orcid: &str) -> Self {
        self.field("orcid", orcid)
    }

    /// Match an email address.
    pub fn email(self, email: &str) -> Self {
        self.field("email", email)
    }

    /// Match a family name.
    pub fn family_name(self, name: &str) -> Self {
        self.field("family-name", name)
    }

    /// Match given names.
    pub fn given_names(self, names: &str) -> Self {
        self.field("given-names", names)
    }

    /// Match a credit name.
    pub fn credit_name(self, name: &str) -> Self {
        self.field("credit-name", name)
    }

    /// Match alternative names.
    pub fn other_names(self, names: &str) -> Self {
        self.field("other-names", names)
    }

    /// Match a keyword.
    pub fn keyword(self, keyword: &str) -> Self {
        self.field("keyword", keyword)
    }

    /// Match an external identifier by type and value.
    pub fn external_identifier(self, identifier: &str) -> Self {
        self.field("external-identifier-type-and-value", identifier)
    }

    /// Match a DOI asserted on a work.
    pub fn doi(self, doi: &str) -> Self {
        self.field("doi-self", doi)
    }

    /// Match across all personal details fields.
    pub fn personal_details(self, details: &str) -> Self {
        self.field("personal-details", details)
    }

    /// Match biography text.
    pub fn biography(self, bio: &str) -> Self {
        self.field("biography", bio)
    }

    /// Match a work title.
    pub fn work_title(self, title: &str) -> Self {
        self.field("work-titles", title)
    }

    /// Match a funding title.
    pub fn funding_title(self, title: &str) -> Self {
        self.field("funding-titles", title)
    }

    /// Match an affiliation organization name.
    pub fn affiliation_organization(self, organization: &str) -> Self {
        self.field("affiliation-org-name", organization)
    }

    /// Match a RINGGOLD organization identifier.
    pub fn ringgold(self, id: &str) -> Self {
        self.field("ringgold-org-id", id)
    }

    /// Match a GRID organization identifier.
    pub fn grid(self, id: &str) -> Self {
        self.field("grid-org-id", id)
    }

    /// Match a ROR organization identifier.
    pub fn ror(self, id: &str) -> Self {
        self.field("ror-org-id", id)
    }

    /// Match a FundRef organization identifier.
    pub fn fundref(self, id: &str) -> Self {
        self.field("fundref-org-id", id)
    }

    /// Append a raw query fragment verbatim.
    pub fn raw(mut self, fragment: &str) -> Self {
        self.parts.push(fragment.to_string());
        self
    }

    /// Append the `AND` connective.
    pub fn and(mut self) -> Self {
        self.parts.push("AND".to_string());
        self
    }

    /// Append the `OR` connective.
    pub fn or(mut self) -> Self {
        self.parts.push("OR".to_string());
        self
    }

    /// Append the `NOT` connective.
    pub fn not(mut self) -> Self {
        self.parts.push("NOT".to_string());
        self
    }

    /// Set the offset of the first result.
    pub fn with_start(mut self, start: u64) -> Self {
        self.start = start;
        self
    }

    /// Set the page size.
    pub fn with_rows(mut self, rows: u64) -> Self {
        self.rows = rows;
        self
    }

    /// Join the accumulated clauses into [`SearchParams`].
    pub fn build(self) -> SearchParams {
        SearchParams {
            query: self.parts.join(" "),
            start: self.start,
            rows: self.rows,
        }
    }
}

/// Service for search operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: orcid_rs::OrcidClient) -> orcid_rs::Result<()> {
/// use orcid_rs::SearchQuery;
///
/// let mut pager = client
///     .search()
///     .pager(SearchQuery::new().family_name("Carberry").build());
///
/// while pager.advance().await {
///     if let Some(record) = pager.current() {
///         println!("{:?}", record.orcid_identifier);
///     }
/// }
/// if let Some(err) = pager.last_error() {
///     eprintln!("search failed: {err}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct SearchService {
    inner: Arc<ClientInner>,
}

impl SearchService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of search results.
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResult> {
        let url = params.build_url(&self.inner.config.api_url)?;
        self.inner.fetch(url).await
    }

    /// Fetch one page of expanded search results, which carry basic
    /// biographical fields alongside each iD.
    pub async fn expanded(&self, query: &str) -> Result<ExpandedSearchResult> {
        let mut url = Url::parse(&format!("{}/expanded-search/", self.inner.config.api_url))?;
        url.query_pairs_mut().append_pair("q", query);
        self.inner.fetch(url).await
    }

    /// Walk a result set lazily in the drain pattern.
    pub fn pager(&self, params: SearchParams) -> SearchPager {
        SearchPager::new(self.inner.clone(), params)
    }

    /// Walk a result set lazily as a `Stream` of records.
    pub fn stream(&self, params: SearchParams) -> SearchStream {
        SearchStream::new(self.inner.clone(), params)
    }
}

/// A lazy cursor over a search result set.
///
/// Fetches pages on demand through the client's executor, so every page
/// request is paced, retried, and cancellable like any other call. Failure
/// is sticky: after an error (including cancellation), [`advance`]
/// returns `false` without further I/O and [`last_error`] reports the
/// cause.
///
/// Not meant to be shared: one caller owns and advances a pager.
///
/// [`advance`]: SearchPager::advance
/// [`last_error`]: SearchPager::last_error
pub struct SearchPager {
    inner: Arc<ClientInner>,
    params: SearchParams,
    page: Option<SearchResult>,
    cursor: Option<usize>,
    total: u64,
    done: bool,
    error: Option<Error>,
}

impl SearchPager {
    pub(crate) fn new(inner: Arc<ClientInner>, mut params: SearchParams) -> Self {
        params.rows = params.effective_rows();
        Self {
            inner,
            params,
            page: None,
            cursor: None,
            total: 0,
            done: false,
            error: None,
        }
    }

    /// Step to the next record, fetching a page when needed.
    ///
    /// Returns `true` when [`current`](SearchPager::current) points at a
    /// record, `false` when the result set is exhausted or a fetch failed
    /// (check [`last_error`](SearchPager::last_error)).
    pub async fn advance(&mut self) -> bool {
        if self.error.is_some() || self.done {
            return false;
        }
        if self.inner.cancel.is_cancelled() {
            self.error = Some(Error::Cancelled);
            return false;
        }

        let next = self.cursor.map_or(0, |i| i + 1);
        let need_fetch = match &self.page {
            None => true,
            Some(page) => next >= page.results.len(),
        };

        if !need_fetch {
            self.cursor = Some(next);
            return true;
        }

        if self.page.is_some() {
            // Completion is judged against the requested page size, not
            // the count actually returned; a short page before the
            // reported total triggers one more fetch.
            if self.params.start + self.params.rows >= self.total {
                self.done = true;
                return false;
            }
            self.params.start += self.params.rows;
        }

        tracing::debug!(start = self.params.start, "fetching search page");
        let page = match self.fetch_page().await {
            Ok(page) => page,
            Err(err) => {
                self.error = Some(err);
                return false;
            }
        };

        self.total = page.num_found;
        let empty = page.results.is_empty();
        self.page = Some(page);
        if empty {
            self.done = true;
            self.cursor = None;
            return false;
        }
        self.cursor = Some(0);
        true
    }

    async fn fetch_page(&self) -> Result<SearchResult> {
        let url = self.params.build_url(&self.inner.config.api_url)?;
        self.inner.fetch(url).await
    }

    /// The record the cursor points at, if any.
    pub fn current(&self) -> Option<&SearchRecord> {
        self.page.as_ref()?.results.get(self.cursor?)
    }

    /// The sticky failure cause, if a fetch failed.
    pub fn last_error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// The most recently observed server-reported total; `0` before the
    /// first successful fetch.
    pub fn total_results(&self) -> u64 {
        self.total
    }
}

type PageFuture = Pin<Box<dyn Future<Output = Result<SearchResult>> + Send>>;

/// A `Stream` over a search result set, applying the same paging rule as
/// [`SearchPager`].
///
/// Yields `Result<SearchRecord>`; the first error ends the stream.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: orcid_rs::OrcidClient) -> orcid_rs::Result<()> {
/// use futures_util::TryStreamExt;
/// use orcid_rs::SearchParams;
///
/// let mut stream = client.search().stream(SearchParams::new("keyword:ontology"));
/// while let Some(record) = stream.try_next().await? {
///     println!("{:?}", record.orcid_identifier);
/// }
/// # Ok(())
/// # }
/// ```
pub struct SearchStream {
    inner: Arc<ClientInner>,
    params: SearchParams,
    buffer: VecDeque<SearchRecord>,
    exhausted: bool,
    pending: Option<PageFuture>,
}

impl SearchStream {
    pub(crate) fn new(inner: Arc<ClientInner>, mut params: SearchParams) -> Self {
        params.rows = params.effective_rows();
        Self {
            inner,
            params,
            buffer: VecDeque::new(),
            exhausted: false,
            pending: None,
        }
    }
}

impl Stream for SearchStream {
    type Item = Result<SearchRecord>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            // Drain the buffered page first.
            if let Some(record) = this.buffer.pop_front() {
                return Poll::Ready(Some(Ok(record)));
            }

            if let Some(fut) = this.pending.as_mut() {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending = None;
                        if page.results.is_empty() {
                            this.exhausted = true;
                            return Poll::Ready(None);
                        }
                        let total = page.num_found;
                        this.buffer.extend(page.results);
                        if this.params.start + this.params.rows >= total {
                            this.exhausted = true;
                        } else {
                            this.params.start += this.params.rows;
                        }
                        continue;
                    }
                    Poll::Ready(Err(err)) => {
                        this.pending = None;
                        this.exhausted = true;
                        return Poll::Ready(Some(Err(err)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            if this.exhausted {
                return Poll::Ready(None);
            }

            let inner = this.inner.clone();
            let params = this.params.clone();
            this.pending = Some(Box::pin(async move {
                let url = params.build_url(&inner.config.api_url)?;
                inner.fetch::<SearchResult>(url).await
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_quotes_values_with_spaces() {
        let params = SearchQuery::new()
            .given_names("Josiah Stinkney")
            .and()
            .family_name("Carberry")
            .build();
        assert_eq!(
            params.query,
            r#"given-names:"Josiah Stinkney" AND family-name:Carberry"#
        );
    }

    #[test]
    fn builder_connectives_and_raw() {
        let params = SearchQuery::new()
            .keyword("psychoceramics")
            .or()
            .raw("work-titles:cracked")
            .not()
            .ror("https://ror.org/05gq02987")
            .build();
        assert_eq!(
            params.query,
            "keyword:psychoceramics OR work-titles:cracked NOT ror-org-id:https://ror.org/05gq02987"
        );
    }

    #[test]
    fn builder_paging_window() {
        let params = SearchQuery::new().email("jcarberry@example.com").with_start(20).with_rows(50).build();
        assert_eq!(params.start, 20);
        assert_eq!(params.rows, 50);
    }

    #[test]
    fn url_omits_zero_start_and_defaults_rows() {
        let params = SearchParams {
            query: "family-name:Carberry".into(),
            start: 0,
            rows: 0,
        };
        let url = params.build_url("https://pub.orcid.org/v3.0").unwrap();
        assert_eq!(url.path(), "/v3.0/search");
        assert_eq!(
            url.query(),
            Some("q=family-name%3ACarberry&rows=10")
        );
    }

    #[test]
    fn url_includes_nonzero_start() {
        let params = SearchParams {
            query: "x".into(),
            start: 30,
            rows: 25,
        };
        let url = params.build_url("https://pub.orcid.org/v3.0").unwrap();
        assert_eq!(url.query(), Some("q=x&start=30&rows=25"));
    }

    #[test]
    fn effective_rows_defaults() {
        assert_eq!(SearchParams::new("q").effective_rows(), DEFAULT_ROWS);
        let mut params = SearchParams::new("q");
        params.rows = 0;
        assert_eq!(params.effective_rows(), DEFAULT_ROWS);
        params.rows = 3;
        assert_eq!(params.effective_rows(), 3);
    }
}
