//! Search request variants and URL construction.
//!
//! Two request flavors cover the API's pagination schemes: offset-based
//! paging with `rows`/`start`, and cursor-based paging with an opaque
//! continuation token. Both borrow a [`SearchClient`] and share the same
//! parameter validation rules.

use crate::Result;
use crate::client::SearchClient;
use crate::response::SearchResponse;
use crate::validate::{check_pagination, check_profile, check_reusability};

/// Start-of-results sentinel for cursor pagination.
pub const CURSOR_START: &str = "*";

/// Capability shared by both search request flavors.
///
/// Exposes enough for the executor to run a request, and lets callers handle
/// both flavors behind one interface.
pub trait SearchRequest {
    /// The full search URL for this request, without the query text.
    fn search_url(&self) -> String;

    /// The client this request was built from.
    fn client(&self) -> &SearchClient;
}

/// Execution surface for search requests.
///
/// Blanket-implemented for every [`SearchRequest`], so `request.get(query)`
/// works on both flavors.
#[allow(async_fn_in_trait)]
pub trait SearchRequestExt: SearchRequest {
    /// Run the search for the given query text and decode the response.
    ///
    /// The query is form-encoded before it is appended to the URL.
    async fn get(&self, query: &str) -> Result<SearchResponse>;
}

impl<R: SearchRequest + ?Sized> SearchRequestExt for R {
    async fn get(&self, query: &str) -> Result<SearchResponse> {
        self.client().fetch(&self.search_url(), query).await
    }
}

/// Offset-paginated search request.
///
/// Pages with a numeric `start` offset and a `rows` page size. Offsets drift
/// when the underlying index changes between calls; use
/// [`CursorSearchRequest`] for stable deep paging.
#[derive(Debug, Clone)]
pub struct OffsetSearchRequest<'a> {
    client: &'a SearchClient,
    reusability: String,
    profile: String,
    rows: String,
    start: String,
}

impl<'a> OffsetSearchRequest<'a> {
    /// Create a new offset-paginated request.
    ///
    /// All parameters are validated up front; the first invalid one fails the
    /// whole construction. Empty strings leave the matching query parameter
    /// unset so the API applies its default.
    pub fn new(
        client: &'a SearchClient,
        reusability: &str,
        profile: &str,
        rows: &str,
        start: &str,
    ) -> Result<Self> {
        check_reusability(reusability)?;
        check_profile(profile)?;
        check_pagination("rows", rows, 0)?;
        check_pagination("start", start, 1)?;

        Ok(Self {
            client,
            reusability: reusability.to_string(),
            profile: profile.to_string(),
            rows: rows.to_string(),
            start: start.to_string(),
        })
    }

    /// Change the reusability filter. The current value is kept when the new
    /// one fails validation.
    pub fn set_reusability(&mut self, reusability: &str) -> Result<()> {
        check_reusability(reusability)?;
        self.reusability = reusability.to_string();
        Ok(())
    }

    /// Change the response profile. The current value is kept when the new
    /// one fails validation.
    pub fn set_profile(&mut self, profile: &str) -> Result<()> {
        check_profile(profile)?;
        self.profile = profile.to_string();
        Ok(())
    }

    /// Change the page size. The current value is kept when the new one
    /// fails validation.
    pub fn set_rows(&mut self, rows: &str) -> Result<()> {
        check_pagination("rows", rows, 0)?;
        self.rows = rows.to_string();
        Ok(())
    }

    /// Change the 1-based result offset. The current value is kept when the
    /// new one fails validation.
    pub fn set_start(&mut self, start: &str) -> Result<()> {
        check_pagination("start", start, 1)?;
        self.start = start.to_string();
        Ok(())
    }
}

impl SearchRequest for OffsetSearchRequest<'_> {
    fn search_url(&self) -> String {
        let mut url = self.client.base_url();
        for (param, value) in [
            ("reusability", &self.reusability),
            ("profile", &self.profile),
            ("rows", &self.rows),
            ("start", &self.start),
        ] {
            if !value.is_empty() {
                url.push('&');
                url.push_str(param);
                url.push('=');
                url.push_str(value);
            }
        }
        url
    }

    fn client(&self) -> &SearchClient {
        self.client
    }
}

/// Cursor-paginated search request.
///
/// Pages with an opaque continuation token handed back by the API in
/// `nextCursor`. An unset cursor means start of results (`"*"`).
#[derive(Debug, Clone)]
pub struct CursorSearchRequest<'a> {
    client: &'a SearchClient,
    reusability: String,
    profile: String,
    cursor: String,
}

impl<'a> CursorSearchRequest<'a> {
    /// Create a new cursor-paginated request.
    ///
    /// An empty cursor starts at the beginning of the result set.
    pub fn new(
        client: &'a SearchClient,
        reusability: &str,
        profile: &str,
        cursor: &str,
    ) -> Result<Self> {
        check_reusability(reusability)?;
        check_profile(profile)?;

        Ok(Self {
            client,
            reusability: reusability.to_string(),
            profile: profile.to_string(),
            cursor: normalize_cursor(cursor),
        })
    }

    /// Change the reusability filter. The current value is kept when the new
    /// one fails validation.
    pub fn set_reusability(&mut self, reusability: &str) -> Result<()> {
        check_reusability(reusability)?;
        self.reusability = reusability.to_string();
        Ok(())
    }

    /// Change the response profile. The current value is kept when the new
    /// one fails validation.
    pub fn set_profile(&mut self, profile: &str) -> Result<()> {
        check_profile(profile)?;
        self.profile = profile.to_string();
        Ok(())
    }

    /// Move to another result page. Cursors are opaque, so this never fails;
    /// an empty value resets to the start of results.
    pub fn set_cursor(&mut self, cursor: &str) {
        self.cursor = normalize_cursor(cursor);
    }

    /// The continuation token sent with the next call.
    pub fn cursor(&self) -> &str {
        &self.cursor
    }
}

impl SearchRequest for CursorSearchRequest<'_> {
    fn search_url(&self) -> String {
        let mut url = self.client.base_url();
        for (param, value) in [
            ("reusability", &self.reusability),
            ("profile", &self.profile),
        ] {
            if !value.is_empty() {
                url.push('&');
                url.push_str(param);
                url.push('=');
                url.push_str(value);
            }
        }
        // The cursor is never empty after construction.
        url.push_str("&cursor=");
        url.push_str(&self.cursor);
        url
    }

    fn client(&self) -> &SearchClient {
        self.client
    }
}

fn normalize_cursor(cursor: &str) -> String {
    if cursor.is_empty() {
        CURSOR_START.to_string()
    } else {
        cursor.to_string()
    }
}
