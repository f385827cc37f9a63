//! Iteration over paginated list endpoints.
//!
//! The API pages collections two ways: page-number envelopes carrying
//! `links.next`, and opaque `next_cursor` tokens in `meta`. [`ListPaginator`]
//! drives either through the [`Page`] trait, so callers see one contract:
//! `has_next` / `get_next` / `remaining`.

use crate::client::{Client, RequestOptions};
use crate::error::Error;
use nimbus_sdk_common::helper::parse_json_response;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// What the next request should ask for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageTurn {
    Page(u32),
    Cursor(String),
}

/// A decoded list envelope the paginator can drive.
pub trait Page: DeserializeOwned {
    type Item;

    /// `None` when this is the last page.
    fn turn(&self) -> Option<PageTurn>;
    /// Best-effort count of items after this page, when the envelope reports
    /// totals. Cursor envelopes only signal that more exists, so they return
    /// `None`.
    fn remaining(&self) -> Option<usize>;
    fn items(self) -> Vec<Self::Item>;
}

//region page-number envelope
#[derive(Deserialize, Debug)]
pub struct PagedLinks {
    pub next: Option<String>,
    pub prev: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct PagedMeta {
    pub current_page: u32,
    pub per_page: u32,
    pub record_count: u32,
    pub total_pages: u32,
}

#[derive(Deserialize, Debug)]
pub struct PagedList<T> {
    pub data: Vec<T>,
    pub links: PagedLinks,
    pub meta: PagedMeta,
}

impl<T: DeserializeOwned> Page for PagedList<T> {
    type Item = T;

    fn turn(&self) -> Option<PageTurn> {
        self.links.next.as_ref()?;
        Some(PageTurn::Page(self.meta.current_page + 1))
    }

    fn remaining(&self) -> Option<usize> {
        let seen = self.meta.current_page.saturating_mul(self.meta.per_page);
        Some(self.meta.record_count.saturating_sub(seen) as usize)
    }

    fn items(self) -> Vec<T> {
        self.data
    }
}
//endregion

//region cursor envelope
#[derive(Deserialize, Debug)]
pub struct CursorMeta {
    pub next_cursor: Option<String>,
    pub limit: u32,
    pub total: Option<u64>,
}

#[derive(Deserialize, Debug)]
pub struct CursorList<T> {
    pub data: Vec<T>,
    pub meta: CursorMeta,
}

impl<T: DeserializeOwned> Page for CursorList<T> {
    type Item = T;

    fn turn(&self) -> Option<PageTurn> {
        match self.meta.next_cursor.as_deref() {
            None | Some("") => None,
            Some(c) => Some(PageTurn::Cursor(c.to_owned())),
        }
    }

    fn remaining(&self) -> Option<usize> {
        None
    }

    fn items(self) -> Vec<T> {
        self.data
    }
}
//endregion

enum State {
    Start,
    Next(PageTurn),
    Done,
}

/// Stateful, strictly sequential iterator over a paginated list endpoint.
///
/// Not a `Stream`: pages are pulled explicitly, and a failed `get_next` leaves
/// the position untouched so the same page can be retried. Once exhausted,
/// further `get_next` calls return empty pages. There is no internal retry.
pub struct ListPaginator<'a, P: Page> {
    client: &'a Client,
    path: String,
    params: Vec<(&'static str, String)>,
    state: State,
    last_cursor: Option<String>,
    remaining: Option<usize>,
    _envelope: PhantomData<fn() -> P>,
}

impl<'a, P: Page> ListPaginator<'a, P> {
    pub(crate) fn new(
        client: &'a Client,
        path: String,
        params: Vec<(&'static str, String)>,
    ) -> Self {
        Self {
            client,
            path,
            params,
            state: State::Start,
            last_cursor: None,
            remaining: None,
            _envelope: PhantomData,
        }
    }

    pub fn has_next(&self) -> bool {
        !matches!(self.state, State::Done)
    }

    /// Items left after the last fetched page, when the endpoint reports totals.
    pub fn remaining(&self) -> Option<usize> {
        self.remaining
    }

    pub async fn get_next(&mut self) -> Result<Vec<P::Item>, Error> {
        let mut params = self.params.clone();
        match &self.state {
            State::Done => return Ok(Vec::new()),
            State::Start => {}
            State::Next(PageTurn::Page(n)) => params.push(("page", n.to_string())),
            State::Next(PageTurn::Cursor(c)) => params.push(("cursor", c.clone())),
        }

        let resp = self
            .client
            .get(&self.path, RequestOptions::with_params(params))
            .await?;
        let page: P = parse_json_response(resp).await?;

        self.remaining = page.remaining();
        self.state = match page.turn() {
            // a server echoing the same cursor back would otherwise loop forever
            Some(PageTurn::Cursor(c)) if self.last_cursor.as_deref() == Some(c.as_str()) => {
                State::Done
            }
            Some(turn) => {
                if let PageTurn::Cursor(c) = &turn {
                    self.last_cursor = Some(c.clone());
                }
                State::Next(turn)
            }
            None => State::Done,
        };
        Ok(page.items())
    }
}
