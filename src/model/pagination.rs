/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Multi-page continuation support
//!
//! The broker signals more pages through the `tr_cont` response header, separately
//! from the body. The body carries an opaque cursor (search key, next key) that must
//! be copied into the next request.

use crate::model::schema::{AliasTable, FieldSpec};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// Transport level continuation marker (`tr_cont`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Continuation {
    /// `M`: more pages are available
    More,
    /// `D`: this is the last page
    Done,
    /// Marker absent or unrecognised
    #[default]
    Unknown,
}

impl Continuation {
    /// Reads the marker from the header value
    #[must_use]
    pub fn from_header(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("M") => Continuation::More,
            Some("D") => Continuation::Done,
            _ => Continuation::Unknown,
        }
    }

    /// True only when the broker announced another page
    #[must_use]
    pub fn has_more(&self) -> bool {
        matches!(self, Continuation::More)
    }

    /// True only when the broker announced the last page
    #[must_use]
    pub fn is_last(&self) -> bool {
        matches!(self, Continuation::Done)
    }
}

/// Opaque pagination tokens round-tripped between consecutive requests
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct Cursor {
    /// Search key (`CTX_AREA_FK*`)
    pub search_key: String,
    /// Next key (`CTX_AREA_NK*`)
    pub next_key: String,
}

impl Cursor {
    /// Creates a cursor from its two tokens
    pub fn new(search_key: impl Into<String>, next_key: impl Into<String>) -> Self {
        Self {
            search_key: search_key.into(),
            next_key: next_key.into(),
        }
    }

    /// Checks if both tokens are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_key.is_empty() && self.next_key.is_empty()
    }
}

/// Cursor fields of domestic responses
pub static CURSOR_100: AliasTable = AliasTable::new(
    "cursor_100",
    &[
        FieldSpec::trimmed("search_key", "ctx_area_fk100").or(""),
        FieldSpec::trimmed("next_key", "ctx_area_nk100").or(""),
    ],
);

/// Cursor fields of overseas responses
pub static CURSOR_200: AliasTable = AliasTable::new(
    "cursor_200",
    &[
        FieldSpec::trimmed("search_key", "ctx_area_fk200").or(""),
        FieldSpec::trimmed("next_key", "ctx_area_nk200").or(""),
    ],
);

/// State of a pagination run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageState {
    /// No request issued yet
    #[default]
    Initial,
    /// The last response announced more pages; the cursor goes into the next request
    HasMore(Cursor),
    /// No further pages
    Last,
}

impl PageState {
    /// Advances the state with the marker and cursor of the latest response
    ///
    /// An unknown marker ends the run: without `M` there is no evidence of a next page.
    #[must_use]
    pub fn advance(self, continuation: Continuation, cursor: &Cursor) -> PageState {
        match (self, continuation) {
            (PageState::Last, _) => PageState::Last,
            (_, Continuation::More) => PageState::HasMore(cursor.clone()),
            (_, Continuation::Done | Continuation::Unknown) => PageState::Last,
        }
    }

    /// Checks if the run has ended
    #[must_use]
    pub fn is_last(&self) -> bool {
        matches!(self, PageState::Last)
    }
}

/// Appends `page` to `acc` dropping boundary duplicates and rows under the watermark
///
/// A row of `page` is skipped when its key is already accumulated (consecutive pages
/// may overlap) or when the key is below `watermark`. Keys already in `acc` are
/// collected once per call, so a page costs O(acc + page).
pub fn merge_page<T, K, F>(acc: &mut Vec<T>, page: Vec<T>, key: F, watermark: Option<&K>)
where
    K: PartialOrd + Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen: HashSet<K> = acc.iter().map(&key).collect();
    for row in page {
        let row_key = key(&row);
        if watermark.is_some_and(|w| row_key < *w) {
            continue;
        }
        if seen.insert(row_key) {
            acc.push(row);
        }
    }
}
