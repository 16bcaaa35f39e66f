//! Single-syllable rhyme search against a syllable store.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::RhymeError;
use crate::language::analyze_syllable;
use crate::rhyme::options::RhymeOptions;
use crate::rhyme::similarity::build_filter;
use crate::store::SyllableStore;
use crate::types::{SyllableFeatures, SyllableId, SyllableRecord};

/// Message of an empty syllable search.
pub const NO_SYLLABLE_RHYMES: &str = "No rhymes found matching the criteria.";

/// Features to rhyme with, plus optional pagination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyllableQuery {
    /// Echoed back as the result keyword
    pub lomaji: String,
    pub vowel: String,
    pub coda: Option<String>,
    pub nasal: bool,
    pub tone: Option<u8>,
    pub limit: Option<usize>,
    /// 1-based page, only meaningful with `limit`
    pub page: Option<usize>,
}

impl SyllableQuery {
    pub fn from_features(features: &SyllableFeatures) -> Self {
        Self {
            lomaji: features.lomaji.clone(),
            vowel: features.vowel.clone(),
            coda: features.coda.clone(),
            nasal: features.nasal,
            tone: Some(features.tone),
            limit: None,
            page: None,
        }
    }

    /// Query built from a spelling.
    pub fn from_lomaji(lomaji: &str) -> Self {
        Self::from_features(&analyze_syllable(lomaji))
    }

    pub fn paginate(mut self, limit: usize, page: usize) -> Self {
        self.limit = Some(limit);
        self.page = Some(page);
        self
    }

    /// Rows to skip: `(page - 1) * limit` when both are set, else 0.
    pub fn offset(&self) -> usize {
        match (self.page, self.limit) {
            (Some(page), Some(limit)) => page.saturating_sub(1) * limit,
            _ => 0,
        }
    }
}

/// Pagination block of a successful search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_items: usize,
    /// `ceil(total_items / limit)`, only with a limit
    pub total_pages: Option<usize>,
    pub current_page: Option<usize>,
    pub items_per_page: Option<usize>,
}

/// Outcome of a syllable search. An empty result is a normal outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum SyllableRhymes {
    Found {
        keyword: String,
        data: Vec<SyllableRecord>,
        pagination: Pagination,
    },
    NotFound { message: String },
}

impl SyllableRhymes {
    pub fn is_found(&self) -> bool {
        matches!(self, SyllableRhymes::Found { .. })
    }

    /// Ids of the returned syllables (empty when nothing matched).
    pub fn ids(&self) -> HashSet<SyllableId> {
        match self {
            SyllableRhymes::Found { data, .. } => data.iter().map(|s| s.id).collect(),
            SyllableRhymes::NotFound { .. } => HashSet::new(),
        }
    }

    /// Serialize for JSON output.
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            SyllableRhymes::Found { keyword, data, pagination } => serde_json::json!({
                "keyword": keyword,
                "data": data,
                "pagination": pagination,
                "successful": true,
            }),
            SyllableRhymes::NotFound { message } => serde_json::json!({
                "message": message,
                "successful": false,
            }),
        }
    }
}

/// Find syllables rhyming with `query` under `opts`.
///
/// Store failures propagate as [`RhymeError::Store`]; zero matches is
/// [`SyllableRhymes::NotFound`].
pub fn find_rhyming_syllables<S: SyllableStore + ?Sized>(
    store: &S,
    query: &SyllableQuery,
    opts: &RhymeOptions,
) -> Result<SyllableRhymes, RhymeError> {
    let filter = build_filter(
        &query.vowel,
        query.coda.as_deref(),
        query.nasal,
        query.tone,
        opts,
    );
    log::debug!("Syllable filter for {:?}: {:?}", query.lomaji, filter);

    let data = store.find_syllables(&filter, query.limit, query.offset())?;
    if data.is_empty() {
        return Ok(SyllableRhymes::NotFound {
            message: NO_SYLLABLE_RHYMES.to_string(),
        });
    }

    let total_items = store.count_syllables(&filter)?;
    let total_pages = query.limit.filter(|l| *l > 0).map(|l| total_items.div_ceil(l));
    Ok(SyllableRhymes::Found {
        keyword: query.lomaji.clone(),
        data,
        pagination: Pagination {
            total_items,
            total_pages,
            current_page: query.page,
            items_per_page: query.limit,
        },
    })
}
