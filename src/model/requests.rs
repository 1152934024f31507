/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    END_DATE_PARAM, FIELDS_PARAM, START_DATE_PARAM, SYMBOL_PARAM, TYPES_PARAM,
};
use chrono::{DateTime, SecondsFormat, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Query parameters handed to a request executor
///
/// A key mapped to `None` is part of the request description but carries no
/// value; executors drop such pairs from the query string.
pub type QueryParams = BTreeMap<String, Option<String>>;

/// Formats a timestamp the way the transaction endpoints expect it
///
/// RFC 3339 in UTC with a `Z` suffix. Fractional seconds are written only when
/// present, so the text parses back to the same instant.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Selects optional account fields (for example `positions`)
///
/// Built from a single name or from a set of names. Blank names are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct FieldSelector {
    fields: Vec<String>,
}

impl FieldSelector {
    /// Creates a selector from any collection of field names
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|f| {
                let f: String = f.into();
                f.trim().to_string()
            })
            .filter(|f| !f.is_empty())
            .collect();
        Self { fields }
    }

    /// Returns `true` when no field is selected
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The selected field names, in insertion order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Comma separated value for the `fields` query parameter, if any
    pub fn to_param(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.fields.join(","))
        }
    }
}

impl From<&str> for FieldSelector {
    fn from(value: &str) -> Self {
        Self::new([value])
    }
}

impl From<String> for FieldSelector {
    fn from(value: String) -> Self {
        Self::new([value])
    }
}

impl From<&[&str]> for FieldSelector {
    fn from(value: &[&str]) -> Self {
        Self::new(value.iter().copied())
    }
}

impl From<Vec<String>> for FieldSelector {
    fn from(value: Vec<String>) -> Self {
        Self::new(value)
    }
}

impl From<BTreeSet<String>> for FieldSelector {
    fn from(value: BTreeSet<String>) -> Self {
        Self::new(value)
    }
}

impl From<HashSet<String>> for FieldSelector {
    // sorted so the query string does not depend on hash order
    fn from(value: HashSet<String>) -> Self {
        Self::new(value.into_iter().collect::<BTreeSet<_>>())
    }
}

/// Builds the parameters for the account detail endpoints
///
/// `fields` is included only when the selector is present and non-empty.
pub fn fields_params(fields: Option<&FieldSelector>) -> QueryParams {
    let mut params = QueryParams::new();
    if let Some(value) = fields.and_then(FieldSelector::to_param) {
        params.insert(FIELDS_PARAM.to_string(), Some(value));
    }
    params
}

/// Parameters for the account transactions endpoint
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct TransactionsRequest {
    /// Start of the transaction window
    pub start_date: DateTime<Utc>,
    /// End of the transaction window
    pub end_date: DateTime<Utc>,
    /// Optional transaction type filter (e.g. `TRADE`)
    pub types: Option<String>,
    /// Optional symbol filter
    pub symbol: Option<String>,
}

impl TransactionsRequest {
    /// Create a request for the given window with no filters
    pub fn new(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            start_date,
            end_date,
            types: None,
            symbol: None,
        }
    }

    /// Set the transaction type filter
    pub fn with_types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }

    /// Set the symbol filter
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Query parameters for this request
    ///
    /// `types` and `symbol` are always present, mapped to `None` when unset.
    pub fn to_params(&self) -> QueryParams {
        QueryParams::from([
            (
                START_DATE_PARAM.to_string(),
                Some(format_timestamp(&self.start_date)),
            ),
            (
                END_DATE_PARAM.to_string(),
                Some(format_timestamp(&self.end_date)),
            ),
            (TYPES_PARAM.to_string(), self.types.clone()),
            (SYMBOL_PARAM.to_string(), self.symbol.clone()),
        ])
    }
}
