//! Case-search input for the Public Case Locator.
//!
//! The PCL `cases/find` endpoint accepts a JSON document whose fields
//! are search filters; [`CaseQuery`] models the case-number filter and
//! serializes to exactly the wire shape the endpoint expects.  The
//! response is deliberately left untyped (`serde_json::Value`) and
//! passed back to the caller unchanged.

use serde::Serialize;

/// Search input for [`PacerClient::find_case`](crate::PacerClient::find_case).
///
/// A case number combines district, year, case type and sequence, e.g.
/// `1:2002bk20340`.  The value is passed through verbatim; the remote
/// service owns its interpretation.
///
/// # Examples
///
/// ```
/// use pacer_sdk::CaseQuery;
///
/// let query = CaseQuery::number("1:2002bk20340");
/// assert_eq!(query.case_number.as_deref(), Some("1:2002bk20340"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaseQuery {
    /// Full case number to search for.  Omitted from the request body
    /// when absent, not serialized as `null`.
    #[serde(rename = "caseNumberFull", skip_serializing_if = "Option::is_none")]
    pub case_number: Option<String>,
}

impl CaseQuery {
    /// Build a query for a single full case number.
    pub fn number(case_number: impl Into<String>) -> Self {
        Self {
            case_number: Some(case_number.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_wire_field_name() {
        let query = CaseQuery::number("1:2002bk20340");
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, json!({ "caseNumberFull": "1:2002bk20340" }));
    }

    #[test]
    fn absent_number_is_omitted_not_null() {
        let value = serde_json::to_value(CaseQuery::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
