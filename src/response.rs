//! Typed search response and result item records.

use std::collections::HashMap;

use serde::Deserialize;

/// Language-tagged values: a mapping from language code to labels.
pub type LangAware = HashMap<String, Vec<String>>;

/// A search API response.
///
/// Decoded fresh per call and never mutated afterwards. The `wskey` echo is
/// omitted since it is already known from the client.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Whether the API considers the request successful.
    pub success: bool,
    /// Sequence number of the request within the API session.
    #[serde(default, rename = "requestNumber")]
    pub request_number: i64,
    /// Number of items in this response page.
    #[serde(default, rename = "itemsCount")]
    pub items_count: i64,
    /// Total number of results matching the query.
    #[serde(default, rename = "totalResults")]
    pub total_results: i64,
    /// Continuation token for the next page of a cursor-paginated search.
    #[serde(default, rename = "nextCursor")]
    pub next_cursor: Option<String>,
    /// Error message reported by the API when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
    /// The result items, in relevance order.
    #[serde(default)]
    pub items: Vec<Item>,
}

/// A single search result with the 'rich' profile metadata set.
///
/// Which fields are populated depends on the requested profile; everything
/// absent from the payload decodes to `None` or an empty collection. See
/// <https://pro.europeana.eu/resources/apis/search#profile-rich>.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    /// Record identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Titles of the object.
    #[serde(default)]
    pub title: Vec<String>,
    /// Titles keyed by language.
    #[serde(default, rename = "dcTitleLangAware")]
    pub title_lang: LangAware,
    /// Descriptions of the object.
    #[serde(default, rename = "dcDescription")]
    pub description: Vec<String>,
    /// Descriptions keyed by language.
    #[serde(default, rename = "dcDescriptionLangAware")]
    pub description_lang: LangAware,
    /// Metadata completeness score assigned by Europeana.
    #[serde(default, rename = "europeanaCompleteness")]
    pub completeness: Option<i64>,
    /// Institutions providing the data.
    #[serde(default, rename = "dataProvider")]
    pub data_provider: Vec<String>,
    /// Rights statements.
    #[serde(default)]
    pub rights: Vec<String>,
    /// Links to the object on the provider's site.
    #[serde(default, rename = "edmIsShownAt")]
    pub source: Vec<String>,
    /// Place latitudes.
    #[serde(default, rename = "edmPlaceLatitude")]
    pub latitude: Vec<String>,
    /// Place longitudes.
    #[serde(default, rename = "edmPlaceLongitude")]
    pub longitude: Vec<String>,
    /// Preview image URLs.
    #[serde(default, rename = "edmPreview")]
    pub preview: Vec<String>,
    /// Stable record URL.
    #[serde(default)]
    pub guid: Option<String>,
    /// API record URL.
    #[serde(default)]
    pub link: Option<String>,
    /// Media type (TEXT, IMAGE, SOUND, VIDEO or 3D).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Aggregating providers.
    #[serde(default)]
    pub provider: Vec<String>,
    /// Creators of the object.
    #[serde(default, rename = "dcCreator")]
    pub creator: Vec<String>,
    /// Creators keyed by language.
    #[serde(default, rename = "dcCreatorLangAware")]
    pub creator_lang: LangAware,
    /// Relevance score for the query.
    #[serde(default)]
    pub score: Option<f64>,
    /// Years associated with the object.
    #[serde(default)]
    pub year: Vec<String>,
    /// Concept term URIs.
    #[serde(default, rename = "edmConceptTerm")]
    pub concept_term: Vec<String>,
    /// Preferred concept labels, one language map per concept.
    #[serde(default, rename = "edmConceptPrefLabel")]
    pub concept_pref_label: Vec<LangAware>,
    /// Preferred concept labels keyed by language.
    #[serde(default, rename = "edmConceptPrefLabelLangAware")]
    pub concept_pref_label_lang: LangAware,
    /// Broader concept terms, one language map per concept.
    #[serde(default, rename = "edmConceptBroaderTerm")]
    pub concept_broader_term: Vec<LangAware>,
    /// Broader concept labels, one language map per concept.
    #[serde(default, rename = "edmConceptBroaderLabel")]
    pub concept_broader_label: Vec<LangAware>,
    /// Timespan labels, one map per timespan.
    #[serde(default, rename = "edmTimespanLabel")]
    pub timespan_label: Vec<HashMap<String, String>>,
    /// Timespan labels keyed by language.
    #[serde(default, rename = "edmTimespanLabelLangAware")]
    pub timespan_label_lang: LangAware,
    /// User-generated content flags.
    #[serde(default)]
    pub ugc: Vec<bool>,
    /// Providing countries.
    #[serde(default)]
    pub country: Vec<String>,
    /// Dataset names.
    #[serde(default, rename = "edmDatasetName")]
    pub dataset_name: Vec<String>,
    /// Object languages.
    #[serde(default, rename = "dcLanguage")]
    pub language: Vec<String>,
    /// Collections the object is part of.
    #[serde(default, rename = "dctermIsPartOf")]
    pub term_is_part_of: Vec<String>,
    /// Record timestamp (epoch milliseconds).
    #[serde(default)]
    pub timestamp: Option<i64>,
    /// Record creation time.
    #[serde(default, rename = "timestampCreated")]
    pub timestamp_created: Option<String>,
    /// Record update time.
    #[serde(default, rename = "timestampUpdate")]
    pub timestamp_update: Option<String>,
    /// Direct media URLs.
    #[serde(default, rename = "edmIsShownBy")]
    pub is_shown_by: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_response() {
        let body = serde_json::json!({
            "success": true,
            "requestNumber": 999,
            "itemsCount": 1,
            "totalResults": 42,
            "items": [{
                "id": "/123/abc",
                "title": ["Mona Lisa"],
                "dcTitleLangAware": {"en": ["Mona Lisa"], "fr": ["La Joconde"]},
                "europeanaCompleteness": 10,
                "dataProvider": ["Louvre"],
                "rights": ["http://creativecommons.org/publicdomain/mark/1.0/"],
                "type": "IMAGE",
                "score": 16.150663,
                "ugc": [false],
                "edmTimespanLabel": [{"def": "16th century"}]
            }]
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        assert!(response.success);
        assert_eq!(response.request_number, 999);
        assert_eq!(response.items_count, 1);
        assert_eq!(response.total_results, 42);
        assert_eq!(response.next_cursor, None);
        assert_eq!(response.error, None);

        let item = &response.items[0];
        assert_eq!(item.id.as_deref(), Some("/123/abc"));
        assert_eq!(item.title, vec!["Mona Lisa"]);
        assert_eq!(item.title_lang["fr"], vec!["La Joconde"]);
        assert_eq!(item.completeness, Some(10));
        assert_eq!(item.kind.as_deref(), Some("IMAGE"));
        assert_eq!(item.score, Some(16.150663));
        assert_eq!(item.ugc, vec![false]);
        assert_eq!(item.timespan_label[0]["def"], "16th century");
    }

    #[test]
    fn test_decode_failure_response_without_items() {
        let body = r#"{"success":false,"error":"Invalid API key","requestNumber":1}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Invalid API key"));
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_decode_cursor_field() {
        let body = r#"{"success":true,"nextCursor":"AoE1FjU2","items":[]}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.next_cursor.as_deref(), Some("AoE1FjU2"));
    }

    #[test]
    fn test_missing_success_field_is_a_decode_error() {
        let body = r#"{"itemsCount":0,"items":[]}"#;
        assert!(serde_json::from_str::<SearchResponse>(body).is_err());
    }

    #[test]
    fn test_sparse_item_decodes_to_defaults() {
        let item: Item = serde_json::from_str("{}").unwrap();
        assert_eq!(item.id, None);
        assert!(item.title.is_empty());
        assert!(item.title_lang.is_empty());
        assert_eq!(item.score, None);
        assert_eq!(item.timestamp, None);
    }
}
