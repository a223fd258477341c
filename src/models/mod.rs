use serde::{Deserialize, Serialize};

// ============================================================================
// Tag Records
// ============================================================================

/// Raw attribute bundle for one scraped `<meta>` element, exactly as the
/// renderer found it. Any of the five attributes may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTag {
    pub name: Option<String>,
    pub property: Option<String>,
    pub content: Option<String>,
    pub charset: Option<String>,
    pub http_equiv: Option<String>,
}

/// A validated meta tag: at least one attribute is present and non-empty.
/// Field values are preserved verbatim from the scrape — classification
/// lowercases for comparison only, never for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub name: Option<String>,
    pub property: Option<String>,
    pub content: Option<String>,
    pub charset: Option<String>,
    pub http_equiv: Option<String>,
}

impl TagRecord {
    /// Returns `Some` iff at least one attribute carries information.
    /// An all-empty bundle is a normal skip, not an error.
    pub fn from_raw(raw: RawTag) -> Option<TagRecord> {
        let nonempty = |f: &Option<String>| f.as_deref().is_some_and(|s| !s.is_empty());
        if [
            &raw.name,
            &raw.property,
            &raw.content,
            &raw.charset,
            &raw.http_equiv,
        ]
        .into_iter()
        .any(nonempty)
        {
            Some(TagRecord {
                name: raw.name,
                property: raw.property,
                content: raw.content,
                charset: raw.charset,
                http_equiv: raw.http_equiv,
            })
        } else {
            None
        }
    }
}

// ============================================================================
// Category Set
// ============================================================================

/// The four classification buckets. Order within each bucket is scrape order;
/// downstream lookups rely on it for first-tag-wins semantics. Buckets with
/// no tags serialize as empty arrays rather than disappearing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySet {
    pub standard: Vec<TagRecord>,
    pub opengraph: Vec<TagRecord>,
    pub twitter: Vec<TagRecord>,
    pub other: Vec<TagRecord>,
}

impl CategorySet {
    pub fn len(&self) -> usize {
        self.standard.len() + self.opengraph.len() + self.twitter.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All buckets concatenated in category order (standard, opengraph,
    /// twitter, other).
    pub fn flatten(&self) -> Vec<TagRecord> {
        self.standard
            .iter()
            .chain(&self.opengraph)
            .chain(&self.twitter)
            .chain(&self.other)
            .cloned()
            .collect()
    }
}

// ============================================================================
// Preview Card
// ============================================================================

/// The five Open Graph fields a share preview is built from. Missing tags
/// are empty strings, never missing keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgData {
    #[serde(rename = "og:title")]
    pub title: String,
    #[serde(rename = "og:description")]
    pub description: String,
    #[serde(rename = "og:image")]
    pub image: String,
    #[serde(rename = "og:url")]
    pub url: String,
    #[serde(rename = "og:type")]
    pub r#type: String,
}

/// Twitter Card fields for the share preview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterData {
    #[serde(rename = "twitter:title")]
    pub title: String,
    #[serde(rename = "twitter:description")]
    pub description: String,
    #[serde(rename = "twitter:image")]
    pub image: String,
    #[serde(rename = "twitter:card")]
    pub card: String,
}

/// Synthesized social share preview plus completeness warnings/notices.
/// Built once per analysis request and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewCard {
    pub url: String,
    pub title: String,
    pub meta_description: String,
    pub og_data: OgData,
    pub twitter_data: TwitterData,
    pub warnings: Vec<String>,
    pub notices: Vec<String>,
}

// ============================================================================
// Analyze response
// ============================================================================

/// The page state as scraped and classified, echoed back to the caller.
#[derive(Debug, Serialize)]
pub struct CurrentData {
    pub title: String,
    pub meta_tags: CategorySet,
    pub preview_data: PreviewCard,
}

/// Full response shape for `GET /analyze`.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub url: String,
    pub current_data: CurrentData,
    /// The model's critique, passed through as parsed JSON. Only syntactic
    /// validity is guaranteed.
    pub analysis: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_all_absent() {
        assert!(TagRecord::from_raw(RawTag::default()).is_none());
    }

    #[test]
    fn from_raw_rejects_all_empty_strings() {
        let raw = RawTag {
            name: Some(String::new()),
            property: Some(String::new()),
            content: Some(String::new()),
            charset: Some(String::new()),
            http_equiv: Some(String::new()),
        };
        assert!(TagRecord::from_raw(raw).is_none());
    }

    #[test]
    fn from_raw_accepts_single_field() {
        let raw = RawTag {
            charset: Some("utf-8".into()),
            ..RawTag::default()
        };
        let tag = TagRecord::from_raw(raw).unwrap();
        assert_eq!(tag.charset.as_deref(), Some("utf-8"));
        assert!(tag.name.is_none());
    }

    #[test]
    fn from_raw_preserves_values_verbatim() {
        let raw = RawTag {
            property: Some("OG:Title".into()),
            content: Some("  Spaced  ".into()),
            ..RawTag::default()
        };
        let tag = TagRecord::from_raw(raw).unwrap();
        assert_eq!(tag.property.as_deref(), Some("OG:Title"));
        assert_eq!(tag.content.as_deref(), Some("  Spaced  "));
    }

    #[test]
    fn og_data_serializes_with_prefixed_keys() {
        let og = OgData {
            title: "Hello".into(),
            ..OgData::default()
        };
        let json = serde_json::to_value(&og).unwrap();
        assert_eq!(json["og:title"], "Hello");
        assert_eq!(json["og:type"], "");
    }

    #[test]
    fn empty_category_set_serializes_all_four_buckets() {
        let json = serde_json::to_value(CategorySet::default()).unwrap();
        for key in ["standard", "opengraph", "twitter", "other"] {
            assert!(json[key].as_array().unwrap().is_empty(), "missing {key}");
        }
    }
}
