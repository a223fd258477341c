use crate::models::{CategorySet, TagRecord};

/// Recognized `name` attributes for the `standard` bucket.
const STANDARD_NAMES: [&str; 6] = [
    "description",
    "keywords",
    "author",
    "viewport",
    "theme-color",
    "robots",
];

/// Partition validated tag records into the four category buckets.
///
/// Rules are evaluated top to bottom per tag, first match wins. Property-based
/// vocabulary checks come before the generic name-based rule because a tag may
/// legitimately carry both `name` and `property`:
///
/// 1. `property` starts with `og:` → opengraph
/// 2. `name` or `property` starts with `twitter:` → twitter
/// 3. `name` is a recognized standard name, or `http-equiv` is set → standard
/// 4. anything else → other
///
/// Comparisons are case-insensitive; stored values are untouched. Relative
/// order within each bucket follows the input sequence.
pub fn classify(tags: Vec<TagRecord>) -> CategorySet {
    let mut categories = CategorySet::default();

    for tag in tags {
        let name = lower(&tag.name);
        let property = lower(&tag.property);
        let http_equiv = lower(&tag.http_equiv);

        if property.starts_with("og:") {
            categories.opengraph.push(tag);
        } else if name.starts_with("twitter:") || property.starts_with("twitter:") {
            categories.twitter.push(tag);
        } else if STANDARD_NAMES.contains(&name.as_str()) || !http_equiv.is_empty() {
            categories.standard.push(tag);
        } else {
            categories.other.push(tag);
        }
    }

    categories
}

/// Absent attributes compare as empty strings.
fn lower(field: &Option<String>) -> String {
    field.as_deref().unwrap_or("").to_lowercase()
}
