use crate::models::{CategorySet, OgData, PreviewCard, TagRecord, TwitterData};

/// Which attribute a lookup matches against.
#[derive(Clone, Copy)]
enum MatchField {
    Name,
    Property,
}

/// First-tag-wins lookup: scan the bucket in scrape order and return the
/// `content` of the first record whose attribute equals `key` (case-sensitive).
/// Empty string when nothing matches or the matching record has no content.
fn find_first(bucket: &[TagRecord], field: MatchField, key: &str) -> String {
    bucket
        .iter()
        .find(|tag| {
            let attr = match field {
                MatchField::Name => &tag.name,
                MatchField::Property => &tag.property,
            };
            attr.as_deref() == Some(key)
        })
        .and_then(|tag| tag.content.clone())
        .unwrap_or_default()
}

/// Property lookup with a fallback to name. Twitter Card tags are
/// conventionally authored with `name` rather than `property`.
fn find_twitter(bucket: &[TagRecord], key: &str) -> String {
    let by_property = find_first(bucket, MatchField::Property, key);
    if by_property.is_empty() {
        find_first(bucket, MatchField::Name, key)
    } else {
        by_property
    }
}

/// Build the social share preview card from the classified tags.
///
/// Warnings and notices are appended in a fixed order so the output is
/// deterministic for a given input. Always succeeds.
pub fn synthesize_preview(url: &str, title: &str, categories: &CategorySet) -> PreviewCard {
    let meta_description = find_first(&categories.standard, MatchField::Name, "description");

    let og_data = OgData {
        title: find_first(&categories.opengraph, MatchField::Property, "og:title"),
        description: find_first(&categories.opengraph, MatchField::Property, "og:description"),
        image: find_first(&categories.opengraph, MatchField::Property, "og:image"),
        url: find_first(&categories.opengraph, MatchField::Property, "og:url"),
        r#type: find_first(&categories.opengraph, MatchField::Property, "og:type"),
    };

    let twitter_data = TwitterData {
        title: find_twitter(&categories.twitter, "twitter:title"),
        description: find_twitter(&categories.twitter, "twitter:description"),
        image: find_twitter(&categories.twitter, "twitter:image"),
        card: find_twitter(&categories.twitter, "twitter:card"),
    };

    let mut warnings = Vec::new();
    let mut notices = Vec::new();

    if og_data.title.is_empty() {
        warnings.push("Missing og:title tag".to_string());
    }
    if og_data.description.is_empty() {
        warnings.push("Missing og:description tag".to_string());
    }
    if og_data.image.is_empty() {
        warnings.push("Missing og:image tag".to_string());
    }
    if twitter_data.title.is_empty() {
        notices.push("Consider adding twitter:title for better Twitter sharing".to_string());
    }

    PreviewCard {
        url: url.to_string(),
        title: title.to_string(),
        meta_description,
        og_data,
        twitter_data,
        warnings,
        notices,
    }
}
