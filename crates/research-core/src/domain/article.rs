//! Article representation as returned by the search API
//!
//! Rows come out of a CSV-backed index, so field types drift: counts show up
//! as floats or strings, and the raw `keywords`/`url` fields sometimes arrive
//! as real arrays instead of the usual Python-repr strings. Decoding accepts
//! all of these and always serializes back to the canonical shape.

use serde::{Deserialize, Deserializer, Serialize};

/// A search result / bookmarked article.
///
/// Identity for bookmarking is `title`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(rename = "abstract", default, deserialize_with = "deserialize_text")]
    pub abstract_text: String,
    /// Raw quasi-JSON keyword list, e.g. `"['graphs', 'networks']"`
    #[serde(default, deserialize_with = "deserialize_raw_field")]
    pub keywords: String,
    #[serde(default, deserialize_with = "deserialize_citations")]
    pub n_citation: u64,
    #[serde(default, deserialize_with = "deserialize_year")]
    pub year: i32,
    /// Raw quasi-JSON URL list or a bare URL
    #[serde(default, deserialize_with = "deserialize_raw_field")]
    pub url: String,
}

impl Article {
    /// Create an article with only a title set.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Whether two articles share a bookmark identity.
    pub fn same_identity(&self, other: &Article) -> bool {
        self.title == other.title
    }
}

/// Strings as-is, null as empty, any other scalar in its JSON text form.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// Raw list fields: strings as-is, arrays/objects re-encoded as JSON text.
///
/// The normalizer parses JSON text, so a real array survives the round trip.
fn deserialize_raw_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_text(deserializer)
}

fn deserialize_citations<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserializer.deserialize_any(LenientNumberVisitor)?;
    // `as` saturates: negatives and NaN land on 0
    Ok(value.map(|v| v.trunc() as u64).unwrap_or(0))
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserializer.deserialize_any(LenientNumberVisitor)?;
    Ok(value.map(|v| v.trunc() as i32).unwrap_or(0))
}

/// Accepts integers, floats, numeric strings and null.
///
/// Unparseable strings decode as `None` rather than failing the whole row.
struct LenientNumberVisitor;

impl<'de> serde::de::Visitor<'de> for LenientNumberVisitor {
    type Value = Option<f64>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a number, numeric string, or null")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E>(self, _v: bool) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(None)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Some(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Some(v as f64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Some(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v.trim().parse::<f64>().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_typical_row() {
        let json = r#"{
            "title": "Attention Is All You Need",
            "abstract": "The dominant sequence transduction models...",
            "keywords": "['transformers', 'attention']",
            "n_citation": 50000,
            "year": 2017,
            "url": "['https://arxiv.org/abs/1706.03762']"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "Attention Is All You Need");
        assert_eq!(article.n_citation, 50000);
        assert_eq!(article.year, 2017);
        assert_eq!(article.keywords, "['transformers', 'attention']");
    }

    #[test]
    fn test_decode_drifted_types() {
        let json = r#"{
            "title": "Drift",
            "abstract": null,
            "keywords": ["a", "b"],
            "n_citation": "17.0",
            "year": 1999.0,
            "url": null
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.abstract_text, "");
        assert_eq!(article.keywords, r#"["a","b"]"#);
        assert_eq!(article.n_citation, 17);
        assert_eq!(article.year, 1999);
        assert_eq!(article.url, "");
    }

    #[test]
    fn test_decode_missing_fields() {
        let article: Article = serde_json::from_str(r#"{"title": "Only a title"}"#).unwrap();
        assert_eq!(article, Article::new("Only a title"));
    }

    #[test]
    fn test_negative_citations_clamp_to_zero() {
        let article: Article =
            serde_json::from_str(r#"{"title": "x", "n_citation": -4}"#).unwrap();
        assert_eq!(article.n_citation, 0);
    }

    #[test]
    fn test_serializes_wire_names() {
        let article = Article {
            abstract_text: "text".to_string(),
            ..Article::new("t")
        };
        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["abstract"], "text");
        assert!(value.get("abstract_text").is_none());
    }
}
