//! The subset of the Google Books volumes response that is read.
//!
//! Every field is optional and a value of an unexpected JSON type is read as if it were absent, so
//! a partially populated or oddly shaped item never fails the whole response. Filling in the
//! absent values is left to [`crate::record::normalize`].

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Top level of a volumes search response.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct VolumesResponse {
    /// Matching volumes in the order the API ranked them, absent when nothing matched.
    #[serde(default, deserialize_with = "lenient_items")]
    pub items: Option<Vec<Item>>,
}

/// A single volume.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Bibliographic details of the volume.
    #[serde(default, deserialize_with = "lenient")]
    pub volume_info: Option<VolumeInfo>,
    /// Where the volume can be bought.
    #[serde(default, deserialize_with = "lenient")]
    pub sale_info: Option<SaleInfo>,
    /// How the volume can be read.
    #[serde(default, deserialize_with = "lenient")]
    pub access_info: Option<AccessInfo>,
}

/// Volume information from the Google Book API.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    /// Title without the subtitle.
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    /// Author names in credit order.
    #[serde(default, deserialize_with = "lenient")]
    pub authors: Option<Vec<String>>,
    /// Publisher name.
    #[serde(default, deserialize_with = "lenient")]
    pub publisher: Option<String>,
    /// Publication date as given, which may be only a year.
    #[serde(default, deserialize_with = "lenient")]
    pub published_date: Option<String>,
    /// Synopsis of the volume.
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    /// ISBNs and other catalog numbers, the first of which is kept.
    #[serde(default, deserialize_with = "lenient")]
    pub industry_identifiers: Option<Vec<IndustryIdentifier>>,
    /// Number of printed pages.
    #[serde(default, deserialize_with = "lenient")]
    pub page_count: Option<u32>,
    /// Two letter language code, e.g. `en`.
    #[serde(default, deserialize_with = "lenient")]
    pub language: Option<String>,
    /// Saleability when given with the volume information rather than the sale details.
    #[serde(default, deserialize_with = "lenient")]
    pub saleability: Option<String>,
    /// Cover images.
    #[serde(default, deserialize_with = "lenient")]
    pub image_links: Option<ImageLinks>,
    /// Page of the volume on Google Books.
    #[serde(default, deserialize_with = "lenient")]
    pub info_link: Option<String>,
}

/// A catalog number such as an ISBN together with its type label.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct IndustryIdentifier {
    /// e.g. `ISBN_13`, `ISBN_10` or `OTHER`
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    /// The number itself, as printed.
    #[serde(default, deserialize_with = "lenient")]
    pub identifier: Option<String>,
}

/// Links to cover images of a volume.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ImageLinks {
    /// Small cover image.
    #[serde(default, deserialize_with = "lenient")]
    pub thumbnail: Option<String>,
}

/// Sale details of a volume.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SaleInfo {
    /// e.g. `FOR_SALE` or `NOT_FOR_SALE`
    #[serde(default, deserialize_with = "lenient")]
    pub saleability: Option<String>,
}

/// Reading access to a volume.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccessInfo {
    /// PDF edition, if any.
    #[serde(default, deserialize_with = "lenient")]
    pub pdf: Option<Pdf>,
    /// Link to read the volume in the browser.
    #[serde(default, deserialize_with = "lenient")]
    pub web_reader_link: Option<String>,
}

/// Availability of a PDF edition.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pdf {
    /// Whether the PDF can be downloaded.
    #[serde(default, deserialize_with = "lenient")]
    pub is_available: Option<bool>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

// Each element is read on its own so a single odd item cannot drop or shift the others.
fn lenient_items<'de, D>(deserializer: D) -> Result<Option<Vec<Item>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(values) => Ok(Some(
            values
                .into_iter()
                .map(|value| serde_json::from_value(value).unwrap_or_default())
                .collect(),
        )),
        _ => Ok(None),
    }
}
