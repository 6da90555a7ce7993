//! Flattening volumes into fully populated [`BookRecord`]s.

use serde::Serialize;

use crate::response::{
    AccessInfo, ImageLinks, IndustryIdentifier, Item, Pdf, SaleInfo, VolumeInfo, VolumesResponse,
};

pub(crate) const UNKNOWN_TITLE: &str = "Unknown title";
pub(crate) const UNKNOWN_AUTHORS: &str = "Unknown authors";
pub(crate) const UNKNOWN_PUBLISHER: &str = "Unknown publisher";
pub(crate) const UNKNOWN_PUBLISHED_DATE: &str = "Unknown published date";
pub(crate) const NO_DESCRIPTION: &str = "No description available";
pub(crate) const UNKNOWN_IDENTIFIER_TYPE: &str = "Unknown type";
pub(crate) const UNKNOWN_IDENTIFIER: &str = "Unknown identifier";
pub(crate) const UNKNOWN_LANGUAGE: &str = "Unknown language";
pub(crate) const UNKNOWN_SALEABILITY: &str = "Unknown saleability";
pub(crate) const UNKNOWN_INFO_LINK: &str = "Unknown information link";
pub(crate) const UNKNOWN_WEB_READER_LINK: &str = "Unknown web reader link";

/// A book with every field present, absent source values replaced by a default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Title of the book.
    pub title: String,
    /// Authors in the order the API lists them, never empty.
    pub authors: Vec<String>,
    /// Publisher of the book.
    pub publisher: String,
    /// Published date as given by the API, often only a year.
    pub published_date: String,
    /// Description of the book.
    pub description: String,
    /// Type label of the first industry identifier, e.g. `ISBN_13`.
    pub identifier_type: String,
    /// Value of the first industry identifier.
    pub identifier_value: String,
    /// Number of pages, `0` when unknown.
    pub page_count: u32,
    /// Language code of the book.
    pub language: String,
    /// Saleability of the book, e.g. `FOR_SALE` or `NOT_FOR_SALE`.
    pub saleability: String,
    /// Whether a PDF version is available.
    pub pdf_available: bool,
    /// Link to the book information page.
    pub info_link: String,
    /// Link to read the book in the web reader.
    pub web_reader_link: String,
    /// Link to a thumbnail image, empty when there is none.
    pub thumbnail_url: String,
}

/// Normalizes a volumes response into one [`BookRecord`] per item, in the order of the items.
///
/// A response without items is an empty result rather than an error.
#[must_use]
pub fn normalize(raw: VolumesResponse) -> Vec<BookRecord> {
    raw.items
        .unwrap_or_default()
        .into_iter()
        .map(BookRecord::from)
        .collect()
}

impl From<Item> for BookRecord {
    fn from(item: Item) -> Self {
        // Deconstruct item to take ownership of fields (avoids cloning).
        let Item {
            volume_info,
            sale_info,
            access_info,
        } = item;

        let VolumeInfo {
            title,
            authors,
            publisher,
            published_date,
            description,
            industry_identifiers,
            page_count,
            language,
            saleability,
            image_links,
            info_link,
        } = volume_info.unwrap_or_default();

        let AccessInfo {
            pdf,
            web_reader_link,
        } = access_info.unwrap_or_default();

        // Only the first identifier is kept, any others are ignored.
        let IndustryIdentifier { kind, identifier } = industry_identifiers
            .and_then(|identifiers| identifiers.into_iter().next())
            .unwrap_or_default();

        let saleability =
            saleability.or_else(|| sale_info.and_then(|SaleInfo { saleability }| saleability));

        Self {
            title: or_default(title, UNKNOWN_TITLE),
            authors: authors
                .filter(|authors| !authors.is_empty())
                .unwrap_or_else(|| vec![UNKNOWN_AUTHORS.to_owned()]),
            publisher: or_default(publisher, UNKNOWN_PUBLISHER),
            published_date: or_default(published_date, UNKNOWN_PUBLISHED_DATE),
            description: or_default(description, NO_DESCRIPTION),
            identifier_type: or_default(kind, UNKNOWN_IDENTIFIER_TYPE),
            identifier_value: or_default(identifier, UNKNOWN_IDENTIFIER),
            page_count: page_count.unwrap_or_default(),
            language: or_default(language, UNKNOWN_LANGUAGE),
            saleability: or_default(saleability, UNKNOWN_SALEABILITY),
            pdf_available: pdf
                .and_then(|Pdf { is_available }| is_available)
                .unwrap_or_default(),
            info_link: or_default(info_link, UNKNOWN_INFO_LINK),
            web_reader_link: or_default(web_reader_link, UNKNOWN_WEB_READER_LINK),
            thumbnail_url: image_links
                .and_then(|ImageLinks { thumbnail }| thumbnail)
                .unwrap_or_default(),
        }
    }
}

#[inline]
fn or_default(value: Option<String>, default: &str) -> String {
    value.unwrap_or_else(|| default.to_owned())
}
