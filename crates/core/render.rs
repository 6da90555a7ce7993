use std::io::{self, Write};

use booksearch::{BookRecord, Session};

const INDENT: &str = "    ";

pub fn write_results<W: Write>(out: &mut W, session: &Session, details: bool) -> io::Result<()> {
    if let Some((mode, query)) = session.searched() {
        writeln!(out, "Results for {}{query}", mode.prefix())?;
    }
    let records = session.records();
    writeln!(out, "Found {} items.", records.len())?;

    for record in records {
        writeln!(out)?;
        write_summary(out, record)?;
        if details {
            write_details(out, record)?;
        }
    }
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, record: &BookRecord) -> io::Result<()> {
    writeln!(out, "{}", record.title)?;
    if record.thumbnail_url.is_empty() {
        writeln!(out, "{INDENT}Image: No Image")?;
    } else {
        writeln!(out, "{INDENT}Image: {}", record.thumbnail_url)?;
    }
    writeln!(out, "{INDENT}Author: {}", record.authors.join(", "))?;
    writeln!(out, "{INDENT}Publisher: {}", record.publisher)?;
    writeln!(out, "{INDENT}Description: {}", record.description)
}

/// Writes the expandable panel of a book.
pub fn write_details<W: Write>(out: &mut W, record: &BookRecord) -> io::Result<()> {
    let indent = INDENT.repeat(2);
    writeln!(out, "{INDENT}More Details")?;
    writeln!(out, "{indent}ISBN Type: {}", record.identifier_type)?;
    writeln!(out, "{indent}ISBN Number: {}", record.identifier_value)?;
    writeln!(out, "{indent}Published Date: {}", record.published_date)?;
    writeln!(out, "{indent}Page Count: {}", record.page_count)?;
    writeln!(out, "{indent}Saleability: {}", record.saleability)?;
    writeln!(out, "{indent}PDF Available: {}", yes_no(record.pdf_available))?;
    writeln!(out, "{indent}Link: {}", record.info_link)
}

const fn yes_no(b: bool) -> &'static str {
    if b {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booksearch::SearchMode;

    fn record() -> BookRecord {
        BookRecord {
            title: "Dune".to_owned(),
            authors: vec!["Frank Herbert".to_owned(), "Brian Herbert".to_owned()],
            publisher: "Ace".to_owned(),
            published_date: "2005".to_owned(),
            description: "Set on the desert planet Arrakis.".to_owned(),
            identifier_type: "ISBN_13".to_owned(),
            identifier_value: "9780441013593".to_owned(),
            page_count: 528,
            language: "en".to_owned(),
            saleability: "FOR_SALE".to_owned(),
            pdf_available: true,
            info_link: "http://books.google.com/books?id=B1hSG45JCX4C".to_owned(),
            web_reader_link: "Unknown web reader link".to_owned(),
            thumbnail_url: String::new(),
        }
    }

    fn shown(mode: SearchMode, query: &str, records: Vec<BookRecord>) -> Session {
        Session::new().submit(mode, query, Some("key"), 40, |_| Ok(records))
    }

    fn rendered<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        write(&mut out).expect("writing to a Vec does not fail");
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn summary_shows_main_fields_and_missing_image() {
        let text = rendered(|out| write_summary(out, &record()));

        assert_eq!(
            "Dune\n    Image: No Image\n    Author: Frank Herbert, Brian Herbert\n    Publisher: Ace\n    Description: Set on the desert planet Arrakis.\n",
            text
        );
    }

    #[test]
    fn details_show_publication_fields() {
        let text = rendered(|out| write_details(out, &record()));

        assert!(text.starts_with("    More Details\n"));
        assert!(text.contains("        ISBN Type: ISBN_13\n"));
        assert!(text.contains("        ISBN Number: 9780441013593\n"));
        assert!(text.contains("        Page Count: 528\n"));
        assert!(text.contains("        PDF Available: Yes\n"));
        assert!(text.contains("        Link: http://books.google.com/books?id=B1hSG45JCX4C\n"));
    }

    #[test]
    fn zero_results_are_still_counted() {
        let session = shown(SearchMode::Category, "basket weaving", vec![]);
        let text = rendered(|out| write_results(out, &session, true));
        assert_eq!("Results for subject:basket weaving\nFound 0 items.\n", text);
    }

    #[test]
    fn results_only_include_details_when_asked() {
        let session = shown(SearchMode::Author, "Herbert", vec![record(), record()]);

        let without = rendered(|out| write_results(out, &session, false));
        assert!(without.starts_with("Results for inauthor:Herbert\nFound 2 items.\n"));
        assert_eq!(2, without.matches("Author: ").count());
        assert!(!without.contains("More Details"));

        let with = rendered(|out| write_results(out, &session, true));
        assert_eq!(2, with.matches("More Details").count());
    }
}
