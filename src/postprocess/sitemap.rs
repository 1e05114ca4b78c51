use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::utils::error::ThemeError;
use crate::utils::fs::write_file;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const SITEMAP_FILE: &str = "sitemap.xml";

fn xml_err<E: std::fmt::Display>(err: E) -> ThemeError {
    ThemeError::Sitemap(err.to_string())
}

/// Render a `urlset` document with one `url/loc` per link, in order
pub fn render_sitemap(links: &[String]) -> Result<String, ThemeError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_err)?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NAMESPACE));
    writer.write_event(Event::Start(urlset)).map_err(xml_err)?;

    for link in links {
        writer.write_event(Event::Start(BytesStart::new("url"))).map_err(xml_err)?;
        writer.write_event(Event::Start(BytesStart::new("loc"))).map_err(xml_err)?;
        writer.write_event(Event::Text(BytesText::new(link))).map_err(xml_err)?;
        writer.write_event(Event::End(BytesEnd::new("loc"))).map_err(xml_err)?;
        writer.write_event(Event::End(BytesEnd::new("url"))).map_err(xml_err)?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset"))).map_err(xml_err)?;

    String::from_utf8(writer.into_inner()).map_err(xml_err)
}

/// Write `sitemap.xml` into the output directory
pub fn write_sitemap(outdir: &Path, links: &[String]) -> Result<(), ThemeError> {
    let xml = render_sitemap(links)?;
    write_file(outdir.join(SITEMAP_FILE), &xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sitemap() {
        let links = vec![
            "https://docs.example.com/index.html".to_string(),
            "https://docs.example.com/guide/a&b.html".to_string(),
        ];
        let xml = render_sitemap(&links).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        let first = xml.find("<loc>https://docs.example.com/index.html</loc>").unwrap();
        let second = xml.find("<loc>https://docs.example.com/guide/a&amp;b.html</loc>").unwrap();
        assert!(first < second);
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_write_sitemap() {
        let dir = tempfile::tempdir().unwrap();
        write_sitemap(dir.path(), &["https://x.org/a.html".to_string()]).unwrap();

        let xml = std::fs::read_to_string(dir.path().join(SITEMAP_FILE)).unwrap();
        assert!(xml.contains("<loc>https://x.org/a.html</loc>"));
    }
}
