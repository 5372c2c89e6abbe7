//! Minimal WordprocessingML package writer.
//!
//! Produces the six parts Word needs to open a document with headings,
//! bulleted paragraphs and styled tables. Nothing is read back; the package
//! is written in one pass into memory.

use std::io::{Cursor, Write};

use quick_xml::escape::escape;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::{Block, ReportDocument};
use crate::error::Result;

pub const MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Title font size in half-points (20pt).
const TITLE_SIZE: u32 = 40;
/// Space after body paragraphs in twentieths of a point (6pt).
const PARAGRAPH_SPACE_AFTER: u32 = 120;
const TABLE_STYLE: &str = "LightList-Accent1";
const BULLET_NUM_ID: u32 = 1;

const CONTENT_TYPES: &str = r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/><Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS: &str = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/></Relationships>"#;

const SECTION_PROPERTIES: &str = r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr>"#;

impl ReportDocument {
    /// Serialise to `.docx` bytes.
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            FileOptions::<()>::default().compression_method(CompressionMethod::Deflated);

        let parts: [(&str, String); 6] = [
            ("[Content_Types].xml", with_decl(CONTENT_TYPES)),
            ("_rels/.rels", with_decl(PACKAGE_RELS)),
            ("word/_rels/document.xml.rels", with_decl(DOCUMENT_RELS)),
            ("word/styles.xml", styles_xml()),
            ("word/numbering.xml", numbering_xml()),
            ("word/document.xml", self.document_xml()),
        ];
        for (name, body) in parts {
            zip.start_file(name, options)?;
            zip.write_all(body.as_bytes())?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    fn document_xml(&self) -> String {
        let mut body = String::new();
        for block in &self.blocks {
            match block {
                Block::Title { text } => body.push_str(&paragraph(
                    r#"<w:jc w:val="center"/>"#,
                    &format!(r#"<w:sz w:val="{TITLE_SIZE}"/><w:szCs w:val="{TITLE_SIZE}"/>"#),
                    text,
                )),
                Block::Heading { text, level } => body.push_str(&paragraph(
                    &format!(r#"<w:pStyle w:val="Heading{level}"/>"#),
                    "",
                    text,
                )),
                Block::Paragraph { text } => body.push_str(&paragraph(
                    &format!(r#"<w:spacing w:after="{PARAGRAPH_SPACE_AFTER}"/>"#),
                    "",
                    text,
                )),
                Block::Bullet { text } => {
                    body.push_str(&paragraph(r#"<w:pStyle w:val="ListBullet"/>"#, "", text))
                }
                Block::Table { rows } => body.push_str(&table(rows)),
            }
        }
        format!(r#"{XML_DECL}<w:document xmlns:w="{W_NS}"><w:body>{body}{SECTION_PROPERTIES}</w:body></w:document>"#)
    }
}

fn with_decl(xml: &str) -> String {
    format!("{XML_DECL}{xml}")
}

fn run(run_props: &str, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let props = if run_props.is_empty() {
        String::new()
    } else {
        format!("<w:rPr>{run_props}</w:rPr>")
    };
    format!(
        r#"<w:r>{props}<w:t xml:space="preserve">{}</w:t></w:r>"#,
        escape(text)
    )
}

fn paragraph(para_props: &str, run_props: &str, text: &str) -> String {
    let props = if para_props.is_empty() {
        String::new()
    } else {
        format!("<w:pPr>{para_props}</w:pPr>")
    };
    format!("<w:p>{props}{}</w:p>", run(run_props, text))
}

fn table(rows: &[Vec<String>]) -> String {
    let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut xml = format!(
        r#"<w:tbl><w:tblPr><w:tblStyle w:val="{TABLE_STYLE}"/><w:tblW w:w="0" w:type="auto"/><w:tblLook w:val="04A0" w:firstRow="1" w:lastRow="0" w:firstColumn="1" w:lastColumn="0" w:noHBand="0" w:noVBand="1"/></w:tblPr><w:tblGrid>"#
    );
    for _ in 0..cols {
        xml.push_str("<w:gridCol/>");
    }
    xml.push_str("</w:tblGrid>");
    for row in rows {
        xml.push_str("<w:tr>");
        for i in 0..cols {
            let text = row.get(i).map(String::as_str).unwrap_or("");
            xml.push_str(&format!("<w:tc>{}</w:tc>", paragraph("", "", text)));
        }
        xml.push_str("</w:tr>");
    }
    xml.push_str("</w:tbl>");
    xml
}

fn styles_xml() -> String {
    format!(
        r#"{XML_DECL}<w:styles xmlns:w="{W_NS}"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:eastAsia="Calibri" w:cs="Calibri"/><w:sz w:val="22"/><w:szCs w:val="22"/><w:lang w:val="en-US"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="0" w:line="276" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="480" w:after="120"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:color w:val="365F91"/><w:sz w:val="28"/><w:szCs w:val="28"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="ListBullet"><w:name w:val="List Bullet"/><w:basedOn w:val="Normal"/><w:pPr><w:numPr><w:numId w:val="{BULLET_NUM_ID}"/></w:numPr><w:ind w:left="360" w:hanging="360"/></w:pPr></w:style><w:style w:type="table" w:default="1" w:styleId="TableNormal"><w:name w:val="Normal Table"/><w:tblPr><w:tblInd w:w="0" w:type="dxa"/><w:tblCellMar><w:top w:w="0" w:type="dxa"/><w:left w:w="108" w:type="dxa"/><w:bottom w:w="0" w:type="dxa"/><w:right w:w="108" w:type="dxa"/></w:tblCellMar></w:tblPr></w:style><w:style w:type="table" w:styleId="{TABLE_STYLE}"><w:name w:val="Light List Accent 1"/><w:basedOn w:val="TableNormal"/><w:tblPr><w:tblBorders><w:top w:val="single" w:sz="8" w:space="0" w:color="4F81BD"/><w:left w:val="single" w:sz="8" w:space="0" w:color="4F81BD"/><w:bottom w:val="single" w:sz="8" w:space="0" w:color="4F81BD"/><w:right w:val="single" w:sz="8" w:space="0" w:color="4F81BD"/></w:tblBorders></w:tblPr><w:tblStylePr w:type="firstRow"><w:rPr><w:b/><w:color w:val="FFFFFF"/></w:rPr><w:tcPr><w:shd w:val="clear" w:color="auto" w:fill="4F81BD"/></w:tcPr></w:tblStylePr></w:style></w:styles>"#
    )
}

fn numbering_xml() -> String {
    format!(
        r#"{XML_DECL}<w:numbering xmlns:w="{W_NS}"><w:abstractNum w:abstractNumId="0"><w:multiLevelType w:val="singleLevel"/><w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="•"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="360" w:hanging="360"/></w:pPr></w:lvl></w:abstractNum><w:num w:numId="{BULLET_NUM_ID}"><w:abstractNumId w:val="0"/></w:num></w:numbering>"#
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::render;
    use crate::types::PlayRow;
    use std::io::Read;
    use zip::ZipArchive;

    fn part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut out = String::new();
        archive.by_name(name).unwrap().read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn package_contains_required_parts() {
        let bytes = ReportDocument::default().to_docx().unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let mut names: Vec<&str> = archive.file_names().collect();
        names.sort();
        assert_eq!(
            names,
            [
                "[Content_Types].xml",
                "_rels/.rels",
                "word/_rels/document.xml.rels",
                "word/document.xml",
                "word/numbering.xml",
                "word/styles.xml",
            ]
        );
    }

    #[test]
    fn text_is_escaped() {
        let plays = vec![PlayRow::new("Technical Integrity & Error Resolution", 1, 1, 30)];
        let doc = render("Smith <Sons>", "Local", "", &plays, None);
        let xml = part(&doc.to_docx().unwrap(), "word/document.xml");
        assert!(xml.contains("Technical Integrity &amp; Error Resolution"));
        assert!(xml.contains("Smith &lt;Sons&gt; — SEO Action Plan (Prototype)"));
        assert!(!xml.contains("<Sons>"));
    }

    #[test]
    fn blocks_map_to_styles() {
        let plays = vec![PlayRow::new("Local SEO & GBP Optimization", 1, 1, 30)];
        let doc = render("Acme", "Local", "", &plays, None);
        let xml = part(&doc.to_docx().unwrap(), "word/document.xml");
        assert!(xml.contains(r#"<w:jc w:val="center"/>"#));
        assert!(xml.contains(r#"<w:sz w:val="40"/>"#));
        assert!(xml.contains(r#"<w:pStyle w:val="Heading1"/>"#));
        assert!(xml.contains(r#"<w:pStyle w:val="ListBullet"/>"#));
        assert!(xml.contains(r#"<w:tblStyle w:val="LightList-Accent1"/>"#));
        assert!(xml.contains("Month 1"));
    }

    #[test]
    fn sections_are_serialised_in_order() {
        let doc = render("Acme", "Local", "Notes", &[], None);
        let xml = part(&doc.to_docx().unwrap(), "word/document.xml");
        let positions: Vec<usize> = [
            "Acme — SEO Action Plan",
            "Overview",
            "Profile Notes: Notes",
            "Recommended Focus Areas",
            "6-Month Roadmap Timeline (Plays)",
            "Keyword / Topic Enrichment (Optional)",
            "Next Steps",
            "4) Track execution",
        ]
        .iter()
        .map(|needle| xml.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn table_cells_are_never_empty_elements() {
        let rows = vec![
            vec!["Keyword".to_string(), "Volume".to_string()],
            vec!["plumber".to_string()],
        ];
        let xml = table(&rows);
        assert_eq!(xml.matches("<w:tc>").count(), 4);
        assert_eq!(xml.matches("<w:gridCol/>").count(), 2);
        assert!(xml.contains("<w:tc><w:p></w:p></w:tc>"));
    }
}
