//! Slide-deck generation.
//!
//! Slides are kept as an in-memory tree of title, subtitle, text lines and
//! tables, then written as an OOXML presentation package with the `zip`
//! crate. Every slide uses a single blank layout; all content is placed in
//! absolutely positioned text boxes and table frames.

use std::fmt::Write as _;
use std::io::{Cursor, Write};
use tracing::debug;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{DocError, Result};
use crate::table::{GridTable, HorizontalAlign, Rgb, StyleProfile, TableHandle, TableShape, TableSink, VerticalAlign};
use crate::text::Text;

const EMU_PER_INCH: i64 = 914_400;
const EMU_PER_POINT: i64 = 12_700;

const SLIDE_WIDTH: i64 = 10 * EMU_PER_INCH;
const SLIDE_HEIGHT: i64 = EMU_PER_INCH * 15 / 2;

const LEFT: i64 = EMU_PER_INCH * 6 / 10;
const CONTENT_WIDTH: i64 = EMU_PER_INCH * 88 / 10;
const TABLE_WIDTH: i64 = EMU_PER_INCH * 85 / 10;
const ROW_HEIGHT: i64 = EMU_PER_INCH * 35 / 100;
const TABLE_GAP: i64 = EMU_PER_INCH / 5;

const TITLE_COLOR: Rgb = Rgb::hex(0x333333);
const SUBTITLE_COLOR: Rgb = Rgb::hex(0x888888);

fn inches(tenths: i64) -> i64 {
    EMU_PER_INCH * tenths / 10
}

fn points(pt: f32) -> i64 {
    (pt * EMU_PER_POINT as f32).round() as i64
}

/// One line of slide body text.
#[derive(Debug, Clone, PartialEq)]
pub enum DeckLine {
    /// Bold 16pt lead line.
    Heading(Text),
    /// Top-level 14pt line.
    Item(Text),
    /// Indented 13pt line.
    SubItem(Text),
    /// Vertical gap.
    Blank,
}

impl DeckLine {
    /// Parse the authoring shorthand: a leading `**` marks a heading, an
    /// empty string a gap, and two leading spaces a sub-item.
    pub fn parse(line: &str) -> Self {
        if line.is_empty() {
            Self::Blank
        } else if line.starts_with("**") {
            Self::Heading(Text::bold(line.replace("**", "")))
        } else if let Some(rest) = line.strip_prefix("  ") {
            Self::SubItem(Text::markup(rest.trim_start()))
        } else {
            Self::Item(Text::markup(line))
        }
    }
}

/// A single slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    title: String,
    subtitle: Option<String>,
    lines: Vec<DeckLine>,
}

impl Slide {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn lines(&self) -> &[DeckLine] {
        &self.lines
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) -> &mut Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn add_line(&mut self, line: &str) -> &mut Self {
        self.lines.push(DeckLine::parse(line));
        self
    }

    pub fn add_lines(&mut self, lines: &[&str]) -> &mut Self {
        for line in lines {
            self.add_line(line);
        }
        self
    }
}

#[derive(Debug, Clone)]
struct PlacedTable {
    slide: usize,
    grid: GridTable,
}

/// An in-memory slide deck.
#[derive(Debug, Clone)]
pub struct SlideDeck {
    slides: Vec<Slide>,
    tables: Vec<PlacedTable>,
    font: &'static str,
}

impl Default for SlideDeck {
    fn default() -> Self {
        Self::new("Calibri")
    }
}

impl SlideDeck {
    pub fn new(font: &'static str) -> Self {
        Self {
            slides: Vec::new(),
            tables: Vec::new(),
            font,
        }
    }

    /// Start a new slide; tables rendered afterwards land on it.
    pub fn add_slide(&mut self, title: impl Into<String>) -> &mut Slide {
        self.slides.push(Slide {
            title: title.into(),
            subtitle: None,
            lines: Vec::new(),
        });
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Tables placed on the slide at `index`, in insertion order.
    pub fn tables_on(&self, index: usize) -> impl Iterator<Item = &GridTable> {
        self.tables
            .iter()
            .filter(move |t| t.slide == index)
            .map(|t| &t.grid)
    }

    /// Write the OOXML presentation package.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let count = self.slides.len();
        debug!(slides = count, tables = self.tables.len(), "packing pptx");
        let mut parts: Vec<(String, String)> = vec![
            ("[Content_Types].xml".into(), content_types_xml(count)),
            ("_rels/.rels".into(), ROOT_RELS.into()),
            ("ppt/presentation.xml".into(), presentation_xml(count)),
            ("ppt/_rels/presentation.xml.rels".into(), presentation_rels_xml(count)),
            ("ppt/slideMasters/slideMaster1.xml".into(), SLIDE_MASTER.into()),
            ("ppt/slideMasters/_rels/slideMaster1.xml.rels".into(), SLIDE_MASTER_RELS.into()),
            ("ppt/slideLayouts/slideLayout1.xml".into(), SLIDE_LAYOUT.into()),
            ("ppt/slideLayouts/_rels/slideLayout1.xml.rels".into(), SLIDE_LAYOUT_RELS.into()),
            ("ppt/theme/theme1.xml".into(), theme_xml(self.font)),
        ];
        for (i, _) in self.slides.iter().enumerate() {
            let n = i + 1;
            parts.push((format!("ppt/slides/slide{n}.xml"), self.slide_xml(i)));
            parts.push((format!("ppt/slides/_rels/slide{n}.xml.rels"), SLIDE_RELS.into()));
        }

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for (path, body) in &parts {
            zip.start_file(path.as_str(), options)?;
            zip.write_all(body.as_bytes())?;
        }
        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    fn slide_xml(&self, index: usize) -> String {
        let slide = &self.slides[index];
        let mut shapes = String::new();
        let mut ids = 2..;
        let mut next_id = || ids.next().unwrap_or_default();

        let title = TextRun {
            size: 28.0,
            bold: true,
            color: Some(TITLE_COLOR),
            font: self.font,
        };
        shapes.push_str(&text_box(
            next_id(),
            (LEFT, inches(4), CONTENT_WIDTH, inches(8)),
            &paragraph(&Text::plain(slide.title.as_str()), &title, 0, None),
        ));

        let mut top = inches(14);
        if let Some(subtitle) = &slide.subtitle {
            let run = TextRun {
                size: 14.0,
                bold: false,
                color: Some(SUBTITLE_COLOR),
                font: self.font,
            };
            shapes.push_str(&text_box(
                next_id(),
                (LEFT, EMU_PER_INCH * 115 / 100, CONTENT_WIDTH, inches(4)),
                &paragraph(&Text::plain(subtitle.as_str()), &run, 0, None),
            ));
            top = inches(17);
        }

        for grid in self.tables_on(index) {
            let id = next_id();
            shapes.push_str(&table_frame(id, LEFT, top, grid));
            top += ROW_HEIGHT * grid.row_count() as i64 + TABLE_GAP;
        }

        if !slide.lines.is_empty() {
            let body: String = slide.lines.iter().map(|line| self.line_xml(line)).collect();
            shapes.push_str(&text_box(next_id(), (LEFT, top, CONTENT_WIDTH, inches(50)), &body));
        }

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"
  xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"
  xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:cSld>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
{shapes}    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#
        )
    }

    fn line_xml(&self, line: &DeckLine) -> String {
        let run = |size: f32, bold: bool| TextRun {
            size,
            bold,
            color: None,
            font: self.font,
        };
        match line {
            DeckLine::Heading(text) => paragraph(text, &run(16.0, true), 0, Some(8.0)),
            DeckLine::Item(text) => paragraph(text, &run(14.0, false), 0, Some(4.0)),
            DeckLine::SubItem(text) => paragraph(text, &run(13.0, false), 1, Some(4.0)),
            DeckLine::Blank => {
                "<a:p><a:pPr><a:spcAft><a:spcPts val=\"600\"/></a:spcAft></a:pPr><a:endParaRPr lang=\"en-US\"/></a:p>\n"
                    .to_string()
            }
        }
    }
}

impl TableSink for SlideDeck {
    fn add_table(&mut self, shape: TableShape, style: &StyleProfile) -> Result<TableHandle> {
        if self.slides.is_empty() {
            return Err(DocError::NoSlide);
        }
        self.tables.push(PlacedTable {
            slide: self.slides.len() - 1,
            grid: GridTable::new(shape, style),
        });
        Ok(TableHandle(self.tables.len() - 1))
    }

    fn table(&self, handle: TableHandle) -> Option<&GridTable> {
        self.tables.get(handle.0).map(|t| &t.grid)
    }

    fn table_mut(&mut self, handle: TableHandle) -> Option<&mut GridTable> {
        self.tables.get_mut(handle.0).map(|t| &mut t.grid)
    }
}

// ---------------------------------------------------------------------------
// DrawingML fragments
// ---------------------------------------------------------------------------

struct TextRun {
    size: f32,
    bold: bool,
    color: Option<Rgb>,
    font: &'static str,
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn run_properties(run: &TextRun, bold: bool) -> String {
    let size = (run.size * 100.0).round() as i64;
    let b = if bold || run.bold { r#" b="1""# } else { "" };
    let fill = run
        .color
        .map(|c| format!(r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, c.to_hex()))
        .unwrap_or_default();
    format!(
        r#"<a:rPr lang="en-US" sz="{size}"{b} dirty="0">{fill}<a:latin typeface="{}"/></a:rPr>"#,
        xml_escape(run.font)
    )
}

fn paragraph(text: &Text, run: &TextRun, level: u8, space_after: Option<f32>) -> String {
    let mut ppr = String::new();
    if level > 0 || space_after.is_some() {
        let lvl = if level > 0 {
            format!(r#" lvl="{level}" marL="{}""#, points(27.0) * level as i64)
        } else {
            String::new()
        };
        let spacing = space_after
            .map(|pt| format!(r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#, (pt * 100.0) as i64))
            .unwrap_or_default();
        ppr = format!("<a:pPr{lvl}>{spacing}</a:pPr>");
    }
    let mut runs = String::new();
    for span in text.spans() {
        let _ = write!(
            runs,
            "<a:r>{}<a:t>{}</a:t></a:r>",
            run_properties(run, span.bold),
            xml_escape(&span.text)
        );
    }
    let size = (run.size * 100.0).round() as i64;
    format!(r#"<a:p>{ppr}{runs}<a:endParaRPr lang="en-US" sz="{size}"/></a:p>"#) + "\n"
}

fn text_box(id: u32, (x, y, cx, cy): (i64, i64, i64, i64), body: &str) -> String {
    format!(
        r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="{id}" name="TextBox {id}"/>
          <p:cNvSpPr txBox="1"/>
          <p:nvPr/>
        </p:nvSpPr>
        <p:spPr>
          <a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm>
          <a:prstGeom prst="rect"><a:avLst/></a:prstGeom>
          <a:noFill/>
        </p:spPr>
        <p:txBody>
          <a:bodyPr wrap="square" rtlCol="0"/>
          <a:lstStyle/>
{body}        </p:txBody>
      </p:sp>
"#
    )
}

fn table_frame(id: u32, x: i64, y: i64, grid: &GridTable) -> String {
    let style = grid.style();
    let columns = grid.column_count().max(1);
    let widths: Vec<i64> = match grid.column_widths() {
        Some(widths) => widths.iter().map(|w| points(*w)).collect(),
        None => vec![TABLE_WIDTH / columns as i64; columns],
    };
    let total_width: i64 = widths.iter().sum();
    let height = ROW_HEIGHT * grid.row_count() as i64;

    let grid_cols: String = widths
        .iter()
        .map(|w| format!(r#"<a:gridCol w="{w}"/>"#))
        .collect();

    let algn = match style.align {
        HorizontalAlign::Left => "l",
        HorizontalAlign::Center => "ctr",
        HorizontalAlign::Right => "r",
    };
    let anchor = match style.valign {
        VerticalAlign::Top => "t",
        VerticalAlign::Middle => "ctr",
        VerticalAlign::Bottom => "b",
    };
    let border_w = points(style.border_width);
    let border_color = style.border_color.to_hex();
    let borders: String = ["lnL", "lnR", "lnT", "lnB"]
        .iter()
        .map(|tag| {
            format!(
                r#"<a:{tag} w="{border_w}"><a:solidFill><a:srgbClr val="{border_color}"/></a:solidFill></a:{tag}>"#
            )
        })
        .collect();
    let pad = style.padding;

    let mut rows = String::new();
    for row in grid.rows() {
        let _ = write!(rows, r#"<a:tr h="{ROW_HEIGHT}">"#);
        for cell in row {
            let run = TextRun {
                size: style.font_size,
                bold: cell.style.bold,
                color: Some(style.text_color),
                font: style.font_family,
            };
            let size = (style.font_size * 100.0).round() as i64;
            let mut paragraphs = String::new();
            for line in cell.text.split('\n') {
                if line.is_empty() {
                    let _ = write!(paragraphs, r#"<a:p><a:pPr algn="{algn}"/><a:endParaRPr lang="en-US" sz="{size}"/></a:p>"#);
                } else {
                    let _ = write!(
                        paragraphs,
                        r#"<a:p><a:pPr algn="{algn}"/><a:r>{}<a:t>{}</a:t></a:r></a:p>"#,
                        run_properties(&run, false),
                        xml_escape(line)
                    );
                }
            }
            let fill = match cell.style.background {
                Some(bg) => format!(r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, bg.to_hex()),
                None => "<a:noFill/>".to_string(),
            };
            let _ = write!(
                rows,
                r#"<a:tc><a:txBody><a:bodyPr/><a:lstStyle/>{paragraphs}</a:txBody><a:tcPr marL="{}" marR="{}" marT="{}" marB="{}" anchor="{anchor}">{borders}{fill}</a:tcPr></a:tc>"#,
                points(pad.left),
                points(pad.right),
                points(pad.top),
                points(pad.bottom),
            );
        }
        rows.push_str("</a:tr>");
    }

    format!(
        r#"      <p:graphicFrame>
        <p:nvGraphicFramePr>
          <p:cNvPr id="{id}" name="Table {id}"/>
          <p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>
          <p:nvPr/>
        </p:nvGraphicFramePr>
        <p:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{total_width}" cy="{height}"/></p:xfrm>
        <a:graphic>
          <a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table">
            <a:tbl><a:tblPr firstRow="1"/><a:tblGrid>{grid_cols}</a:tblGrid>{rows}</a:tbl>
          </a:graphicData>
        </a:graphic>
      </p:graphicFrame>
"#
    )
}

// ---------------------------------------------------------------------------
// Package parts
// ---------------------------------------------------------------------------

fn content_types_xml(slide_count: usize) -> String {
    let overrides: String = (1..=slide_count)
        .map(|i| {
            format!(
                "  <Override PartName=\"/ppt/slides/slide{i}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>\n"
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
  <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
  <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
  <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
{overrides}</Types>"#
    )
}

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
</Relationships>"#;

fn presentation_xml(slide_count: usize) -> String {
    // rId1 is the master, rId2 the theme; slides start at rId3.
    let slide_list: String = (1..=slide_count)
        .map(|i| format!("    <p:sldId id=\"{}\" r:id=\"rId{}\"/>\n", 255 + i, i + 2))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"
  xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"
  xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:sldMasterIdLst>
    <p:sldMasterId id="2147483648" r:id="rId1"/>
  </p:sldMasterIdLst>
  <p:sldIdLst>
{slide_list}  </p:sldIdLst>
  <p:sldSz cx="{SLIDE_WIDTH}" cy="{SLIDE_HEIGHT}"/>
  <p:notesSz cx="{SLIDE_HEIGHT}" cy="{SLIDE_WIDTH}"/>
</p:presentation>"#
    )
}

fn presentation_rels_xml(slide_count: usize) -> String {
    const REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    let mut rels = format!(
        "  <Relationship Id=\"rId1\" Type=\"{REL}/slideMaster\" Target=\"slideMasters/slideMaster1.xml\"/>\n  <Relationship Id=\"rId2\" Type=\"{REL}/theme\" Target=\"theme/theme1.xml\"/>\n"
    );
    for i in 1..=slide_count {
        let _ = writeln!(
            rels,
            "  <Relationship Id=\"rId{}\" Type=\"{REL}/slide\" Target=\"slides/slide{i}.xml\"/>",
            i + 2
        );
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
{rels}</Relationships>"#
    )
}

const SLIDE_MASTER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"
  xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"
  xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:cSld>
    <p:spTree>
      <p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
  </p:cSld>
  <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
  <p:sldLayoutIdLst>
    <p:sldLayoutId id="2147483649" r:id="rId1"/>
  </p:sldLayoutIdLst>
</p:sldMaster>"#;

const SLIDE_MASTER_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/>
</Relationships>"#;

const SLIDE_LAYOUT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"
  xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"
  xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank">
  <p:cSld name="Blank">
    <p:spTree>
      <p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#;

const SLIDE_LAYOUT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#;

const SLIDE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
</Relationships>"#;

fn theme_xml(font: &str) -> String {
    let font = xml_escape(font);
    let fills = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#.repeat(3);
    let lines = r#"<a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#.repeat(3);
    let effects = "<a:effectStyle><a:effectLst/></a:effectStyle>".repeat(3);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Casebook">
  <a:themeElements>
    <a:clrScheme name="Casebook">
      <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
      <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
      <a:dk2><a:srgbClr val="44546A"/></a:dk2>
      <a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
      <a:accent1><a:srgbClr val="4472C4"/></a:accent1>
      <a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
      <a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>
      <a:accent4><a:srgbClr val="FFC000"/></a:accent4>
      <a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>
      <a:accent6><a:srgbClr val="70AD47"/></a:accent6>
      <a:hlink><a:srgbClr val="0563C1"/></a:hlink>
      <a:folHlink><a:srgbClr val="954F72"/></a:folHlink>
    </a:clrScheme>
    <a:fontScheme name="Casebook">
      <a:majorFont><a:latin typeface="{font}"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>
      <a:minorFont><a:latin typeface="{font}"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>
    </a:fontScheme>
    <a:fmtScheme name="Casebook">
      <a:fillStyleLst>{fills}</a:fillStyleLst>
      <a:lnStyleLst>{lines}</a:lnStyleLst>
      <a:effectStyleLst>{effects}</a:effectStyleLst>
      <a:bgFillStyleLst>{fills}</a:bgFillStyleLst>
    </a:fmtScheme>
  </a:themeElements>
</a:theme>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{TableRenderer, TableSpec};
    use std::io::Read;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive.by_name(name).unwrap().read_to_string(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_parse_deck_lines() {
        assert_eq!(DeckLine::parse(""), DeckLine::Blank);
        assert_eq!(
            DeckLine::parse("**Internal**"),
            DeckLine::Heading(Text::bold("Internal"))
        );
        assert_eq!(
            DeckLine::parse("  nested point"),
            DeckLine::SubItem(Text::plain("nested point"))
        );
        assert_eq!(
            DeckLine::parse("Brexit complicates UK trade"),
            DeckLine::Item(Text::plain("Brexit complicates UK trade"))
        );
    }

    #[test]
    fn test_empty_deck_is_valid_zip() {
        let bytes = SlideDeck::default().to_bytes().unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_table_without_slide_fails() {
        let mut deck = SlideDeck::default();
        let spec = TableSpec::new(["A"], [["x"]]);
        let err = TableRenderer::new(StyleProfile::slide_deck())
            .render(&spec, &mut deck)
            .unwrap_err();
        assert!(matches!(err, DocError::NoSlide));
    }

    #[test]
    fn test_tables_attach_to_latest_slide() {
        let mut deck = SlideDeck::default();
        let renderer = TableRenderer::new(StyleProfile::slide_deck());
        deck.add_slide("One");
        renderer
            .render(&TableSpec::new(["A"], [["x"]]), &mut deck)
            .unwrap();
        deck.add_slide("Two").set_subtitle("sub");
        let handle = renderer
            .render(&TableSpec::new(["A", "B"], [["x", "y"], ["1", "2"]]), &mut deck)
            .unwrap();

        assert_eq!(deck.tables_on(0).count(), 1);
        assert_eq!(deck.tables_on(1).count(), 1);
        let table = deck.table(handle).unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert!(table.cell(0, 1).unwrap().style.bold);
        assert!(!table.cell(1, 0).unwrap().style.bold);
    }

    #[test]
    fn test_shape_mismatch_leaves_deck_untouched() {
        let mut deck = SlideDeck::default();
        deck.add_slide("Only");
        let spec = TableSpec::new(["A", "B"], [vec!["x"]]);
        assert!(TableRenderer::new(StyleProfile::slide_deck())
            .render(&spec, &mut deck)
            .is_err());
        assert_eq!(deck.tables_on(0).count(), 0);
    }

    #[test]
    fn test_package_parts_and_slide_content() {
        let mut deck = SlideDeck::default();
        deck.add_slide("Modes of Entry");
        TableRenderer::new(StyleProfile::slide_deck())
            .render(
                &TableSpec::new(["Mode", "Risk"], [["Exporting", "Low"]]),
                &mut deck,
            )
            .unwrap();
        deck.add_slide("Challenges & Recommendations")
            .add_lines(&["**Internal**", "Need to hire", "", "  more detail"]);
        let bytes = deck.to_bytes().unwrap();

        let archive = zip::ZipArchive::new(Cursor::new(&bytes)).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert!(names.contains(&"[Content_Types].xml"));
        assert!(names.contains(&"ppt/presentation.xml"));
        assert!(names.contains(&"ppt/slides/slide2.xml"));
        assert!(names.contains(&"ppt/theme/theme1.xml"));

        let first = read_part(&bytes, "ppt/slides/slide1.xml");
        assert!(first.contains("a:tbl"));
        assert!(first.contains("Exporting"));
        assert!(first.contains(r#"val="D6E4F0""#));
        assert!(first.contains(r#"b="1""#));

        let second = read_part(&bytes, "ppt/slides/slide2.xml");
        assert!(second.contains("Challenges &amp; Recommendations"));
        assert!(second.contains(r#"lvl="1""#));
        assert!(!second.contains("a:tbl"));
    }

    fn numbered_rows(count: usize) -> TableSpec {
        let rows: Vec<Vec<String>> = (0..count)
            .map(|i| vec![format!("row-{i:02}"), format!("score-{i:02}")])
            .collect();
        TableSpec::new(["Country", "Score"], rows)
    }

    #[test]
    fn test_slide_rows_keep_order_and_only_header_is_bold() {
        let mut deck = SlideDeck::default();
        deck.add_slide("Country Rankings");
        TableRenderer::new(StyleProfile::slide_deck())
            .render(&numbered_rows(10), &mut deck)
            .unwrap();
        let xml = read_part(&deck.to_bytes().unwrap(), "ppt/slides/slide1.xml");

        let mut rows: Vec<&str> = xml.split("</a:tr>").collect();
        rows.pop();
        assert_eq!(rows.len(), 11);
        assert!(rows[0].contains("<a:t>Country</a:t>"));
        assert!(rows[0].contains(r#"b="1""#));
        for (i, row) in rows[1..].iter().enumerate() {
            assert!(row.contains(&format!("<a:t>row-{i:02}</a:t>")), "row {i} out of place");
            assert!(!row.contains(r#"b="1""#), "data row {i} is bold");
        }
    }

    #[test]
    fn test_rendering_twice_adds_two_identical_tables() {
        let mut deck = SlideDeck::default();
        let renderer = TableRenderer::new(StyleProfile::slide_deck());
        let spec = numbered_rows(2);
        deck.add_slide("First");
        let first = renderer.render(&spec, &mut deck).unwrap();
        let second = renderer.render(&spec, &mut deck).unwrap();
        deck.add_slide("Second");
        let third = renderer.render(&numbered_rows(1), &mut deck).unwrap();

        assert_eq!(
            (first, second, third),
            (TableHandle(0), TableHandle(1), TableHandle(2))
        );
        assert_eq!(deck.table(first), deck.table(second));
        let on_first: Vec<&GridTable> = deck.tables_on(0).collect();
        assert_eq!(on_first, [deck.table(first).unwrap(), deck.table(second).unwrap()]);
        let on_second: Vec<&GridTable> = deck.tables_on(1).collect();
        assert_eq!(on_second, [deck.table(third).unwrap()]);

        let bytes = deck.to_bytes().unwrap();
        let first_xml = read_part(&bytes, "ppt/slides/slide1.xml");
        assert_eq!(first_xml.matches("<a:tbl>").count(), 2);
        assert_eq!(first_xml.matches("<a:t>row-01</a:t>").count(), 2);
        let second_xml = read_part(&bytes, "ppt/slides/slide2.xml");
        assert_eq!(second_xml.matches("<a:tbl>").count(), 1);
        assert!(!second_xml.contains("row-01"));
    }

    #[test]
    fn test_multiline_cell_splits_paragraphs() {
        let mut deck = SlideDeck::default();
        deck.add_slide("SWOT");
        TableRenderer::new(StyleProfile::slide_deck())
            .render(&TableSpec::new(["Strengths"], [["a\nb"]]), &mut deck)
            .unwrap();
        let xml = deck.slide_xml(0);
        assert!(xml.contains("<a:t>a</a:t>"));
        assert!(xml.contains("<a:t>b</a:t>"));
    }
}
