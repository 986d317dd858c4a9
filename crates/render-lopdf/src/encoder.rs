//! Single-page PDF encoding of a laid-out page.

use angebot_layout::{Color, FontSlant, FontWeight, LayoutElement, Page, PositionedElement, TextStyle};
use angebot_render_core::{PageEncoder, RenderError};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";
const FONT_ITALIC: &str = "F3";

/// Encodes pages as PDF 1.5 documents using the base-14 Helvetica
/// family with WinAnsi encoding. Output is deterministic for a given
/// page.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfEncoder;

impl LopdfEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl PageEncoder for LopdfEncoder {
    fn encode(&self, page: &Page) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut font_dict = lopdf::Dictionary::new();
        for (internal_name, base_font) in [
            (FONT_REGULAR, "Helvetica"),
            (FONT_BOLD, "Helvetica-Bold"),
            (FONT_ITALIC, "Helvetica-Oblique"),
        ] {
            let single_font_dict = dictionary! {
                "Type" => "Font", "Subtype" => "Type1", "BaseFont" => base_font, "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(internal_name.as_bytes(), Object::Dictionary(single_font_dict));
        }
        let resources_id = doc.add_object(dictionary! { "Font" => font_dict });

        let mut ctx = PageContext::new(page.height);
        for el in &page.elements {
            ctx.draw_element(el);
        }
        let content = ctx.finish();
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), page.width.into(), page.height.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        log::debug!(
            "encoded page with {} elements into {} bytes",
            page.elements.len(),
            buffer.len()
        );
        Ok(buffer)
    }
}

/// Builds the content stream for one page, converting top-down layout
/// coordinates into the PDF's bottom-up space and deduplicating font
/// and fill-color state between runs.
struct PageContext {
    page_height: f32,
    content: Content,
    state: GraphicsState,
}

#[derive(Default, Clone, PartialEq)]
struct GraphicsState {
    font: &'static str,
    font_size: f32,
    fill: Option<Color>,
}

impl PageContext {
    fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: GraphicsState::default(),
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(el, &text.content, text.style),
            LayoutElement::Rect(rect) => self.draw_rect(el, rect.fill),
            LayoutElement::Line(line) => self.draw_line(el, line.color, line.thickness),
        }
    }

    fn draw_rect(&mut self, el: &PositionedElement, fill: Color) {
        self.set_fill_color(fill);
        let y = self.page_height - (el.y + el.height);
        self.push("re", vec![el.x.into(), y.into(), el.width.into(), el.height.into()]);
        self.push("f", vec![]);
    }

    fn draw_line(&mut self, el: &PositionedElement, color: Color, thickness: f32) {
        let y = self.page_height - el.y;
        self.push("RG", color_operands(color));
        self.push("w", vec![thickness.into()]);
        self.push("m", vec![el.x.into(), y.into()]);
        self.push("l", vec![(el.x + el.width).into(), y.into()]);
        self.push("S", vec![]);
    }

    fn draw_text(&mut self, el: &PositionedElement, content: &str, style: TextStyle) {
        if content.trim().is_empty() {
            return;
        }
        self.push("BT", vec![]);
        self.set_font(style);
        self.set_fill_color(style.color);
        // Layout y is already the baseline.
        let pdf_y = self.page_height - el.y;
        self.push("Td", vec![el.x.into(), pdf_y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(content), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    fn set_font(&mut self, style: TextStyle) {
        let font = match (style.weight, style.slant) {
            (FontWeight::Bold, _) => FONT_BOLD,
            (FontWeight::Regular, FontSlant::Italic) => FONT_ITALIC,
            (FontWeight::Regular, FontSlant::Upright) => FONT_REGULAR,
        };
        if self.state.font != font || self.state.font_size != style.size {
            self.push(
                "Tf",
                vec![Object::Name(font.as_bytes().to_vec()), style.size.into()],
            );
            self.state.font = font;
            self.state.font_size = style.size;
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill != Some(color) {
            self.push("rg", color_operands(color));
            self.state.fill = Some(color);
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }
}

fn color_operands(color: Color) -> Vec<Object> {
    vec![
        (color.r as f32 / 255.0).into(),
        (color.g as f32 / 255.0).into(),
        (color.b as f32 / 255.0).into(),
    ]
}

/// WinAnsi (CP1252) byte encoding. Latin-1 passes through; the euro
/// sign and bullet live in the 0x80..0x9F window; everything else
/// becomes `?`.
fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '€' => 0x80,
            '•' => 0x95,
            c if (c as u32) <= 255 => c as u8,
            _ => b'?',
        })
        .collect()
}
