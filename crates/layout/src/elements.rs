//! The positioned element model the section renderers emit and the
//! encoder backends consume.
//!
//! Coordinates are top-down page points. Text runs are positioned by
//! their baseline; rectangles by their top-left corner; lines run
//! horizontally from `(x, y)` to `(x + width, y)`.

use crate::color::Color;
use crate::geometry::Rect;
use crate::style::TextStyle;

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectElement {
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineElement {
    pub color: Color,
    /// Stroke width in points.
    pub thickness: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rect(RectElement),
    Line(LineElement),
}

/// An element placed on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

/// One finished page of positioned elements, ready for an encoder.
///
/// The page doubles as the drawing surface handed to the section
/// renderers: place a text run, fill a rectangle, stroke a line.
#[derive(Debug, Clone)]
pub struct Page {
    pub width: f32,
    pub height: f32,
    pub elements: Vec<PositionedElement>,
}

impl Page {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Place a text run with its baseline at `y`.
    pub fn text(&mut self, x: f32, y: f32, content: impl Into<String>, style: TextStyle) {
        self.elements.push(PositionedElement {
            x,
            y,
            width: 0.0,
            height: style.size,
            element: LayoutElement::Text(TextElement {
                content: content.into(),
                style,
            }),
        });
    }

    /// Fill a rectangle whose top edge is at `rect.y`.
    pub fn fill_rect(&mut self, rect: Rect, fill: Color) {
        self.elements.push(PositionedElement {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            element: LayoutElement::Rect(RectElement { fill }),
        });
    }

    /// Stroke a horizontal line at `y` from `x` to `x + width`.
    pub fn stroke_line(&mut self, x: f32, y: f32, width: f32, thickness: f32, color: Color) {
        self.elements.push(PositionedElement {
            x,
            y,
            width,
            height: 0.0,
            element: LayoutElement::Line(LineElement { color, thickness }),
        });
    }

    /// Iterate over the text runs on the page, with their positions.
    pub fn text_runs(&self) -> impl Iterator<Item = (&PositionedElement, &TextElement)> {
        self.elements.iter().filter_map(|el| match &el.element {
            LayoutElement::Text(text) => Some((el, text)),
            _ => None,
        })
    }
}
