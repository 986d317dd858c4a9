use crate::color::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontSlant {
    #[default]
    Upright,
    Italic,
}

/// Style of a single text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub color: Color,
}

impl TextStyle {
    pub fn regular(size: f32, color: Color) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            slant: FontSlant::Upright,
            color,
        }
    }

    pub fn bold(size: f32, color: Color) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..Self::regular(size, color)
        }
    }

    pub fn italic(size: f32, color: Color) -> Self {
        Self {
            slant: FontSlant::Italic,
            ..Self::regular(size, color)
        }
    }
}
