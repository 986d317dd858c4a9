/// Vertical write position shared by the section renderers.
///
/// The cursor only ever moves down. Each section draws relative to the
/// current position and advances past what it drew; it never inspects
/// or compensates for earlier sections.
#[derive(Debug, Clone, Copy)]
pub struct LayoutCursor {
    y: f32,
}

impl LayoutCursor {
    pub fn new(top: f32) -> Self {
        Self { y: top }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn advance(&mut self, amount: f32) {
        self.y += amount;
    }
}
