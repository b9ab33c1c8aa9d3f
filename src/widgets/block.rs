use crate::layout::{Constraints, Size};
use crate::renderer::PaintContext;
use crate::widgets::{Color, Rect, Widget};

/// A solid, optionally rounded box of fixed height.
///
/// Without an explicit width it takes all the width it is offered.
pub struct Block {
    width: Option<f32>,
    height: f32,
    color: Color,
    radius: f32,
    size: Size,
}

pub fn block(height: f32) -> Block {
    Block {
        width: None,
        height,
        color: Color::from_hex(0xDDDDDD),
        radius: 0.0,
        size: Size::zero(),
    }
}

impl Block {
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

impl Widget for Block {
    fn layout(&mut self, constraints: Constraints) -> Size {
        let width = self.width.unwrap_or(constraints.max_width);
        self.size = constraints.constrain(Size::new(width, self.height));
        self.size
    }

    fn paint(&self, ctx: &mut PaintContext) {
        ctx.draw_rounded_rect(Rect::from_size(self.size), self.color, self.radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_offered_width() {
        let mut block = block(40.0);
        let size = block.layout(Constraints::loose(Size::new(390.0, 800.0)));
        assert_eq!(size, Size::new(390.0, 40.0));
    }

    #[test]
    fn test_respects_constraints() {
        let mut block = block(900.0).width(500.0);
        let size = block.layout(Constraints::loose(Size::new(390.0, 800.0)));
        assert_eq!(size, Size::new(390.0, 800.0));
    }

    #[test]
    fn test_paints_at_local_origin() {
        let mut block = block(10.0).width(20.0).radius(3.0).color(Color::BLACK);
        block.layout(Constraints::loose(Size::new(100.0, 100.0)));

        let mut ctx = PaintContext::new();
        ctx.push_translation(5.0, 6.0);
        block.paint(&mut ctx);

        let command = ctx.commands()[0];
        assert_eq!(command.rect(), Rect::new(5.0, 6.0, 20.0, 10.0));
        assert_eq!(command.radius(), 3.0);
        assert_eq!(command.color(), Color::BLACK);
    }
}
