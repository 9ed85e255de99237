use crate::surface::DrawingSurface;
use crate::units::Mm;

/// Side length of a checkbox
pub const CHECKBOX_SIZE: Mm = Mm(3.0);

/// How far the box's bottom edge hangs below the baseline
const BASELINE_DROP: Mm = Mm(0.5);

/// Keeps the check mark clear of the box outline
const MARK_INSET: Mm = Mm(0.3);

/// Draw a checkbox sitting on the baseline at `(x, y)`, crossed when `is_checked`
pub fn draw_checkbox<S: DrawingSurface + ?Sized>(surface: &mut S, x: Mm, y: Mm, is_checked: bool) {
    let top = y - CHECKBOX_SIZE + BASELINE_DROP;
    surface.draw_rect(x, top, CHECKBOX_SIZE, CHECKBOX_SIZE);

    if is_checked {
        let left = x + MARK_INSET;
        let right = x + CHECKBOX_SIZE - MARK_INSET;
        let upper = top + MARK_INSET;
        let lower = y - Mm(0.2);
        surface.draw_line((left, upper), (right, lower));
        surface.draw_line((right, upper), (left, lower));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};

    fn strictly_inside(point: (Mm, Mm), x: Mm, top: Mm, size: Mm) -> bool {
        point.0 > x && point.0 < x + size && point.1 > top && point.1 < top + size
    }

    #[test]
    fn unchecked_is_just_a_box() {
        let mut surface = RecordingSurface::new();
        draw_checkbox(&mut surface, Mm(20.0), Mm(100.0), false);

        let ops: Vec<&DrawOp> = surface.ops().collect();
        assert_eq!(ops.len(), 1);
        let DrawOp::Rect { x, y, width, height } = ops[0] else {
            panic!("expected a rectangle, got {:?}", ops[0]);
        };
        assert_eq!(*x, Mm(20.0));
        assert!((y.0 - 97.5).abs() < 1e-9);
        assert_eq!((*width, *height), (CHECKBOX_SIZE, CHECKBOX_SIZE));
    }

    #[test]
    fn checked_adds_a_cross_inside_the_box() {
        let mut surface = RecordingSurface::new();
        draw_checkbox(&mut surface, Mm(20.0), Mm(100.0), true);

        let ops: Vec<&DrawOp> = surface.ops().collect();
        assert_eq!(ops.len(), 3);
        let DrawOp::Rect { x, y, width, .. } = ops[0] else {
            panic!("expected a rectangle first");
        };

        let diagonals: Vec<((Mm, Mm), (Mm, Mm))> = ops[1..]
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(diagonals.len(), 2);
        for (from, to) in diagonals {
            assert!(strictly_inside(from, *x, *y, *width), "{from:?} touches the box");
            assert!(strictly_inside(to, *x, *y, *width), "{to:?} touches the box");
            // one diagonal each way
            assert!(from.0 != to.0 && from.1 != to.1);
        }
    }
}
