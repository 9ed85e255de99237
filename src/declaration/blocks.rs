use super::catalog::SelectableOption;
use crate::layout::{draw_checkbox, draw_field, Cursor, FieldValue};
use crate::surface::{DrawingSurface, TextAlign};
use crate::units::Mm;
use std::collections::BTreeSet;

/// Where option labels start, right of their checkboxes
pub const OPTION_TEXT_X: Mm = Mm(27.0);

/// Draw one checklist row per option, ticking those in `selection`.
///
/// With `show_code` each row reads `code - label`, otherwise just the label.
pub fn draw_checklist<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    cursor: &mut Cursor,
    options: &[SelectableOption],
    selection: &BTreeSet<String>,
    show_code: bool,
) {
    let x = cursor.margins().left;
    for option in options {
        draw_checkbox(surface, x, cursor.y(), option.is_selected(selection));
        let text = if show_code {
            format!("{} - {}", option.code, option.label)
        } else {
            option.label.to_string()
        };
        surface.draw_text(&text, OPTION_TEXT_X, cursor.y(), TextAlign::Left);
        cursor.next_line();
    }
}

/// Draw `label` at `x` with `field` straight after it, returning where the field ends
pub fn draw_labelled<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    label: &str,
    field: &FieldValue,
    x: Mm,
    y: Mm,
) -> Mm {
    surface.draw_text(label, x, y, TextAlign::Left);
    let start = x + surface.measure_width(label);
    start + draw_field(surface, field, start, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::catalog::PURPOSES;
    use crate::layout::Margins;
    use crate::surface::{DrawOp, RecordingSurface};
    use pretty_assertions::assert_eq;

    #[test]
    fn checklist_rows_are_a_line_apart() {
        let mut surface = RecordingSurface::new();
        let mut cursor = Cursor::new(Margins::declaration());
        draw_checklist(&mut surface, &mut cursor, &PURPOSES[..2], &BTreeSet::new(), true);

        assert_eq!(cursor.y(), Mm(34.0));
        assert_eq!(
            surface.texts_on(0),
            vec![
                "P0001 - Repatriation of Indian Portfolio investment abroad in equity capital (shares)",
                "P0002 - Repatriation of Indian Portfolio investment abroad in debt instruments",
            ]
        );
        let boxes: Vec<(Mm, Mm)> = surface
            .ops()
            .filter_map(|op| match op {
                DrawOp::Rect { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect();
        assert_eq!(boxes, vec![(Mm(20.0), Mm(17.5)), (Mm(20.0), Mm(24.5))]);
    }

    #[test]
    fn labelled_fields_follow_their_label() {
        let mut surface = RecordingSurface::monospace(Mm(1.0));
        let field = FieldValue::new(Some("EUR"));
        let end = draw_labelled(&mut surface, "Currency: ", &field, Mm(20.0), Mm(50.0));

        // 10 for the label, 7 for the padded answer
        assert_eq!(end, Mm(37.0));
        let placed: Vec<(String, Mm)> = surface
            .ops()
            .filter_map(|op| match op {
                DrawOp::Text { text, x, .. } => Some((text.clone(), *x)),
                _ => None,
            })
            .collect();
        assert_eq!(
            placed,
            vec![
                ("Currency: ".to_string(), Mm(20.0)),
                ("  EUR  ".to_string(), Mm(30.0)),
            ]
        );
    }
}
