use crate::surface::{DrawingSurface, TextAlign};
use crate::units::Mm;

/// Draw a single line of text so that it spans exactly `target_width`, starting at `x`.
///
/// The line is split on spaces and the space left over after the words' own widths is
/// shared evenly between the gaps. A line made of a single word has no gaps and is
/// simply drawn at `x`. Text wider than the target gets negative gaps and is squeezed
/// rather than refused.
///
/// Callers must not pass text without any words in it.
pub fn justify_line<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    text: &str,
    x: Mm,
    y: Mm,
    target_width: Mm,
) {
    let words: Vec<&str> = text.split(' ').filter(|word| !word.is_empty()).collect();
    debug_assert!(!words.is_empty(), "cannot justify a line without words");

    match words.as_slice() {
        [] => {}
        [word] => surface.draw_text(word, x, y, TextAlign::Left),
        _ => {
            let widths: Vec<Mm> = words.iter().map(|word| surface.measure_width(word)).collect();
            let words_width: Mm = widths.iter().copied().sum();
            let gap = (target_width - words_width) / (words.len() - 1) as f64;

            let mut cursor = x;
            for (word, width) in words.iter().zip(widths) {
                surface.draw_text(word, cursor, y, TextAlign::Left);
                cursor += width + gap;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};
    use pretty_assertions::assert_eq;

    fn placed_words(surface: &RecordingSurface) -> Vec<(String, Mm)> {
        surface
            .ops()
            .filter_map(|op| match op {
                DrawOp::Text { text, x, .. } => Some((text.clone(), *x)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn spreads_words_across_the_column() {
        let mut surface = RecordingSurface::monospace(Mm(2.0));
        justify_line(&mut surface, "ab cd ef", Mm(20.0), Mm(50.0), Mm(30.0));

        // 12mm of words, 18mm of space shared by two gaps
        assert_eq!(
            placed_words(&surface),
            vec![
                ("ab".to_string(), Mm(20.0)),
                ("cd".to_string(), Mm(33.0)),
                ("ef".to_string(), Mm(46.0)),
            ]
        );
    }

    #[test]
    fn last_word_ends_on_the_column_edge() {
        let mut surface = RecordingSurface::new();
        let text = "aforementioned account and the purpose of the remittance would be:";
        justify_line(&mut surface, text, Mm(20.0), Mm(100.0), Mm(170.0));

        let words = placed_words(&surface);
        let (last, start) = words.last().expect("words were drawn");
        let end = *start + surface.measure_width(last);
        assert!((end.0 - 190.0).abs() < 1e-6, "line ends at {end:?}");
        assert_eq!(words.len(), text.split(' ').count());
    }

    #[test]
    fn a_single_word_stays_put() {
        let mut surface = RecordingSurface::monospace(Mm(2.0));
        justify_line(&mut surface, "only", Mm(20.0), Mm(50.0), Mm(170.0));
        assert_eq!(placed_words(&surface), vec![("only".to_string(), Mm(20.0))]);
    }

    #[test]
    fn overfull_lines_are_compressed() {
        let mut surface = RecordingSurface::monospace(Mm(2.0));
        justify_line(&mut surface, "abcd efgh", Mm(0.0), Mm(10.0), Mm(12.0));

        // 16mm of words in 12mm: the second word backs up into the first
        assert_eq!(
            placed_words(&surface),
            vec![("abcd".to_string(), Mm(0.0)), ("efgh".to_string(), Mm(4.0))]
        );
    }

    #[test]
    fn repeated_spaces_do_not_make_extra_gaps() {
        let mut surface = RecordingSurface::monospace(Mm(1.0));
        justify_line(&mut surface, "a  b", Mm(0.0), Mm(10.0), Mm(10.0));
        assert_eq!(
            placed_words(&surface),
            vec![("a".to_string(), Mm(0.0)), ("b".to_string(), Mm(9.0))]
        );
    }
}
