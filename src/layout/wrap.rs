use crate::surface::DrawingSurface;
use crate::units::Mm;

/// Greedily split `text` into lines whose measured width, words joined by single
/// spaces, does not exceed `max_width`.
///
/// A word that is wider than the column on its own is broken at the last character
/// that still fits, so no line ever overflows unless a single character does.
pub fn wrap_to_width<S: DrawingSurface + ?Sized>(
    surface: &S,
    text: &str,
    max_width: Mm,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if surface.measure_width(&candidate) <= max_width {
            line = candidate;
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }

        if surface.measure_width(word) <= max_width {
            line = word.to_string();
            continue;
        }

        // no break point in sight, fall back to breaking between characters
        for ch in word.chars() {
            line.push(ch);
            if line.chars().count() > 1 && surface.measure_width(&line) > max_width {
                line.pop();
                lines.push(std::mem::take(&mut line));
                line.push(ch);
            }
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use pretty_assertions::assert_eq;

    #[test]
    fn breaks_between_words() {
        let surface = RecordingSurface::monospace(Mm(1.0));
        let lines = surface.wrap_text("the quick brown fox jumps", Mm(10.0));
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn a_line_may_fill_the_column_exactly() {
        let surface = RecordingSurface::monospace(Mm(1.0));
        let lines = surface.wrap_text("abcd efghi jk", Mm(10.0));
        assert_eq!(lines, vec!["abcd efghi", "jk"]);
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        let surface = RecordingSurface::monospace(Mm(1.0));
        let lines = surface.wrap_text("  one   two\tthree ", Mm(100.0));
        assert_eq!(lines, vec!["one two three"]);
    }

    #[test]
    fn overlong_words_are_broken_by_character() {
        let surface = RecordingSurface::monospace(Mm(1.0));
        let lines = surface.wrap_text("ab abcdefghijkl c", Mm(5.0));
        assert_eq!(lines, vec!["ab", "abcde", "fghij", "kl c"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        let surface = RecordingSurface::monospace(Mm(1.0));
        assert!(surface.wrap_text("   ", Mm(5.0)).is_empty());
    }

    #[test]
    fn every_line_fits_in_helvetica() {
        let surface = RecordingSurface::new();
        let text = lipsum::lipsum(120);
        let lines = surface.wrap_text(&text, Mm(170.0));
        assert!(lines.len() > 1);
        for line in lines.iter() {
            assert!(surface.measure_width(line) <= Mm(170.0), "{line:?} overflows");
        }
        assert_eq!(
            lines.join(" "),
            text.split_whitespace().collect::<Vec<_>>().join(" ")
        );
    }
}
