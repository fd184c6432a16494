use ratatui::buffer::Buffer;
use ratatui::style::Style;
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;

/// Writes `spans` at `(x, y)`, stopping before `max_cols` display columns are exceeded.
///
/// Wide characters that do not fit are dropped whole. Spans with a default style inherit
/// `fallback_style`. Returns the number of columns written.
pub fn render_spans_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    spans: &[Span<'_>],
    fallback_style: Style,
) -> u16 {
    let mut dx = 0u16;
    for span in spans {
        let style = if span.style == Style::default() {
            fallback_style
        } else {
            fallback_style.patch(span.style)
        };
        for ch in span.content.chars() {
            let ch = if ch == '\t' { ' ' } else { ch };
            let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if dx + w > max_cols {
                return dx;
            }

            if let Some(cell) = buf.cell_mut((x + dx, y)) {
                cell.set_style(style);
                cell.set_symbol(&ch.to_string());
            }
            if w == 2 {
                if let Some(cell) = buf.cell_mut((x + dx + 1, y)) {
                    cell.set_style(style);
                    cell.set_symbol("");
                }
            }
            dx += w;
        }
    }
    dx
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn row(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn clips_at_width() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 1));
        let spans = [Span::raw("[x] "), Span::raw("alpha")];
        let written = render_spans_clipped(0, 0, 5, &mut buf, &spans, Style::default());
        assert_eq!(written, 5);
        assert_eq!(row(&buf, 5), "[x] a");
    }

    #[test]
    fn wide_char_that_does_not_fit_is_dropped() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        let spans = [Span::raw("ab界")];
        let written = render_spans_clipped(0, 0, 3, &mut buf, &spans, Style::default());
        assert_eq!(written, 2);
        assert_eq!(row(&buf, 3), "ab ");
    }
}
