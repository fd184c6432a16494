use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui_checkboxes_core::keymap::Binding;

/// One-line key help: `key desc • key desc`, keys in the theme's accent style.
#[derive(Clone, Debug, Default)]
pub struct HelpBar {
    bindings: Vec<Binding>,
    separator: String,
}

impl HelpBar {
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self {
            bindings,
            separator: " • ".to_string(),
        }
    }

    pub fn set_bindings(&mut self, bindings: Vec<Binding>) {
        self.bindings = bindings;
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, theme.text_muted);
        let spans = self.to_spans(theme);
        render::render_spans_clipped(area.x, area.y, area.width, buf, &spans, theme.text_muted);
    }

    fn to_spans(&self, theme: &Theme) -> Vec<Span<'_>> {
        let mut spans = Vec::new();
        for (i, b) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(self.separator.as_str(), theme.text_muted));
            }
            spans.push(Span::styled(b.help_key.as_str(), theme.accent));
            spans.push(Span::styled(" ", theme.text_muted));
            spans.push(Span::styled(b.help_desc.as_str(), theme.text_muted));
        }
        spans
    }
}
