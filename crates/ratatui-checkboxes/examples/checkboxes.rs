use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui_checkboxes::checkbox_list::CheckboxListView;
use ratatui_checkboxes::core::keymap;
use ratatui_checkboxes::core::keymap::Binding;
use ratatui_checkboxes::core::checkboxes::Checkboxes;
use ratatui_checkboxes::core::crossterm_input;
use ratatui_checkboxes::help::HelpBar;
use ratatui_checkboxes::theme::Theme;
use std::io;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: usize,
    name: String,
}

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::default();
    let rows: Vec<Row> = (0..40)
        .map(|id| Row {
            id,
            name: format!("file-{id:02}.txt"),
        })
        .collect();
    let disabled: Vec<Row> = rows.iter().filter(|r| r.id % 5 == 2).cloned().collect();
    let mut boxes = Checkboxes::builder_by_key(rows.clone(), |r: &Row| r.id)
        .default_checked(rows.iter().take(2).cloned())
        .default_disabled(disabled)
        .build();
    let mut list = CheckboxListView::new();
    list.set_cursor(Some(0), rows.len());

    let res = run(&mut terminal, &theme, &mut boxes, &mut list);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    theme: &Theme,
    boxes: &mut Checkboxes<Row>,
    list: &mut CheckboxListView,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            let [main, status, help] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .areas(area);

            let block = Block::default()
                .title("Checkboxes (click, shift+click for ranges)")
                .borders(Borders::ALL);
            let inner = block.inner(main);
            f.render_widget(block, main);

            let buf = f.buffer_mut();
            list.render(inner, buf, theme, boxes, |r| r.name.clone());

            let checked = boxes.checked_items().len();
            let disabled = boxes.disabled_items().len();
            let anchor = boxes
                .anchor()
                .map(|r| r.name.as_str())
                .unwrap_or("-");
            let status_line = format!("checked={checked}  disabled={disabled}  anchor={anchor}");
            let status_span = Span::styled(status_line, theme.text_primary);
            buf.set_span(status.x, status.y, &status_span, status.width);

            let mut bindings = list.help(boxes);
            bindings.extend(demo_bindings());
            HelpBar::new(bindings).render(help, buf, theme);
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        match crossterm::event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('a') => boxes.check_all(),
                KeyCode::Char('r') => boxes.reset(),
                KeyCode::Char('d') => toggle_disabled(boxes, list.cursor()),
                _ => {
                    if let Some(ev) = crossterm_input::input_event_from_crossterm(Event::Key(key)) {
                        list.handle_event(&ev, boxes);
                    }
                }
            },
            Event::Mouse(m) => {
                if let Some(ev) = crossterm_input::mouse_event_from_crossterm(m) {
                    list.handle_mouse(&ev, boxes);
                }
            }
            _ => {}
        }
    }
}

fn demo_bindings() -> Vec<Binding> {
    vec![
        Binding::new("d", "disable", vec![keymap::key_char('d')]),
        Binding::new("a", "all", vec![keymap::key_char('a')]),
        Binding::new("r", "reset", vec![keymap::key_char('r')]),
        Binding::new("q", "quit", vec![keymap::key_char('q')]),
    ]
}

fn toggle_disabled(boxes: &mut Checkboxes<Row>, cursor: Option<usize>) {
    let Some(row) = cursor.and_then(|c| boxes.items().get(c)).cloned() else {
        return;
    };
    let mut disabled = boxes.disabled_items().to_vec();
    if boxes.is_disabled(&row) {
        disabled.retain(|r| r.id != row.id);
    } else {
        disabled.push(row);
    }
    boxes.set_disabled_items(disabled);
}
