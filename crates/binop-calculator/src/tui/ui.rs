//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use crate::core::Operation;
use crate::surface::OperandField;

use super::app::TuiApp;

/// Renders the calculator UI to the frame
pub fn render(app: &TuiApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a TuiApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub const fn new(app: &'a TuiApp) -> Self {
        Self { app }
    }

    /// Main area and help sidebar
    fn create_horizontal_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Min(30), Constraint::Length(24)])
            .split(area)
            .to_vec()
    }

    /// Operand inputs, result and buttons stacked vertically
    fn create_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // First operand
                Constraint::Length(3), // Second operand
                Constraint::Length(3), // Result
                Constraint::Length(3), // Buttons
                Constraint::Min(0),
            ])
            .split(area)
            .to_vec()
    }

    fn render_operand(&self, field: OperandField, area: Rect, buf: &mut Buffer) {
        let focused = self.app.focus() == field;
        let text = self.app.operand(field);

        let mut spans = vec![Span::raw(text)];
        if focused {
            spans.push(Span::styled(
                " ",
                Style::default().bg(Color::White).fg(Color::Black),
            ));
        }

        let border = if focused { Color::Cyan } else { Color::DarkGray };
        let title = match field {
            OperandField::First => " Number 1 ",
            OperandField::Second => " Number 2 ",
        };

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .render(area, buf);
    }

    fn render_result(&self, area: Rect, buf: &mut Buffer) {
        let display = self.app.display();

        let mut style = if display.error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        if display.animate {
            style = style.add_modifier(Modifier::BOLD);
        }

        Paragraph::new(Span::styled(display.text.as_str(), style))
            .block(
                Block::default()
                    .title(" Result ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_buttons(&self, area: Rect, buf: &mut Buffer) {
        let display = self.app.display();
        let mut spans = Vec::with_capacity(Operation::ALL.len() * 2);

        for op in Operation::ALL {
            let mut style = Style::default().fg(Color::Cyan);
            if display.is_active(op) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!("[ {} ]", op.symbol()), style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .title(" Operations ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let h_chunks = Self::create_horizontal_layout(area);
        if h_chunks.len() < 2 {
            return;
        }

        let chunks = Self::create_layout(h_chunks[0]);
        if chunks.len() >= 4 {
            self.render_operand(OperandField::First, chunks[0], buf);
            self.render_operand(OperandField::Second, chunks[1], buf);
            self.render_result(chunks[2], buf);
            self.render_buttons(chunks[3], buf);
        }

        Self::render_help(h_chunks[1], buf);
    }
}

/// Title of the outer frame
pub const TITLE: &str = " binop calculator ";

/// Key bindings shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 . e", "Edit number"),
    ("+ - * /", "Calculate"),
    ("Enter", "Repeat last"),
    ("Tab", "Switch field"),
    ("Bksp", "Delete"),
    ("Esc", "Clear field"),
    ("Ctrl+C", "Quit"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).unwrap()
    }

    fn draw(app: &TuiApp) -> String {
        let mut terminal = create_test_terminal();
        terminal
            .draw(|frame| {
                render(app, frame);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    /// Cell at a position inside the 80x24 test terminal
    fn cell_at(terminal: &Terminal<TestBackend>, x: u16, y: u16) -> ratatui::buffer::Cell {
        terminal.backend().buffer()[(x, y)].clone()
    }

    #[test]
    fn test_render_initial() {
        let app = TuiApp::default();
        let content = draw(&app);
        assert!(content.contains("Number 1"));
        assert!(content.contains("Number 2"));
        assert!(content.contains("Result"));
        assert!(content.contains('0'));
    }

    #[test]
    fn test_render_operands() {
        let mut app = TuiApp::default();
        app.set_operand(OperandField::First, "12.5");
        app.set_operand(OperandField::Second, "-7");
        let content = draw(&app);
        assert!(content.contains("12.5"));
        assert!(content.contains("-7"));
    }

    #[test]
    fn test_render_result() {
        let mut app = TuiApp::default();
        app.set_operand(OperandField::First, "6");
        app.set_operand(OperandField::Second, "7");
        app.press(Operation::Multiply).unwrap();
        assert!(draw(&app).contains("42"));
    }

    #[test]
    fn test_render_error() {
        let mut app = TuiApp::default();
        app.replay().unwrap_err();
        assert!(draw(&app).contains("Error: No previous operation"));
    }

    #[test]
    fn test_render_error_is_red() {
        let mut app = TuiApp::default();
        app.set_operand(OperandField::First, "1");
        app.set_operand(OperandField::Second, "0");
        app.press(Operation::Divide).unwrap_err();

        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();
        // First character of the result line
        let cell = cell_at(&terminal, 2, 8);
        assert_eq!(cell.symbol(), "E");
        assert_eq!(cell.fg, Color::Red);
    }

    #[test]
    fn test_render_highlighted_button() {
        let mut app = TuiApp::default();
        app.set_operand(OperandField::First, "1");
        app.set_operand(OperandField::Second, "1");
        app.press(Operation::Divide).unwrap();

        let mut terminal = create_test_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();
        // "[ / ]" is the fourth button on the button line
        let cell = cell_at(&terminal, 22, 11);
        assert_eq!(cell.symbol(), "/");
        assert!(cell.modifier.contains(Modifier::REVERSED));

        app.settle();
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let cell = cell_at(&terminal, 22, 11);
        assert!(!cell.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_render_help() {
        let content = draw(&TuiApp::default());
        assert!(content.contains("Help"));
        assert!(content.contains("Repeat last"));
        assert!(content.contains("binop calculator"));
    }

    #[test]
    fn test_render_small_terminal() {
        let app = TuiApp::default();
        let backend = TestBackend::new(20, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    #[test]
    fn test_layouts() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(CalculatorUI::create_horizontal_layout(area).len(), 2);
        assert_eq!(CalculatorUI::create_layout(area).len(), 5);
    }
}
