//! Screen drawing and key handling, independent of the terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use quiz::{Mode, QuizError, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    Palette, RatatuiBackend, RatatuiError,
    form::{self, Focus, FormState},
    radar::RadarChart,
};

/// What the event loop does after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Control {
    Continue,
    Quit,
}

pub(crate) struct App<'a, 'c> {
    session: &'a mut Session<'c>,
    config: &'a RatatuiBackend,
    form: FormState,
}

impl<'a, 'c> App<'a, 'c> {
    pub fn new(session: &'a mut Session<'c>, config: &'a RatatuiBackend) -> Self {
        let form = FormState::new(session);
        Self {
            session,
            config,
            form,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Control, RatatuiError> {
        if key.kind != KeyEventKind::Press {
            return Ok(Control::Continue);
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            tracing::info!("quiz cancelled");
            return Err(QuizError::Cancelled.into());
        }
        tracing::trace!(code = ?key.code, mode = ?self.session.mode(), "key pressed");

        match self.session.mode() {
            Mode::Collecting => self.handle_collecting_key(key),
            Mode::Reviewing => Ok(self.handle_reviewing_key(key)),
        }
    }

    fn handle_collecting_key(&mut self, key: KeyEvent) -> Result<Control, RatatuiError> {
        let catalog = self.session.catalog();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Ok(Control::Quit),
            KeyCode::F(10) => self.show_results(),
            // Enter: show results on the button, otherwise select and move on
            KeyCode::Enter => match self.form.focus() {
                Focus::ResultsButton => self.show_results(),
                Focus::Question(_) => {
                    self.select_highlighted()?;
                    self.form.next_question(self.session);
                }
            },
            KeyCode::Char(' ') => self.select_highlighted()?,
            KeyCode::Delete | KeyCode::Backspace => self.clear_focused(),
            KeyCode::BackTab => self.form.prev_question(self.session),
            // Some terminals report Shift+Tab as Tab with a modifier
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.form.prev_question(self.session);
            }
            KeyCode::Tab | KeyCode::Right => self.form.next_question(self.session),
            KeyCode::Left => self.form.prev_question(self.session),
            KeyCode::Up => match self.form.focus() {
                Focus::Question(_) => self.form.highlight_up(catalog),
                Focus::ResultsButton => self.form.prev_question(self.session),
            },
            KeyCode::Down => self.form.highlight_down(catalog),
            // Number keys: quick select (1-9)
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(choice) = c.to_digit(10).and_then(|d| d.checked_sub(1))
                    && self.form.set_highlight(catalog, choice as usize)
                {
                    self.select_highlighted()?;
                }
            }
            KeyCode::Home => self.form.reset(self.session),
            KeyCode::End => self.form.focus_button(),
            KeyCode::PageDown => {
                // Jump multiple questions down
                for _ in 0..5 {
                    self.form.next_question(self.session);
                }
            }
            KeyCode::PageUp => {
                // Jump multiple questions up
                for _ in 0..5 {
                    self.form.prev_question(self.session);
                }
            }
            _ => {}
        }
        Ok(Control::Continue)
    }

    fn handle_reviewing_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Control::Quit,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => {
                self.session.redo();
                self.form.reset(self.session);
            }
            _ => {}
        }
        Control::Continue
    }

    fn select_highlighted(&mut self) -> Result<(), RatatuiError> {
        if let Some(slot) = self.form.focused_slot() {
            let theme = &self.session.catalog().themes()[slot.theme];
            self.session
                .select(theme.id(), slot.question, self.form.highlight())?;
        }
        Ok(())
    }

    fn clear_focused(&mut self) {
        if let Some(slot) = self.form.focused_slot() {
            let theme = &self.session.catalog().themes()[slot.theme];
            self.session.clear_answer(theme.id(), slot.question);
        }
    }

    fn show_results(&mut self) {
        self.session.show_results();
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Form or chart
                Constraint::Length(3), // Button
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        draw_title(frame, self.session, self.config, chunks[0]);

        let palette = self.config.palette();
        let labels = self.config.labels();
        match self.session.mode() {
            Mode::Collecting => {
                form::draw_cards(frame, self.session, &mut self.form, chunks[1], palette);
                let focused = self.form.focus() == Focus::ResultsButton;
                draw_button(frame, &labels.show_results, focused, palette, chunks[2]);
                draw_help(
                    frame,
                    "Tab/←/→: Question  ↑/↓: Choice  Space/Enter: Select  Del: Clear  F10: Results  Esc: Quit",
                    palette,
                    chunks[3],
                );
            }
            Mode::Reviewing => {
                draw_results(frame, self.session, self.config, chunks[1]);
                draw_button(frame, &labels.redo, true, palette, chunks[2]);
                draw_help(frame, "Enter/r: Retake  Esc/q: Quit", palette, chunks[3]);
            }
        }
    }
}

fn draw_title(frame: &mut Frame, session: &Session<'_>, config: &RatatuiBackend, area: Rect) {
    let palette = config.palette();
    let progress = format!("{}/{}", session.answered(), session.total_questions());
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            config.title(),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(progress, Style::default().fg(palette.border)),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(title, area);
}

fn draw_results(frame: &mut Frame, session: &Session<'_>, config: &RatatuiBackend, area: Rect) {
    let palette = config.palette();
    let results = session.results();
    let domain = session.chart_domain();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let chart = RadarChart::new(&results, domain)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
        .series(&config.labels().series)
        .color(palette.chart)
        .grid_color(palette.grid)
        .label_color(palette.text);
    frame.render_widget(chart, chunks[0]);

    let lines: Vec<Line> = results
        .iter()
        .zip(session.catalog().themes())
        .flat_map(|(result, theme)| {
            [
                Line::styled(
                    result.theme.clone(),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    format!("  {} / {}", result.score, theme.max_score()),
                    Style::default().fg(palette.chart),
                ),
            ]
        })
        .collect();
    let scores = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(format!(" {} ", config.labels().series)),
    );
    frame.render_widget(scores, chunks[1]);
}

fn draw_button(frame: &mut Frame, label: &str, focused: bool, palette: &Palette, area: Rect) {
    let style = if focused {
        Style::default()
            .fg(palette.text)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    };
    let text = if focused {
        format!("  [ {label} ]  ")
    } else {
        format!("    {label}    ")
    };
    let button = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if focused {
                    palette.primary
                } else {
                    palette.border
                })),
        );
    frame.render_widget(button, area);
}

fn draw_help(frame: &mut Frame, text: &str, palette: &Palette, area: Rect) {
    let help = Paragraph::new(text.to_string()).style(Style::default().fg(palette.border));
    frame.render_widget(help, area);
}
