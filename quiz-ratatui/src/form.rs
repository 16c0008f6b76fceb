//! The answer form: theme cards, radio groups, focus and scrolling.

use quiz::{Catalog, Session, Theme};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::Palette;

/// Blank rows between two cards.
const CARD_SPACING: u16 = 1;

/// A question addressed by its position in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
    pub theme: usize,
    pub question: usize,
}

/// What keyboard input currently acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    /// Index into `FormState::slots`.
    Question(usize),
    ResultsButton,
}

/// Navigation state of the answer form.
///
/// Selections are not stored here. The radio markers are drawn from the
/// session's answers, so the form always shows what the store holds.
#[derive(Debug, Clone)]
pub(crate) struct FormState {
    slots: Vec<Slot>,
    focus: Focus,
    /// Highlighted choice of the focused question.
    highlight: usize,
    scroll_offset: u16,
}

impl FormState {
    pub fn new(session: &Session<'_>) -> Self {
        let slots = session
            .catalog()
            .themes()
            .iter()
            .enumerate()
            .flat_map(|(theme, t)| {
                (0..t.questions().len()).map(move |question| Slot { theme, question })
            })
            .collect();
        let mut state = Self {
            slots,
            focus: Focus::ResultsButton,
            highlight: 0,
            scroll_offset: 0,
        };
        state.reset(session);
        state
    }

    /// Focus the first question and scroll back to the top.
    pub fn reset(&mut self, session: &Session<'_>) {
        self.scroll_offset = 0;
        self.focus_slot(session, 0);
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn highlight(&self) -> usize {
        self.highlight
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    /// The focused question, if the button is not focused.
    pub fn focused_slot(&self) -> Option<Slot> {
        match self.focus {
            Focus::Question(idx) => self.slots.get(idx).copied(),
            Focus::ResultsButton => None,
        }
    }

    fn focus_slot(&mut self, session: &Session<'_>, idx: usize) {
        match self.slots.get(idx) {
            Some(slot) => {
                self.focus = Focus::Question(idx);
                let theme = &session.catalog().themes()[slot.theme];
                self.highlight = session
                    .selected_choice(theme.id(), slot.question)
                    .unwrap_or(0);
            }
            None => self.focus = Focus::ResultsButton,
        }
    }

    pub fn next_question(&mut self, session: &Session<'_>) {
        if let Focus::Question(idx) = self.focus {
            self.focus_slot(session, idx + 1);
        }
    }

    pub fn prev_question(&mut self, session: &Session<'_>) {
        match self.focus {
            Focus::Question(idx) if idx > 0 => self.focus_slot(session, idx - 1),
            Focus::Question(_) => {}
            Focus::ResultsButton if !self.slots.is_empty() => {
                self.focus_slot(session, self.slots.len() - 1)
            }
            Focus::ResultsButton => {}
        }
    }

    pub fn focus_button(&mut self) {
        self.focus = Focus::ResultsButton;
    }

    fn choice_count(&self, catalog: &Catalog) -> usize {
        self.focused_slot()
            .map(|slot| catalog.themes()[slot.theme].questions()[slot.question].choices().len())
            .unwrap_or(0)
    }

    pub fn highlight_up(&mut self, catalog: &Catalog) {
        let count = self.choice_count(catalog);
        if count > 0 {
            self.highlight = (self.highlight + count - 1) % count;
        }
    }

    pub fn highlight_down(&mut self, catalog: &Catalog) {
        let count = self.choice_count(catalog);
        if count > 0 {
            self.highlight = (self.highlight + 1) % count;
        }
    }

    /// Move the highlight to `choice` if the focused question has it.
    pub fn set_highlight(&mut self, catalog: &Catalog, choice: usize) -> bool {
        if choice < self.choice_count(catalog) {
            self.highlight = choice;
            true
        } else {
            false
        }
    }

    /// Keep the focused question inside a viewport of `viewport_height` rows.
    pub fn adjust_scroll(&mut self, catalog: &Catalog, viewport_height: u16) {
        let total = total_height(catalog);
        if let Some(slot) = self.focused_slot() {
            let theme = &catalog.themes()[slot.theme];
            let card_top = card_top(catalog, slot.theme);
            let question_top = card_top + 1 + question_offset(theme, slot.question);
            // The first question also reveals the card's title row, the last one
            // its bottom border.
            let span_top = if slot.question == 0 {
                card_top
            } else {
                question_top
            };
            let question = &theme.questions()[slot.question];
            let mut span_bottom = question_top + 1 + question.choices().len() as u16;
            if slot.question + 1 == theme.questions().len() {
                span_bottom += 1;
            }

            if span_top < self.scroll_offset {
                self.scroll_offset = span_top;
            }
            if span_bottom > self.scroll_offset + viewport_height {
                self.scroll_offset = span_bottom.saturating_sub(viewport_height);
            }
        }
        self.scroll_offset = self
            .scroll_offset
            .min(total.saturating_sub(viewport_height));
    }
}

/// Rows inside a card before question `question_index` starts.
fn question_offset(theme: &Theme, question_index: usize) -> u16 {
    theme
        .questions()
        .iter()
        .take(question_index)
        .map(|q| 1 + q.choices().len() as u16 + 1)
        .sum()
}

/// Rows of a card including its borders.
fn card_height(theme: &Theme) -> u16 {
    let count = theme.questions().len();
    let inner = if count == 0 {
        1
    } else {
        question_offset(theme, count) - 1
    };
    inner + 2
}

fn card_top(catalog: &Catalog, theme_index: usize) -> u16 {
    catalog
        .themes()
        .iter()
        .take(theme_index)
        .map(|t| card_height(t) + CARD_SPACING)
        .sum()
}

fn total_height(catalog: &Catalog) -> u16 {
    let cards: u16 = catalog.themes().iter().map(card_height).sum();
    let gaps = (catalog.len() as u16).saturating_sub(1) * CARD_SPACING;
    cards + gaps
}

/// Content rows of one card.
fn card_lines<'a>(
    session: &Session<'_>,
    state: &FormState,
    theme_index: usize,
    theme: &'a Theme,
    palette: &Palette,
) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    if theme.questions().is_empty() {
        lines.push(Line::from(""));
        return lines;
    }

    for (q_idx, question) in theme.questions().iter().enumerate() {
        if q_idx > 0 {
            lines.push(Line::from(""));
        }
        let focused = state.focused_slot()
            == Some(Slot {
                theme: theme_index,
                question: q_idx,
            });
        let prompt_style = if focused {
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD)
        };
        let pointer = if focused { "▸ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(pointer, prompt_style),
            Span::styled(question.prompt(), prompt_style),
        ]));

        let selected = session.selected_choice(theme.id(), q_idx);
        for (c_idx, choice) in question.choices().iter().enumerate() {
            let is_selected = selected == Some(c_idx);
            let marker = if is_selected { "(●)" } else { "( )" };
            let style = if focused && c_idx == state.highlight {
                Style::default()
                    .fg(palette.text)
                    .bg(palette.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default().fg(palette.success)
            } else {
                Style::default().fg(palette.text)
            };
            lines.push(Line::styled(
                format!("    {} {}", marker, choice.label()),
                style,
            ));
        }
    }
    lines
}

/// Draw the visible part of every card into `area`.
pub(crate) fn draw_cards(
    frame: &mut Frame,
    session: &Session<'_>,
    state: &mut FormState,
    area: Rect,
    palette: &Palette,
) {
    let catalog = session.catalog();
    let content_width = area.width.saturating_sub(2); // 1 for left margin, 1 for scrollbar
    let viewport_height = area.height;

    state.adjust_scroll(catalog, viewport_height);
    let scroll_offset = state.scroll_offset;
    let total = total_height(catalog);

    let mut card_y: u16 = 0;
    for (theme_index, theme) in catalog.themes().iter().enumerate() {
        let height = card_height(theme);
        let top = card_y;
        let bottom = card_y + height;
        card_y = bottom + CARD_SPACING;

        // Skip cards completely above the viewport
        if bottom <= scroll_offset {
            continue;
        }
        // Stop once we're completely below the viewport
        if top >= scroll_offset + viewport_height {
            break;
        }

        let clipped_top = top < scroll_offset;
        let visible_top = top.saturating_sub(scroll_offset);
        let visible_bottom = bottom.min(scroll_offset + viewport_height);
        let visible_height = visible_bottom - scroll_offset.max(top);
        let clipped_bottom = visible_bottom < bottom;

        let mut borders = Borders::LEFT | Borders::RIGHT;
        if !clipped_top {
            borders |= Borders::TOP;
        }
        if !clipped_bottom {
            borders |= Borders::BOTTOM;
        }

        let card_has_focus = state
            .focused_slot()
            .is_some_and(|slot| slot.theme == theme_index);
        let mut block = Block::default()
            .borders(borders)
            .border_style(Style::default().fg(if card_has_focus {
                palette.primary
            } else {
                palette.border
            }));
        if !clipped_top {
            block = block
                .title(format!(" {} ", theme.title()))
                .title_style(
                    Style::default()
                        .fg(palette.primary)
                        .add_modifier(Modifier::BOLD),
                );
        }

        // Rows of content hidden above the viewport (the top border is one of them).
        let hidden_rows = if clipped_top {
            scroll_offset - top - 1
        } else {
            0
        };

        let card_area = Rect {
            x: area.x + 1,
            y: area.y + visible_top,
            width: content_width,
            height: visible_height,
        };
        let lines = card_lines(session, state, theme_index, theme, palette);
        let card = Paragraph::new(lines)
            .block(block)
            .scroll((hidden_rows, 0));
        frame.render_widget(card, card_area);
    }

    // Draw scrollbar if content exceeds viewport
    if total > viewport_height {
        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y,
            width: 1,
            height: viewport_height,
        };

        let mut scrollbar_state = ScrollbarState::new(total as usize)
            .position(scroll_offset as usize)
            .viewport_content_length(viewport_height as usize);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}
