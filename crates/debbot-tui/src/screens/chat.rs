//! The floating chat panel, rendered over the portfolio screen.

use crate::app::App;
use crate::ui::theme::{spinner_frame, Styles};
use crate::ui::{anchored_bottom_right, main_layout};
use debbot_engine::Role;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Placeholder shown in the empty input, as on the site.
const INPUT_PLACEHOLDER: &str = "Ask about my Python skills...";

/// Render the chat panel overlay in the bottom-right corner.
pub fn render_chat_overlay(app: &App, area: Rect, buf: &mut Buffer) {
    // Keep the status bar visible below the panel.
    let (main_area, _) = main_layout(area);
    let overlay_area = anchored_bottom_right(46, 18, main_area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(" Deb's Assistant ", Styles::title()),
            Span::styled("* Online ", Styles::online()),
        ]))
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .style(Styles::default());

    let inner = block.inner(overlay_area);
    block.render(overlay_area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Transcript
            Constraint::Length(1), // Input
        ])
        .split(inner);

    render_transcript(app, chunks[0], buf);
    render_input(app, chunks[1], buf);
}

fn render_transcript(app: &App, area: Rect, buf: &mut Buffer) {
    let mut lines = Vec::new();

    for msg in app.panel.transcript().messages() {
        let (prefix, style) = match msg.role {
            Role::User => ("You", Styles::highlight()),
            Role::Assistant => ("Assistant", Styles::active()),
        };

        let content_lines: Vec<&str> = msg.content.lines().collect();
        if let Some(first) = content_lines.first() {
            lines.push(Line::from(vec![
                Span::styled(format!("{prefix}: "), style),
                Span::styled((*first).to_string(), Styles::default()),
            ]));
        }
        for line in content_lines.iter().skip(1) {
            lines.push(Line::from(Span::styled(format!("  {line}"), Styles::default())));
        }
        lines.push(Line::from(""));
    }

    if app.panel.is_waiting() {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", spinner_frame(app.tick)), Styles::active()),
            Span::styled("Thinking...", Styles::dim()),
        ]));
    }

    // Scroll offset counts up from the bottom; show the tail by default.
    let height = usize::from(area.height);
    let skip = lines
        .len()
        .saturating_sub(height + app.transcript_scroll);
    let visible: Vec<Line<'_>> = lines.into_iter().skip(skip).collect();

    Paragraph::new(visible)
        .style(Styles::default())
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn render_input(app: &App, area: Rect, buf: &mut Buffer) {
    let input = app
        .input_state
        .widget()
        .focused(!app.panel.is_waiting())
        .placeholder(INPUT_PLACEHOLDER);
    input.render(area, buf);
}
