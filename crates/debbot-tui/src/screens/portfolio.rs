//! Portfolio screen - the main view behind the chat panel.

use crate::app::App;
use crate::screens::Screen;
use crate::ui::main_layout;
use crate::ui::theme::Styles;
use crate::ui::widgets::{KeyHint, StatusBar};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const STATUS_HINTS: &[KeyHint] = &[
    KeyHint::new("c", "Chat"),
    KeyHint::new("j/k", "Scroll"),
    KeyHint::new("?", "Help"),
    KeyHint::new("q", "Quit"),
];

/// The portfolio screen.
pub struct PortfolioScreen;

impl Screen for PortfolioScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let (main_area, status_area) = main_layout(area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(6),    // Content panes
            ])
            .split(main_area);

        render_header(app, chunks[0], buf);
        render_panes(app, chunks[1], buf);

        let mut status_bar = StatusBar::new("debbot").hints(STATUS_HINTS);
        if let Some(notification) = &app.notification {
            status_bar = status_bar.right(notification);
        }
        status_bar.render(status_area, buf);
    }
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Styles::border())
        .style(Styles::default());
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("  {}", app.profile.name), Styles::highlight()),
            Span::styled("  (press c to ask the assistant about him)", Styles::dim()),
        ]),
        Line::from(Span::styled(format!("  {}", app.profile.tagline), Styles::default())),
    ];
    Paragraph::new(lines).render(inner, buf);
}

fn render_panes(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_skills(app, chunks[0], buf);
    render_projects(app, chunks[1], buf);
    render_experience(app, chunks[2], buf);
}

fn render_skills(app: &App, area: Rect, buf: &mut Buffer) {
    let block = pane_block(" Skills ");
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = Vec::new();
    for group in &app.profile.skill_groups {
        lines.push(Line::from(Span::styled(group.name.clone(), Styles::highlight())));
        for skill in &group.skills {
            lines.push(Line::from(Span::styled(format!("  {skill}"), Styles::default())));
        }
        lines.push(Line::from(""));
    }

    scrolled(lines, app.portfolio_scroll).render(inner, buf);
}

fn render_projects(app: &App, area: Rect, buf: &mut Buffer) {
    let block = pane_block(" Projects ");
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = Vec::new();
    for project in &app.profile.projects {
        lines.push(Line::from(Span::styled(project.title.clone(), Styles::highlight())));
        lines.push(Line::from(Span::styled(format!("  {}", project.summary), Styles::dim())));
        lines.push(Line::from(""));
    }

    scrolled(lines, app.portfolio_scroll).render(inner, buf);
}

fn render_experience(app: &App, area: Rect, buf: &mut Buffer) {
    let block = pane_block(" Experience ");
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = Vec::new();
    for entry in &app.profile.experience {
        lines.push(Line::from(vec![
            Span::styled(entry.role.clone(), Styles::highlight()),
            Span::styled(format!(" · {}", entry.organization), Styles::dim()),
        ]));
        lines.push(Line::from(Span::styled(format!("  {}", entry.summary), Styles::default())));
        lines.push(Line::from(""));
    }

    scrolled(lines, app.portfolio_scroll).render(inner, buf);
}

fn pane_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .style(Styles::default())
}

fn scrolled(lines: Vec<Line<'_>>, offset: usize) -> Paragraph<'_> {
    let visible: Vec<Line<'_>> = lines.into_iter().skip(offset).collect();
    Paragraph::new(visible)
        .style(Styles::default())
        .wrap(Wrap { trim: false })
}
