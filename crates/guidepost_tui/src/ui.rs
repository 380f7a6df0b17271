//! UI rendering for the guide viewer.

use crate::app::App;
use guidepost_core::{CodeBlock, Guide, Icon, Section, Step};
use guidepost_navigator::{BackControl, ForwardControl, Progress, StepControls};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    let viewport = match (app.navigator.current_section(), app.navigator.current_step()) {
        (Some(section), Some(step)) => Some(draw_step_view(f, app, section, step, chunks[1])),
        _ => {
            draw_hub_view(f, app, chunks[1]);
            None
        }
    };
    if let Some((page_height, max_scroll)) = viewport {
        app.set_viewport(page_height, max_scroll);
    }

    draw_status_bar(f, app, chunks[2]);
}

/// Draw the header.
#[tracing::instrument(skip_all)]
fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let guide = app.navigator.guide();
    let (title, color) = match app.navigator.current_section() {
        Some(section) if !app.is_deck() => (
            format!("{} · {}", guide.title(), section.title()),
            accent_color(section.accent()),
        ),
        _ => (guide.title().clone(), Color::Cyan),
    };

    let header = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Draw the status bar with key hints.
#[tracing::instrument(skip_all)]
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.navigator.state().is_in_hub() {
        "↑↓: Navigate | Enter/1-9: Open | Q: Quit".to_string()
    } else if app.max_scroll > 0 {
        format!(
            "↑↓: Scroll | {}",
            control_hints(app.navigator.controls(), app.is_deck())
        )
    } else {
        control_hints(app.navigator.controls(), app.is_deck())
    };

    let status_text = if app.status_message.is_empty() {
        help_text
    } else {
        format!("{} | {}", app.status_message, help_text)
    };
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

/// Key hints for the current step's controls.
pub fn control_hints(controls: StepControls, is_deck: bool) -> String {
    let mut hints = Vec::new();

    match controls.back {
        BackControl::Previous => hints.push("←: Back"),
        BackControl::Hub if !is_deck => hints.push("←: Hub"),
        BackControl::Hub | BackControl::Hidden => {}
    }

    match controls.forward {
        ForwardControl::Next => hints.push("→/Enter: Next"),
        ForwardControl::Finish => hints.push("Enter: Finish"),
        ForwardControl::Choices => hints.push("1-9: Choose"),
        ForwardControl::Hidden => {}
    }

    if is_deck {
        hints.push("1-9: Slide");
    }
    hints.push(if is_deck { "Esc: Quit" } else { "Esc: Hub" });
    hints.push("Q: Quit");
    hints.join(" | ")
}

/// Draw the hub menu.
#[tracing::instrument(skip_all)]
fn draw_hub_view(f: &mut Frame, app: &App, area: Rect) {
    let guide = app.navigator.guide();

    let mut intro = Vec::new();
    if let Some(subtitle) = guide.subtitle() {
        intro.push(Line::from(subtitle.as_str()));
    }
    if let Some(hint) = guide.hub_hint() {
        intro.push(Line::styled(
            hint.as_str(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(intro.len() as u16 + 1),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(intro)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let header = Row::new(vec!["#", "", "Section", "Steps", "About"])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = guide
        .sections()
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let style = if i == app.hub_cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(accent_color(section.accent()))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                (i + 1).to_string(),
                icon_glyph(section.icon()).to_string(),
                section.title().clone(),
                section.len().to_string(),
                section.subtitle().clone(),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(30),
            Constraint::Length(6),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Sections"));

    f.render_widget(table, chunks[1]);
}

/// Draw the current step, with its info panel beside it when open.
///
/// Returns the body's inner height and the largest scroll offset that still
/// fills it.
#[tracing::instrument(skip_all)]
fn draw_step_view(
    f: &mut Frame,
    app: &App,
    section: &Section,
    step: &Step,
    area: Rect,
) -> (u16, u16) {
    let accent = accent_color(section.accent());

    let (body_area, panel_area) = match step.info_panel() {
        Some(_) if app.show_info => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        }
        _ => (area, None),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(body_area);

    let mut title = vec![Span::styled(
        step.title().clone(),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    )];
    if let Some(subtitle) = step.subtitle() {
        title.push(Span::styled(
            format!(" · {}", subtitle),
            Style::default().fg(Color::Gray),
        ));
    }

    let body = Paragraph::new(step_lines(app.navigator.guide(), step, accent))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .title(Line::from(title)),
        )
        .wrap(Wrap { trim: false });
    let total = u16::try_from(body.line_count(chunks[0].width)).unwrap_or(u16::MAX);
    let max_scroll = total.saturating_sub(chunks[0].height);
    let body = body.scroll((app.scroll.min(max_scroll), 0));
    f.render_widget(body, chunks[0]);

    if let Some(progress) = app.navigator.progress() {
        f.render_widget(
            Paragraph::new(progress_dots(progress, accent)).alignment(Alignment::Center),
            chunks[1],
        );
    }

    if let (Some(panel), Some(panel_area)) = (step.info_panel(), panel_area) {
        let lines: Vec<Line> = panel
            .paragraphs()
            .iter()
            .flat_map(|p| [Line::from(p.as_str()), Line::default()])
            .collect();
        let widget = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(panel.title().as_str()),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(widget, panel_area);
    }

    (chunks[0].height.saturating_sub(2), max_scroll)
}

/// Body lines for a step: content first, then whichever extras it carries.
pub fn step_lines<'a>(guide: &'a Guide, step: &'a Step, accent: Color) -> Vec<Line<'a>> {
    let heading = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = vec![Line::from(step.display_content())];

    if let Some(panel) = step.info_panel() {
        lines.push(Line::styled(
            format!("Press i to read more about {}", panel.trigger_word()),
            dim,
        ));
    }

    if !step.bullet_points().is_empty() {
        lines.push(Line::default());
        for point in step.bullet_points() {
            lines.push(Line::from(format!("  • {}", point)));
        }
    }

    if *step.terminal_mockup() {
        lines.push(Line::default());
        lines.push(Line::styled("  ╭─ claude ───────────────────────────╮", dim));
        lines.push(Line::styled("  │ > Try \"what does this project do?\" │", dim));
        lines.push(Line::styled("  ╰────────────────────────────────────╯", dim));
    }

    for code in [step.code(), step.secondary_code()].into_iter().flatten() {
        lines.push(Line::default());
        lines.extend(code_lines(code));
    }

    if !step.features().is_empty() {
        lines.push(Line::default());
        for feature in step.features() {
            let color = feature
                .color()
                .parse::<Color>()
                .unwrap_or(accent);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  ▸ {}", feature.label()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {}", feature.description())),
            ]));
            if let Some(link) = feature.link() {
                lines.push(Line::styled(format!("    {}", link), dim));
            }
        }
    }

    for tab in step.prompt_tabs() {
        lines.push(Line::default());
        lines.push(Line::styled(format!("  [{}]", tab.label()), heading));
        for item in tab.items() {
            lines.push(Line::from(format!("    > {}", item.prompt())));
        }
    }

    if !step.command_list().is_empty() {
        lines.push(Line::default());
        for entry in step.command_list() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}", entry.command()),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(format!("  {}", entry.description())),
            ]));
        }
    }

    if step.has_choices() {
        lines.push(Line::default());
        for (i, choice) in step.choices().iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  [{}] ", i + 1), heading),
                Span::styled(
                    format!("{} {}", icon_glyph(choice.icon()), choice.label()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            if !choice.description().is_empty() {
                lines.push(Line::styled(format!("      {}", choice.description()), dim));
            }
        }
    }

    if *step.show_resources() {
        for category in guide.resource_categories() {
            lines.push(Line::default());
            lines.push(Line::styled(format!("  {}", category), heading));
            for link in guide.resources_in(category) {
                lines.push(Line::from(format!("    {}: {}", link.title(), link.description())));
                lines.push(Line::styled(format!("      {}", link.url()), dim));
            }
        }
    }

    lines
}

fn code_lines(code: &CodeBlock) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    if let Some(caption) = code.filename() {
        lines.push(Line::styled(
            format!("  {}", caption),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        ));
    }
    let style = Style::default().fg(Color::LightGreen).bg(Color::Black);
    for line in code.code().lines() {
        lines.push(Line::styled(format!("  {}", line), style));
    }
    lines
}

/// One dot per step: passed steps filled, the current one ringed.
pub fn progress_dots(progress: Progress, accent: Color) -> Line<'static> {
    let spans: Vec<Span> = (0..progress.total)
        .map(|i| {
            if i == progress.index {
                Span::styled("◉ ", Style::default().fg(accent))
            } else if i < progress.index {
                Span::styled("● ", Style::default().fg(accent))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    Line::from(spans)
}

/// Parses a `#RRGGBB` accent, falling back to cyan.
fn accent_color(accent: &str) -> Color {
    accent.parse().unwrap_or(Color::Cyan)
}

fn icon_glyph(icon: &Icon) -> &'static str {
    match icon {
        Icon::Terminal => "❯",
        Icon::Lightbulb => "✦",
        Icon::Apple => "◆",
        Icon::Windows => "⊞",
        Icon::Wrench => "⚒",
        Icon::Puzzle => "✚",
        Icon::BookOpen => "☰",
        Icon::FileText => "≡",
        Icon::Compass => "✧",
        Icon::Code => "⟨⟩",
        Icon::Chart => "▤",
        Icon::Trophy => "★",
        Icon::Other(_) => "•",
    }
}
