//! Rendering. Pure: reads the app, draws a frame.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::{App, Phase, PRESETS};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(8),    // Body
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    match app.phase() {
        Phase::Input | Phase::Loading => render_input(frame, chunks[1], app),
        Phase::Hyping => {
            render_floating(frame, chunks[1], app);
            render_hype(frame, chunks[1], app);
        }
    }

    render_help(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let subtitle = match app.phase() {
        Phase::Hyping => "وسع يا ابني للنجم!",
        _ => "متضايق؟ محبط؟ سيبها عليا",
    };

    let mut status = vec![Span::styled(
        "المُطبّلاتي 🥁",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];
    if !app.audio_enabled() && app.phase() == Phase::Hyping {
        status.push(Span::styled("  (no audio)", Style::default().fg(Color::DarkGray)));
    }

    let header = Paragraph::new(vec![
        Line::from(status),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::White))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Mood text
            Constraint::Length(1), // Presets
            Constraint::Length(3), // Button
        ])
        .split(area);

    let mood = if app.mood().is_empty() {
        Paragraph::new(Span::styled(
            "مثلاً: مديري في الشغل ضايقني، او حاسس اني فشلت...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(app.mood())
    };
    frame.render_widget(
        mood.wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" حاسس بإيه النهاردة؟ ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        ),
        chunks[0],
    );

    let presets: Vec<Span> = PRESETS
        .iter()
        .enumerate()
        .flat_map(|(i, (label, _))| {
            [
                Span::styled(format!(" F{} ", i + 1), Style::default().fg(Color::Black).bg(Color::Cyan)),
                Span::raw(format!(" {label}   ")),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(presets)).alignment(Alignment::Center),
        chunks[1],
    );

    let button = if app.phase() == Phase::Loading {
        let frame_index = (app.now_ms() / 150) as usize % SPINNER.len();
        Line::from(format!("بيسخن الطبلة... 🥁 {}", SPINNER[frame_index]))
    } else if app.mood().trim().is_empty() {
        Line::from(Span::styled(
            "سمّعني أحلى تسقيفة! 👏",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            "⏎ سمّعني أحلى تسقيفة! 👏",
            Style::default()
                .fg(Color::Red)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(
        Paragraph::new(button)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        chunks[2],
    );
}

fn render_hype(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Drum
            Constraint::Min(3),    // Message
        ])
        .split(area);

    // The pulse scale shows as extra drums: 1.0 → one, 1.5 → six
    let scale = app.pulse_scale();
    let drums = 1 + ((scale - 1.0) * 10.0).round() as usize;
    let style = if scale > 1.0 {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let drum_line = Line::from(vec![
        Span::raw("👏  "),
        Span::styled("🥁".repeat(drums), style),
        Span::raw("  💃"),
    ]);
    frame.render_widget(
        Paragraph::new(vec![Line::default(), drum_line]).alignment(Alignment::Center),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(app.message().unwrap_or_default())
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            ),
        chunks[1],
    );
}

fn render_floating(frame: &mut Frame, area: Rect, app: &App) {
    if area.width < 2 || area.height < 2 {
        return;
    }

    let now_ms = app.now_ms();
    let buffer = frame.buffer_mut();

    for item in app.decor().items() {
        let progress = item.progress(now_ms);
        if progress >= 1.0 {
            continue;
        }

        let x = area.x + ((item.left / 100.0) * area.width as f32) as u16;
        let rise = (progress * (area.height - 1) as f32) as u16;
        let y = area.bottom() - 1 - rise;
        let style = if progress > 0.7 {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default()
        };
        buffer.set_string(x.min(area.right() - 2), y, item.emoji, style);
    }
}

fn render_help(frame: &mut Frame, area: Rect, app: &App) {
    let help = match app.phase() {
        Phase::Input => " type your mood │ F1-F3 presets │ Enter hype │ Esc quit ",
        Phase::Loading => " warming up the drum... │ Esc quit ",
        Phase::Hyping => " space/c clap │ d drum │ s stop │ q quit ",
    };

    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
