//! Rendering.
//!
//! Pure view code: reads the [`App`] state and paints one frame. The card
//! dims while a transition is in flight, mirroring the fade the moment
//! sequence is meant to have.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::app::{App, Overlay};
use crate::moment::Tone;
use crate::timeline::stats::{as_of_label, DAY_UNIT};

const CARD_WIDTH: u16 = 60;
const CARD_HEIGHT: u16 = 14;

/// Paint one frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(2),
        ])
        .split(area);

    render_stats(frame, app, rows[0]);
    render_card(frame, app, rows[1]);
    render_footer(frame, app, rows[2]);

    match app.overlay() {
        Overlay::Diary => render_diary(frame, app, area),
        Overlay::Lightbox => render_lightbox(frame, app, area),
        Overlay::None => {}
    }
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let moment = app.current_moment();
    let mut counter_spans: Vec<Span> = Vec::new();
    for counter in app.counters() {
        if !counter_spans.is_empty() {
            counter_spans.push(Span::raw("    "));
        }
        counter_spans.push(Span::styled(
            format!("{} ", counter.label),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        counter_spans.push(Span::styled(
            counter.days.to_string(),
            Style::default()
                .fg(tone_color(Some(counter.tone)))
                .add_modifier(Modifier::BOLD),
        ));
        counter_spans.push(Span::styled(
            format!(" {DAY_UNIT}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            as_of_label(moment.date),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(counter_spans),
    ];
    let stats = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(stats, area);
}

fn render_card(frame: &mut Frame, app: &App, area: Rect) {
    let card_area = centered_fixed(CARD_WIDTH, CARD_HEIGHT, area);
    let moment = app.current_moment();

    let accent = tone_color(moment.theme);
    let style = if app.is_transitioning() {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };

    let mut lines = vec![
        Line::from(Span::styled(
            moment.title.clone(),
            style.fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            moment.date_label(),
            style.fg(Color::DarkGray),
        )),
        Line::default(),
    ];

    if let Some(image) = &moment.image {
        lines.push(Line::from(Span::styled(
            format!("〔照片〕{}", image.display()),
            style,
        )));
        lines.push(Line::from(Span::styled(
            "按 i 放大",
            style.fg(Color::DarkGray),
        )));
    } else if let Some(subtext) = &moment.subtext {
        lines.push(Line::from(Span::styled(subtext.clone(), style.fg(accent))));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "♥ enter 查看日记",
        style.fg(Color::DarkGray),
    )));

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style.fg(accent)),
        );
    frame.render_widget(card, card_area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let music = if app.is_playing() {
        Span::styled("♪ 播放中", Style::default().fg(Color::Magenta))
    } else {
        Span::styled("♪ 已暂停", Style::default().fg(Color::DarkGray))
    };
    let lines = vec![
        Line::from(Span::styled(
            app.position_label(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            music,
            Span::styled(
                "  ·  ←/→ 翻页  ·  enter 日记  ·  m 音乐  ·  q 退出",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];
    let footer = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn render_diary(frame: &mut Frame, app: &App, area: Rect) {
    let moment = app.current_moment();
    let modal = centered_percent(70, 80, area);
    frame.render_widget(Clear, modal);

    let accent = tone_color(moment.theme);
    let mut lines = vec![
        Line::from(Span::styled(
            moment.date_label(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
    ];
    if let Some(subtext) = &moment.subtext {
        lines.push(Line::from(Span::styled(
            subtext.clone(),
            Style::default().fg(accent).add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::default());
    }
    for paragraph in moment.diary.paragraphs() {
        lines.push(Line::from(paragraph));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "esc 关闭",
        Style::default().fg(Color::DarkGray),
    )));

    let diary = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", moment.title))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent)),
        );
    frame.render_widget(diary, modal);
}

fn render_lightbox(frame: &mut Frame, app: &App, area: Rect) {
    let moment = app.current_moment();
    let modal = centered_percent(80, 70, area);
    frame.render_widget(Clear, modal);

    let image = moment
        .image
        .as_ref()
        .map_or_else(String::new, |path| path.display().to_string());
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            moment.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(image),
        Line::default(),
        Line::from(Span::styled(
            "esc 关闭",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let lightbox = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 照片 ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    frame.render_widget(lightbox, modal);
}

/// Terminal color for a card tone; tone-less cards fall back to pink.
fn tone_color(tone: Option<Tone>) -> Color {
    match tone {
        Some(Tone::Pink) | None => Color::LightMagenta,
        Some(Tone::Purple) => Color::Magenta,
        Some(Tone::Indigo) => Color::LightBlue,
        Some(Tone::Green) => Color::Green,
        Some(Tone::Blue) => Color::Blue,
    }
}

/// A fixed-size rectangle centered in `area`, clamped to it.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// A percentage-sized rectangle centered in `area`.
fn centered_percent(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioController, NullPlayback, Playback};
    use crate::milestone::MilestoneSet;
    use crate::store;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        let audio: Box<dyn Playback> = Box::new(NullPlayback);
        App::new(
            store::seed().unwrap(),
            MilestoneSet::standard(),
            AudioController::start(audio, false),
        )
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        use unicode_width::UnicodeWidthStr;
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            let mut x = 0;
            while x < buffer.area.width {
                let symbol = buffer[(x, y)].symbol();
                text.push_str(symbol);
                // ratatui fills the cell(s) following a double-width glyph with a
                // reset space; skip them so the reconstructed line matches the screen.
                x += (UnicodeWidthStr::width(symbol).max(1)) as u16;
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_base_frame() {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        let app = app();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("初次相遇"));
        assert!(text.contains("截至 2022-04-24"));
        assert!(text.contains("相知"));
        assert!(text.contains("1 / 8"));
        assert!(text.contains("已暂停"));
    }

    #[test]
    fn test_render_diary_overlay() {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        let mut app = app();
        app.handle_event(&crossterm::event::Event::Key(KeyEvent::new(
            KeyCode::Enter,
            KeyModifiers::NONE,
        )));
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("esc 关闭"));
        assert!(text.contains("樱花"));
    }

    #[test]
    fn test_centered_fixed_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_fixed(60, 14, area);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);
    }

    #[test]
    fn test_centered_percent_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_percent(70, 80, area);
        assert!(rect.width <= 70);
        assert!(rect.x >= 15);
    }
}
