use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus, Popup, SAMPLE_LINK};
use crate::faq::FAQS;
use crate::theme::Palette;

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let p = app.theme.palette();

    // Page background
    f.render_widget(Block::default().style(Style::default().bg(p.bg)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(9), // Input card
            Constraint::Min(4),    // FAQ
            Constraint::Length(1), // Info line
            Constraint::Length(1), // Footer
        ])
        .split(area);

    draw_header(f, app, &p, chunks[0]);
    draw_input_card(f, app, &p, chunks[1]);
    draw_faq(f, app, &p, chunks[2]);
    draw_info_line(f, app, &p, chunks[3]);
    draw_footer(f, &p, chunks[4]);

    match app.popup {
        Popup::None => {}
        Popup::Alert => draw_alert_popup(f, app, &p),
        Popup::Help => draw_help_popup(f, &p),
    }
}

fn draw_header(f: &mut Frame, app: &App, p: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(p.border))
        .style(Style::default().bg(p.surface));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(34)])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" ▶ ", Style::default().fg(p.accent).add_modifier(Modifier::BOLD)),
        Span::styled(
            "YouTube Thumbnail Downloader",
            Style::default().fg(p.text).add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(title, halves[0]);

    // Icon shows the mode a toggle would switch to
    let (icon, label) = if app.theme.is_dark() {
        ("☀", "Light mode")
    } else {
        ("☾", "Dark mode")
    };

    let actions = Paragraph::new(Line::from(vec![
        Span::styled(" GitHub ", Style::default().fg(p.text).add_modifier(Modifier::BOLD)),
        Span::styled("(g)", Style::default().fg(p.text_dim)),
        Span::styled("  │ ", Style::default().fg(p.border)),
        Span::styled(format!("{} ", icon), Style::default().fg(p.text)),
        Span::styled(label, Style::default().fg(p.text_dim)),
        Span::styled(" ^T ", Style::default().fg(p.text_dim)),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(actions, halves[1]);
}

fn draw_input_card(f: &mut Frame, app: &App, p: &Palette, area: Rect) {
    let is_active = app.focus == Focus::Input && app.popup == Popup::None;

    let card = Block::default()
        .title(Span::styled(
            " YouTube Video Link ",
            Style::default().fg(p.text).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_active { p.border_focus } else { p.border }))
        .style(Style::default().bg(p.surface));

    let inner = card.inner(area);
    f.render_widget(card, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Text field
            Constraint::Length(1), // Sample link
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Button
            Constraint::Min(0),
        ])
        .split(inner);

    let field_line = if app.input.is_empty() {
        Line::from(vec![
            Span::styled(if is_active { "_" } else { "" }, Style::default().fg(p.text)),
            Span::styled("Enter YouTube video URL...", Style::default().fg(p.text_dim)),
        ])
    } else {
        let cursor = if is_active { "_" } else { "" };
        Line::from(Span::styled(format!("{}{}", app.input, cursor), Style::default().fg(p.text)))
    };

    // Keep the tail of long input visible
    let field_width = rows[0].width.saturating_sub(2);
    let scroll_x = input_scroll(app.input.chars().count(), field_width);
    let field_border = if is_active { p.border_focus } else { p.border };

    let field = Paragraph::new(field_line)
        .scroll((0, scroll_x))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(field_border))
                .style(Style::default().bg(p.input_bg)),
        );
    f.render_widget(field, rows[0]);

    let sample = Paragraph::new(Line::from(vec![
        Span::styled(
            "Sample YouTube Link: ",
            Style::default().fg(p.text_dim).add_modifier(Modifier::BOLD),
        ),
        Span::styled(SAMPLE_LINK, Style::default().fg(p.text_dim)),
    ]));
    f.render_widget(sample, rows[1]);

    let button_style = if is_active {
        Style::default().fg(p.surface).bg(p.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(p.text_dim).add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(Line::from(Span::styled(" Get Thumbnail (Enter) ", button_style)))
        .alignment(Alignment::Center);
    f.render_widget(button, rows[3]);
}

fn draw_faq(f: &mut Frame, app: &App, p: &Palette, area: Rect) {
    let is_active = app.focus == Focus::Faq && app.popup == Popup::None;

    let block = Block::default()
        .title(Span::styled(
            " FAQ ",
            if is_active {
                Style::default().fg(p.border_focus).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(p.text_dim)
            },
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_active { p.border_focus } else { p.border }));

    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_row = 0usize;
    let mut row = 0usize;

    for (i, entry) in FAQS.iter().enumerate() {
        let open = app.faq.is_open(i);
        let marker = if open { "▲" } else { "▼" };

        let style = if is_active && i == app.faq.selected {
            Style::default().bg(p.bg_selected).fg(p.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(p.text)
        };

        if i == app.faq.selected {
            selected_row = row;
        }

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), Style::default().fg(p.text_dim)),
            Span::styled(entry.question, style),
        ]));
        row += wrapped_height(entry.question.chars().count() + 3, inner_width);

        if open {
            lines.push(Line::from(Span::styled(
                format!("   {}", entry.answer),
                Style::default().fg(p.text_dim),
            )));
            row += wrapped_height(entry.answer.chars().count() + 3, inner_width);
        }
        lines.push(Line::from(""));
        row += 1;
    }

    // Scroll so the selected question stays on screen
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = (selected_row + 1).saturating_sub(visible);

    let faq = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0))
        .block(block);
    f.render_widget(faq, area);
}

/// Horizontal scroll that keeps the cursor after `input_len` chars in view
fn input_scroll(input_len: usize, field_width: u16) -> u16 {
    u16::try_from(input_len)
        .unwrap_or(u16::MAX)
        .saturating_add(1)
        .saturating_sub(field_width)
}

fn wrapped_height(len: usize, width: usize) -> usize {
    len.div_ceil(width).max(1)
}

fn draw_info_line(f: &mut Frame, app: &App, p: &Palette, area: Rect) {
    let line = if let Some(ref status) = app.status_message {
        Line::from(Span::styled(status, Style::default().fg(p.link)))
    } else {
        let hint = match app.focus {
            Focus::Input => "Tab FAQ │ Enter get thumbnail │ ^T theme │ F1 help │ ^C quit",
            Focus::Faq => "Tab input │ ↑/↓ move │ Space expand │ t theme │ ? help │ q quit",
        };
        Line::from(Span::styled(hint, Style::default().fg(p.text_dim)))
    };

    let info = Paragraph::new(line)
        .alignment(Alignment::Center)
        .style(Style::default().bg(p.bg));
    f.render_widget(info, area);
}

fn draw_footer(f: &mut Frame, p: &Palette, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            "Built by diya-noor7212. The source code is available on ",
            Style::default().fg(p.text_dim),
        ),
        Span::styled(
            "GitHub",
            Style::default().fg(p.link).add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled(".", Style::default().fg(p.text_dim)),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().bg(p.surface));
    f.render_widget(footer, area);
}

fn draw_alert_popup(f: &mut Frame, app: &App, p: &Palette) {
    let area = f.area();
    let popup_area = centered_rect(if area.width < 80 { 90 } else { 50 }, 30, area);

    f.render_widget(Clear, popup_area);

    let alert = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(&app.alert_message, Style::default().fg(p.text))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ ", Style::default().fg(p.text_dim)),
            Span::styled("Enter = OK", Style::default().fg(p.accent).add_modifier(Modifier::BOLD)),
            Span::styled(" ]", Style::default().fg(p.text_dim)),
        ]),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(Span::styled(" Invalid link ", Style::default().fg(p.accent)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.accent))
            .style(Style::default().bg(p.surface)),
    );

    f.render_widget(alert, popup_area);
}

fn draw_help_popup(f: &mut Frame, p: &Palette) {
    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 80 { 95 } else { 60 },
        if area.height < 30 { 95 } else { 70 },
        area,
    );

    f.render_widget(Clear, popup_area);

    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        ))
    };
    let binding = |keys: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", keys), Style::default().fg(p.link)),
            Span::styled(what, Style::default().fg(p.text)),
        ])
    };

    let help_text = vec![
        section("═══ Anywhere ═══"),
        binding("Tab", "Switch between link input and FAQ"),
        binding("Ctrl-T", "Toggle light/dark theme"),
        binding("F1", "Show this help"),
        binding("Ctrl-C", "Quit"),
        Line::from(""),
        section("═══ Link Input ═══"),
        binding("Enter", "Open the max-resolution thumbnail in your browser"),
        binding("Backspace", "Delete last character"),
        binding("Esc/^U", "Clear input"),
        Line::from(""),
        section("═══ FAQ ═══"),
        binding("↑/↓ j/k", "Move between questions"),
        binding("Space", "Expand/collapse question"),
        binding("t", "Toggle theme"),
        binding("g", "Open project page"),
        binding("q", "Quit"),
        Line::from(""),
        section("═══ Command Line ═══"),
        binding("thumbgrab <URL>", ""),
        Line::from(Span::styled(
            "      Print the thumbnail URL (--open, --json)",
            Style::default().fg(p.text_dim),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Press Esc to close",
            Style::default().fg(p.text_dim),
        )),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(" thumbgrab Help ", Style::default().fg(p.accent)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.accent))
                .style(Style::default().bg(p.surface)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
