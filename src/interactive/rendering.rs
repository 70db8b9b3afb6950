//! TUI rendering with ratatui
//!
//! Panels for the hangman board, guesses and messages.

use super::app::{App, MessageStyle};
use crate::core::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎩 HANGMAN - Guess the word one letter at a time")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Word
            Constraint::Length(3), // Guesses gauge
            Constraint::Length(4), // Alphabet
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_guesses(f, app, chunks[1]);
    render_alphabet(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.board();
    let status = app.session.status();

    let mask_style = match status {
        GameStatus::Won => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        GameStatus::Lost => Style::default().fg(Color::Red),
        GameStatus::InProgress => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(board.mask(), mask_style)),
        Line::from(""),
    ];

    match status {
        GameStatus::Won => content.push(Line::from(Span::styled(
            "🎉 CONGRATULATIONS! 🎉",
            Style::default().fg(Color::Green),
        ))),
        GameStatus::Lost => content.push(Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                app.session.secret_word().to_uppercase(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ])),
        GameStatus::InProgress => {}
    }

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_guesses(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.session.remaining_guesses();
    let max = app.session.max_guesses();
    let percent = (remaining * 100 / max) as u16;

    let color = if remaining * 3 <= max {
        Color::Red
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{max}"));

    f.render_widget(gauge, area);
}

fn render_alphabet(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.board();

    let letters: Vec<Span> = ('a'..='z')
        .map(|c| {
            let style = if !app.session.has_guessed(c) {
                Style::default().fg(Color::White)
            } else if board.is_revealed(c) {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            };
            Span::styled(format!("{} ", c.to_ascii_uppercase()), style)
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(letters))
        .block(Block::default().title(" Letters ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let misses: String = app
        .session
        .board()
        .misses()
        .iter()
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let wrong_text = format!("Misses: {misses}");
    let wrong = Paragraph::new(wrong_text).alignment(Alignment::Center);
    f.render_widget(wrong, chunks[1]);

    let help_text = if app.session.is_game_over() {
        "q: Quit | n: New Game"
    } else {
        "a-z: Guess | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
