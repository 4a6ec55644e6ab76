use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::games::Game;

const BANNER: &str = r#"
 ╔══════════════════════════════════════════════════════════════════╗
 ║  ████████╗██████╗ ██╗       ██████╗ █████╗ ██████╗ ███████╗      ║
 ║  ╚══██╔══╝██╔══██╗██║      ██╔════╝██╔══██╗██╔══██╗██╔════╝      ║
 ║     ██║   ██████╔╝██║█████╗██║     ███████║██║  ██║█████╗        ║
 ║     ██║   ██╔══██╗██║╚════╝██║     ██╔══██║██║  ██║██╔══╝        ║
 ║     ██║   ██║  ██║██║      ╚██████╗██║  ██║██████╔╝███████╗      ║
 ║     ╚═╝   ╚═╝  ╚═╝╚═╝       ╚═════╝╚═╝  ╚═╝╚═════╝ ╚══════╝      ║
 ╚══════════════════════════════════════════════════════════════════╝"#;

struct GameTile {
    key: &'static str,
    icon: &'static str,
    name: &'static str,
    desc: &'static str,
    color: Color,
    border_color: Color,
}

const GAME_TILES: [GameTile; 3] = [
    GameTile { key: "1", icon: "🧱", name: "Brickrush", desc: "Smash bricks,\ncatch power-ups!", color: Color::Rgb(220, 80, 80), border_color: Color::Rgb(120, 40, 40) },
    GameTile { key: "2", icon: "🔢", name: "1024", desc: "Slide and merge\nto 1024!", color: Color::Rgb(251, 191, 36), border_color: Color::Rgb(140, 100, 20) },
    GameTile { key: "3", icon: "🐍", name: "Snake", desc: "Eat, grow, and\ndon't bite back!", color: Color::Rgb(80, 220, 80), border_color: Color::Rgb(40, 120, 40) },
];

fn render_game_tile(frame: &mut Frame, area: Rect, tile: &GameTile, best: u32, selected: bool) {
    let border_color = if selected { Color::Rgb(255, 220, 80) } else { tile.border_color };
    let border_type = if selected { BorderType::Double } else { BorderType::Rounded };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 { return; }

    let mut lines: Vec<Line> = Vec::new();

    // Key + Icon + Name line
    let name_color = if selected { Color::Rgb(255, 255, 255) } else { tile.color };
    lines.push(Line::from(vec![
        Span::styled(format!("[{}] ", tile.key), Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD)),
        Span::styled(format!("{} ", tile.icon), Style::default()),
        Span::styled(tile.name, Style::default().fg(name_color).add_modifier(Modifier::BOLD)),
    ]));

    // Description lines
    for desc_line in tile.desc.split('\n') {
        lines.push(Line::from(vec![
            Span::styled(desc_line, Style::default().fg(if selected { Color::Rgb(180, 180, 200) } else { Color::Rgb(120, 120, 140) })),
        ]));
    }

    // Best score readout
    lines.push(Line::from(vec![
        Span::styled("🏆 ", Style::default()),
        Span::styled(
            format!("Best: {}", best),
            Style::default().fg(Color::Rgb(255, 215, 0)),
        ),
    ]));

    // Selected indicator
    if selected {
        lines.push(Line::from(vec![
            Span::styled("▶ Enter to play", Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD)),
        ]));
    }

    let p = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(p, inner);
}

fn game_controls(game_idx: usize) -> Vec<Line<'static>> {
    match game_idx {
        0 => vec![ // Brickrush
            Line::from(""),
            Line::from(vec![
                Span::styled("  🧱 Brickrush", Style::default().fg(Color::Rgb(220, 80, 80)).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::styled("  Clear all eight brick layouts!", Style::default().fg(Color::Rgb(100, 100, 120))),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("    ← / → or Mouse   ", Style::default().fg(Color::Rgb(80, 200, 255))),
                Span::styled("Move paddle", Style::default().fg(Color::Rgb(140, 140, 140))),
            ]),
            Line::from(vec![
                Span::styled("    Space / Click    ", Style::default().fg(Color::Rgb(80, 200, 255))),
                Span::styled("Launch ball", Style::default().fg(Color::Rgb(140, 140, 140))),
            ]),
            Line::from(vec![
                Span::styled("    R                ", Style::default().fg(Color::Rgb(80, 200, 255))),
                Span::styled("Restart", Style::default().fg(Color::Rgb(140, 140, 140))),
            ]),
            Line::from(vec![
                Span::styled("    P                ", Style::default().fg(Color::Rgb(80, 200, 255))),
                Span::styled("Pause", Style::default().fg(Color::Rgb(140, 140, 140))),
            ]),
        ],
        1 => vec![ // 1024
            Line::from(""),
            Line::from(vec![
                Span::styled("  🔢 1024", Style::default().fg(Color::Rgb(251, 191, 36)).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::styled("  Merge your way to the 1024 tile!", Style::default().fg(Color::Rgb(100, 100, 120))),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("    ↑ ↓ ← →         ", Style::default().fg(Color::Rgb(80, 200, 255))),
                Span::styled("Slide tiles", Style::default().fg(Color::Rgb(140, 140, 140))),
            ]),
            Line::from(vec![
                Span::styled("    Mouse swipe      ", Style::default().fg(Color::Rgb(80, 200, 255))),
                Span::styled("Slide tiles", Style::default().fg(Color::Rgb(140, 140, 140))),
            ]),
            Line::from(vec![
                Span::styled("    R                ", Style::default().fg(Color::Rgb(80, 200, 255))),
                Span::styled("Restart", Style::default().fg(Color::Rgb(140, 140, 140))),
            ]),
            Line::from(vec![
                Span::styled("    P                ", Style::default().fg(Color::Rgb(80, 200, 255))),
                Span::styled("Pause", Style::default().fg(Color::Rgb(140, 140, 140))),
            ]),
        ],
        2 => vec![ // Snake
            Line::from(""),
            Line::from(vec![
                Span::styled("  🐍 Snake", Style::default().fg(Color::Rgb(80, 220, 80)).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::styled("  Grab the food, dodge the walls!", Style::default().fg(Color::Rgb(100, 100, 120))),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("    ↑ ↓ ← →         ", Style::default().fg(Color::Rgb(80, 200, 255))),
                Span::styled("Steer", Style::default().fg(Color::Rgb(140, 140, 140))),
            ]),
            Line::from(vec![
                Span::styled("    Mouse swipe      ", Style::default().fg(Color::Rgb(80, 200, 255))),
                Span::styled("Steer", Style::default().fg(Color::Rgb(140, 140, 140))),
            ]),
            Line::from(vec![
                Span::styled("    ★                ", Style::default().fg(Color::Rgb(255, 220, 80))),
                Span::styled("Bonus food, grab it fast!", Style::default().fg(Color::Rgb(140, 140, 140))),
            ]),
            Line::from(vec![
                Span::styled("    R                ", Style::default().fg(Color::Rgb(80, 200, 255))),
                Span::styled("Restart", Style::default().fg(Color::Rgb(140, 140, 140))),
            ]),
            Line::from(vec![
                Span::styled("    P                ", Style::default().fg(Color::Rgb(80, 200, 255))),
                Span::styled("Pause", Style::default().fg(Color::Rgb(140, 140, 140))),
            ]),
        ],
        _ => vec![],
    }
}

pub fn render_home(frame: &mut Frame, area: Rect, app: &App) {
    let selected_game = app.selected_game;
    let best_scores = [
        app.brickrush.best_score(),
        app.puzzle.best_score(),
        app.snake.best_score(),
    ];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Banner
            Constraint::Length(2),  // Subtitle
            Constraint::Length(9),  // Game tiles
            Constraint::Min(10),   // Controls area
            Constraint::Length(2),  // Footer
        ])
        .split(area);

    // Banner
    let banner = Paragraph::new(BANNER)
        .style(Style::default().fg(Color::Rgb(80, 200, 255)))
        .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[0]);

    // Subtitle
    let subtitle = Paragraph::new(Line::from(vec![
        Span::styled(
            "  ⚡ Three Games, One Terminal ⚡  ",
            Style::default()
                .fg(Color::Rgb(255, 220, 80))
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[1]);

    // Games section title block
    let games_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(" 🎮 Games — ←→ Select, Enter to Play ")
        .title_style(Style::default().fg(Color::Rgb(200, 120, 255)).add_modifier(Modifier::BOLD));
    let games_inner = games_block.inner(chunks[2]);
    frame.render_widget(games_block, chunks[2]);

    // One row of three tiles
    let tile_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(games_inner);

    for i in 0..3 {
        render_game_tile(frame, tile_cols[i], &GAME_TILES[i], best_scores[i], selected_game == i);
    }

    // Controls area: split horizontally - navigation left, game controls right
    let ctrl_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(60),
        ])
        .split(chunks[3]);

    // Navigation Control (left)
    let controls = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  🔧 Navigation", Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("    Tab / Shift+Tab  ", Style::default().fg(Color::Rgb(80, 200, 255))),
            Span::styled("Switch tabs", Style::default().fg(Color::Rgb(140, 140, 140))),
        ]),
        Line::from(vec![
            Span::styled("    1-3              ", Style::default().fg(Color::Rgb(80, 200, 255))),
            Span::styled("Launch game", Style::default().fg(Color::Rgb(140, 140, 140))),
        ]),
        Line::from(vec![
            Span::styled("    ← / →            ", Style::default().fg(Color::Rgb(80, 200, 255))),
            Span::styled("Select game", Style::default().fg(Color::Rgb(140, 140, 140))),
        ]),
        Line::from(vec![
            Span::styled("    Enter            ", Style::default().fg(Color::Rgb(80, 200, 255))),
            Span::styled("Play selected", Style::default().fg(Color::Rgb(140, 140, 140))),
        ]),
        Line::from(vec![
            Span::styled("    Esc              ", Style::default().fg(Color::Rgb(80, 200, 255))),
            Span::styled("Return to Home", Style::default().fg(Color::Rgb(140, 140, 140))),
        ]),
        Line::from(vec![
            Span::styled("    q / Ctrl+C       ", Style::default().fg(Color::Rgb(80, 200, 255))),
            Span::styled("Quit", Style::default().fg(Color::Rgb(140, 140, 140))),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  🎮 Common", Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("    R                ", Style::default().fg(Color::Rgb(80, 200, 255))),
            Span::styled("Restart game", Style::default().fg(Color::Rgb(140, 140, 140))),
        ]),
        Line::from(vec![
            Span::styled("    P                ", Style::default().fg(Color::Rgb(80, 200, 255))),
            Span::styled("Pause / Unpause", Style::default().fg(Color::Rgb(140, 140, 140))),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
            .title(" ⌨ Navigation Control ")
            .title_style(Style::default().fg(Color::Rgb(200, 120, 255)).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(controls, ctrl_cols[0]);

    // Game Control (right) - shows controls for the selected game
    let game_ctrl_lines = game_controls(selected_game);
    let game_ctrl = Paragraph::new(game_ctrl_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Rgb(50, 100, 140)))
                .title(format!(" 🎮 {} Control ", GAME_TILES[selected_game].name))
                .title_style(Style::default().fg(GAME_TILES[selected_game].color).add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(game_ctrl, ctrl_cols[1]);

    // Footer
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("  🦀 ", Style::default().fg(Color::Rgb(255, 100, 50))),
        Span::styled("v0.3.0", Style::default().fg(Color::Rgb(80, 80, 100))),
        Span::styled("  │  ", Style::default().fg(Color::Rgb(40, 40, 60))),
        Span::styled("Best scores live next to the binary", Style::default().fg(Color::Rgb(100, 100, 130))),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[4]);
}
