use std::io::{self, stdout};
use std::time::Instant;

use ludo::{
    base_slots, entry_cell, is_safe_square, Game, Phase, Player, BOARD_CELLS, TRACK,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
    widgets::*,
};

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let mut app = App {
        game: Game::new(),
        rng: StdRng::seed_from_u64(rand::random()),
    };

    let mut should_quit = false;
    while !should_quit {
        app.game.tick(Instant::now());
        terminal.draw(|frame| app.ui(frame))?;
        should_quit = app.handle_events()?;
    }

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

struct App {
    game: Game,
    rng: StdRng,
}

// Two terminal columns per board cell, plus the border.
const CELL_WIDTH: u16 = 2;
const BOARD_WIDGET_WIDTH: u16 = CELL_WIDTH * BOARD_CELLS as u16 + 2;
const BOARD_WIDGET_HEIGHT: u16 = BOARD_CELLS as u16 + 2;

const DIE_FACES: [&str; 6] = ["⚀", "⚁", "⚂", "⚃", "⚄", "⚅"];

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Green => Color::Green,
        Player::Blue => Color::Blue,
        Player::Yellow => Color::Yellow,
    }
}

struct BoardWidget<'a> {
    game: &'a Game,
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(BOARD_WIDGET_WIDTH),
                Constraint::Min(0),
            ])
            .split(area)[1];
        let block = Block::new()
            .border_type(BorderType::Rounded)
            .borders(Borders::all());
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < CELL_WIDTH * BOARD_CELLS as u16 || inner.height < BOARD_CELLS as u16 {
            return;
        }

        for cell in TRACK {
            let symbol = if is_safe_square(cell) { "✦" } else { "·" };
            set_cell(buf, inner, cell.x, cell.y, symbol, Style::new().fg(Color::DarkGray));
        }
        for player in Player::ALL {
            let style = Style::new().fg(player_color(player));
            for slot in base_slots(player) {
                set_cell(buf, inner, slot.x, slot.y, "○", style);
            }
            set_cell(buf, inner, entry_cell(player).x, entry_cell(player).y, "✦", style);
        }
        for player in Player::ALL {
            for token in self.game.tokens(player) {
                let mut style = Style::new().fg(player_color(player));
                if token.home {
                    style = Style::new().fg(Color::Gray);
                }
                if token.selected {
                    style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                }
                set_cell(buf, inner, token.cell.x, token.cell.y, "●", style);
            }
        }
    }
}

fn set_cell(buf: &mut Buffer, inner: Rect, x: i8, y: i8, symbol: &str, style: Style) {
    buf.set_string(
        inner.x + x as u16 * CELL_WIDTH,
        inner.y + y as u16,
        symbol,
        style,
    );
}

impl App {
    fn ui(&self, frame: &mut Frame) {
        let main_layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(BOARD_WIDGET_HEIGHT),
                Constraint::Length(4),
                Constraint::Min(0),
            ],
        )
        .split(frame.size());
        frame.render_widget(BoardWidget { game: &self.game }, main_layout[0]);
        frame.render_widget(self.status(), main_layout[1]);
    }

    fn status(&self) -> Paragraph<'_> {
        let game = &self.game;
        let turn_style = Style::new().fg(player_color(game.current_player()));
        let first_line = match game.winner() {
            Some(winner) => Line::styled(
                format!("{} wins!", winner),
                Style::new().fg(player_color(winner)).bold(),
            ),
            None => Line::styled(format!("{}'s turn", game.current_player()), turn_style),
        };
        let die = DIE_FACES[game.dice_value() as usize - 1];
        let prompt = match (game.winner(), game.phase()) {
            (Some(_), _) => "q: quit",
            (None, Phase::AwaitingRoll) => "r: roll  q: quit",
            (None, Phase::RollShown { .. }) => "q: quit",
            (None, Phase::AwaitingPiece) => "1-4: move a token  q: quit",
        };
        let lines = vec![
            first_line,
            Line::raw(format!("Dice: {}  {}", die, game.message())),
            Line::raw(prompt),
        ];
        Paragraph::new(lines).centered()
    }

    fn handle_events(&mut self) -> io::Result<bool> {
        if event::poll(std::time::Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => return Ok(true),
                        KeyCode::Char('r') => {
                            self.game.request_roll(&mut self.rng, Instant::now());
                        }
                        KeyCode::Char(c @ '1'..='4') => {
                            self.game.select_token(c as usize - '1' as usize);
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok(false)
    }
}
