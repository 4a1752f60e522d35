use crossterm::{
    cursor,
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{self, Stylize},
    terminal,
};
use gameoflive::{Canvas, Config, Pos2, SurfaceProvider, World};
use std::{io, time::Duration};
use tracing::warn;

const ALIVE: char = '█';
const GRID: char = '·';

pub enum ConsoleCommand {
    Exit,
    TogglePlay,
    ToggleGrid,
    ToggleNumbers,
    Faster,
    Slower,
    Clear,
    Click(Pos2),
    Resize { cols: u16, rows: u16 },
    Visible(bool),
    Handled,
}

/// The terminal as a drawing surface
///
/// One character is one pixel. The last row holds the status footer.
pub struct ConsoleSurface {
    report: String,
    draw_grid: bool,
    draw_numbers: bool,
    cell_size: u32,
}
impl ConsoleSurface {
    pub fn new(config: &Config) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        let mut console = Self {
            report: String::new(),
            draw_grid: false,
            draw_numbers: false,
            cell_size: 1,
        };
        console.apply(config);
        Ok(console)
    }

    pub fn apply(&mut self, config: &Config) {
        self.draw_grid = config.draw_grid;
        self.draw_numbers = config.draw_numbers;
        self.cell_size = config.cell_size.max(1);
    }

    /// Pixel area available to the world, the footer row excluded
    pub fn world_size() -> io::Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok((cols, rows.saturating_sub(1)))
    }

    fn draw_cells(&self, out: &mut impl io::Write, world: &World, area: Pos2) -> io::Result<()> {
        let size = self.cell_size as i32;
        for y in 0..world.rows() as i32 {
            for x in 0..world.cols() as i32 {
                let top_left = Pos2::new(x, y).cell_to_pixel(self.cell_size);
                if !world.is_alive(x, y) {
                    if self.draw_grid {
                        Self::put(out, area, top_left, GRID.stylize())?;
                    }
                    continue;
                }
                for dy in 0..size {
                    for dx in 0..size {
                        Self::put(out, area, top_left + Pos2::new(dx, dy), ALIVE.stylize())?;
                    }
                }
            }
        }
        Ok(())
    }

    fn draw_counts(&self, out: &mut impl io::Write, world: &World, area: Pos2) -> io::Result<()> {
        let size = self.cell_size as i32;
        for y in 0..world.rows() as i32 {
            for x in 0..world.cols() as i32 {
                let count = world.living_neighbours(x, y);
                let digit = char::from_digit(count as u32, 10).unwrap_or('?');
                let content = if world.is_alive(x, y) {
                    digit.negative()
                } else {
                    digit.stylize()
                };
                // bottom-left pixel of the cell
                let at = Pos2::new(x, y).cell_to_pixel(self.cell_size) + Pos2::new(0, size - 1);
                Self::put(out, area, at, content)?;
            }
        }
        Ok(())
    }

    fn put(
        out: &mut impl io::Write,
        area: Pos2,
        at: Pos2,
        content: style::StyledContent<char>,
    ) -> io::Result<()> {
        if at.x < 0 || at.y < 0 || at.x >= area.x || at.y >= area.y {
            return Ok(());
        }
        queue!(
            out,
            cursor::MoveTo(at.x as u16, at.y as u16),
            style::PrintStyledContent(content)
        )
    }

    pub fn poll_events(&mut self, timeout: Duration) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(timeout)? {
            return Ok(None);
        }

        let command = match event::read()? {
            // CTRL+C
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => ConsoleCommand::Exit,
            event::Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => ConsoleCommand::Exit,
                KeyCode::Char(' ') => ConsoleCommand::TogglePlay,
                KeyCode::Char('g') => ConsoleCommand::ToggleGrid,
                KeyCode::Char('n') => ConsoleCommand::ToggleNumbers,
                KeyCode::Char('+') => ConsoleCommand::Faster,
                KeyCode::Char('-') => ConsoleCommand::Slower,
                KeyCode::Char('c') => ConsoleCommand::Clear,
                _ => ConsoleCommand::Handled,
            },
            // a touch is reported once the button is released
            event::Event::Mouse(MouseEvent {
                kind: MouseEventKind::Up(MouseButton::Left),
                column,
                row,
                ..
            }) => ConsoleCommand::Click(Pos2::new(column as i32, row as i32)),
            event::Event::Resize(cols, rows) => ConsoleCommand::Resize {
                cols,
                rows: rows.saturating_sub(1),
            },
            event::Event::FocusGained => ConsoleCommand::Visible(true),
            event::Event::FocusLost => ConsoleCommand::Visible(false),
            _ => ConsoleCommand::Handled,
        };
        Ok(Some(command))
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}

impl Canvas for ConsoleSurface {
    fn draw(&mut self, world: &World) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let area = Pos2::new(cols as i32, rows.saturating_sub(1) as i32);
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

        self.draw_cells(&mut stdout, world, area)?;
        if self.draw_numbers {
            self.draw_counts(&mut stdout, world, area)?;
        }

        // write footer
        queue!(
            stdout,
            cursor::MoveTo(0, rows.saturating_sub(1)),
            style::Print(&self.report)
        )?;

        io::Write::flush(&mut stdout)
    }
}

impl SurfaceProvider for ConsoleSurface {
    fn lock_canvas(&mut self) -> Option<&mut dyn Canvas> {
        match terminal::size() {
            // no room for the world above the footer
            Ok((_, rows)) if rows < 2 => None,
            Ok(_) => Some(self as &mut dyn Canvas),
            Err(err) => {
                warn!(%err, "terminal size unavailable");
                None
            }
        }
    }
}

impl Drop for ConsoleSurface {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            warn!(%err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(
            io::stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        ) {
            warn!(%err, "failed to restore terminal");
        }
    }
}
