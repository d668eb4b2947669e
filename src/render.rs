use std::{
    io::{self, Write},
    ops::RangeInclusive,
    thread,
    time::Duration,
};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Color, PrintStyledContent, ResetColor, StyledContent, Stylize},
    terminal::{Clear, ClearType},
};
use eighttile::{Board, Solution, SIZE, SPACE};

/// The animation draws onto a square of this many cells.
pub const CANVAS: usize = 21;

const PAD: u8 = b'-';
const BORDER: u8 = b'_';

const BOARD_CELLS: RangeInclusive<usize> = 9..=11;
const BORDER_ROWS: RangeInclusive<usize> = 8..=12;
const BORDER_COLS: RangeInclusive<usize> = 7..=13;

pub struct Playback {
    pub delay: Duration,
    /// How long the last frame stays up once the move count is shown.
    pub hold: Duration,
}

/// The board in the middle of the canvas, framed by a border and padded out
/// to the edges.
pub fn canvas(board: &Board) -> [[u8; CANVAS]; CANVAS] {
    let mut out = [[PAD; CANVAS]; CANVAS];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            if BOARD_CELLS.contains(&i) && BOARD_CELLS.contains(&j) {
                *cell = board[(i - BOARD_CELLS.start(), j - BOARD_CELLS.start())];
            } else if BORDER_ROWS.contains(&i) && BORDER_COLS.contains(&j) {
                *cell = BORDER;
            }
        }
    }
    out
}

/// The board with a two-cell border, for output that is not a terminal.
pub fn frame(board: &Board) -> String {
    let edge = (BORDER as char).to_string().repeat(SIZE + 4);
    let mut out = format!("{}\n{}\n", edge, edge);
    for row in board.rows() {
        out.push_str("__");
        out.extend(row.iter().map(|&c| c as char));
        out.push_str("__\n");
    }
    out.push_str(&format!("{}\n{}", edge, edge));
    out
}

fn styled(c: u8) -> StyledContent<char> {
    let ch = c as char;
    match c {
        SPACE => ch.with(Color::Blue).on(Color::Blue),
        PAD => ch.with(Color::Black).on(Color::Black),
        BORDER => ch.with(Color::Red).on(Color::Red),
        _ => ch.with(Color::Red).on(Color::White).bold(),
    }
}

fn draw(out: &mut impl Write, board: &Board) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for (i, row) in canvas(board).iter().enumerate() {
        queue!(out, MoveTo(0, i as u16))?;
        for &c in row {
            queue!(out, PrintStyledContent(styled(c)))?;
        }
    }
    queue!(out, ResetColor)?;
    out.flush()
}

/// Redraws every board of the solution in place.
pub fn animate(out: &mut impl Write, solution: &Solution, playback: &Playback) -> io::Result<()> {
    queue!(out, Hide)?;
    for board in &solution.boards {
        draw(out, board)?;
        thread::sleep(playback.delay);
    }

    queue!(out, MoveTo(0, CANVAS as u16), Show)?;
    writeln!(out)?;
    writeln!(out, "Number of moves required: {}", solution.move_count)?;
    out.flush()?;
    thread::sleep(playback.hold);
    Ok(())
}

/// Prints the boards one after another, each labelled with the slide that
/// produced it.
pub fn print(out: &mut impl Write, solution: &Solution, playback: &Playback) -> io::Result<()> {
    let directions = solution.directions();
    for (ix, board) in solution.boards.iter().enumerate() {
        if ix > 0 {
            thread::sleep(playback.delay);
            writeln!(out)?;
            writeln!(out, "{}", directions[ix - 1])?;
        }
        writeln!(out, "{}", frame(board))?;
    }

    writeln!(out)?;
    writeln!(out, "Number of moves required: {}", solution.move_count)
}
