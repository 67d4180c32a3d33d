//! Plain-text renderer: grid table, cube diagram and turn messages.

use crossterm::style::Stylize;
use std::io::Write;
use strictly_box_puzzle::{
    CellSnapshot, Face, FaceSnapshot, GRID_SIZE, GameEvent, GameSummary, GridSnapshot,
    InteractionError, Letter, Renderer,
};
use tracing::instrument;

const CUBE_INDENT: &str = "      ";

/// Writes everything the player sees to `output`.
#[derive(Debug)]
pub struct ConsoleRenderer<W> {
    output: W,
    color: bool,
    target: Option<Letter>,
    turn: Option<u8>,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Creates a renderer; `color` enables ANSI styling.
    pub fn new(output: W, color: bool) -> Self {
        Self {
            output,
            color,
            target: None,
            turn: None,
        }
    }

    /// Consumes the renderer, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn cell(&self, cell: &CellSnapshot) -> String {
        let text = format!("{}-{}-{}", cell.kind_marker(), cell.top(), cell.status_marker());
        if self.color && Some(cell.top()) == self.target {
            text.green().bold().to_string()
        } else {
            text
        }
    }

    fn alert(&self, text: String) -> String {
        if self.color { text.red().to_string() } else { text }
    }

    fn turn_label(&self) -> String {
        self.turn.map(|n| n.to_string()).unwrap_or_default()
    }
}

/// Renders the grid as a table with `C1..C8` and `R1..R8` labels.
pub fn grid_table(grid: &GridSnapshot, mut cell: impl FnMut(&CellSnapshot) -> String) -> String {
    let mut out = String::from("     ");
    for c in 1..=GRID_SIZE {
        out.push_str(&format!("   C{}    ", c));
    }
    out.push('\n');

    let separator = format!("   {}\n", "-".repeat(9 * GRID_SIZE));
    out.push_str(&separator);
    for (r, row) in grid.rows().iter().enumerate() {
        out.push_str(&format!("R{} ", r + 1));
        for snapshot in row {
            out.push_str(&format!("| {} ", cell(snapshot)));
        }
        out.push_str("|\n");
    }
    out.push_str(&separator);
    out
}

/// Unfolded cube: back above top, left-top-right across, then front and bottom.
pub fn cube_diagram(faces: &FaceSnapshot) -> String {
    let single = |face: Face| {
        format!(
            "{i}-----\n{i}| {} |\n{i}-----\n",
            faces.get(face),
            i = CUBE_INDENT
        )
    };
    let mut out = format!("Box Surfaces for {}:\n", faces.location());
    out.push_str(&single(Face::Back));
    out.push_str("----- ----- -----\n");
    out.push_str(&format!(
        "| {} | | {} | | {} |\n",
        faces.get(Face::Left),
        faces.get(Face::Top),
        faces.get(Face::Right)
    ));
    out.push_str("----- ----- -----\n");
    out.push_str(&single(Face::Front));
    out.push_str(&single(Face::Bottom));
    out
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    #[instrument(skip_all)]
    fn grid(&mut self, grid: &GridSnapshot) -> Result<(), InteractionError> {
        let heading = match self.turn {
            None => "The initial state of the box grid:",
            Some(_) => "The new state of the box grid:",
        };
        let table = grid_table(grid, |cell| self.cell(cell));
        writeln!(self.output, "{}\n{}", heading, table)?;
        Ok(())
    }

    #[instrument(skip_all)]
    fn faces(&mut self, faces: &FaceSnapshot) -> Result<(), InteractionError> {
        write!(self.output, "{}", cube_diagram(faces))?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn event(&mut self, event: &GameEvent) -> Result<(), InteractionError> {
        let text = match event {
            GameEvent::Welcome { target } => {
                self.target = Some(*target);
                format!(
                    "Welcome to Box Top Side Matching Puzzle App. An 8x8 box grid is being generated.\n\
                     Your goal is to maximize the letter \"{}\" on the top sides of the boxes.",
                    target
                )
            }
            GameEvent::TurnStarted { number, remaining } => {
                self.turn = Some(*number);
                format!("\n===== > TURN {}: ({} left after this one)", number, remaining)
            }
            GameEvent::StageStarted(stage) => {
                format!("---> TURN {} - {}:", self.turn_label(), stage)
            }
            GameEvent::InvalidLocation(e) => {
                format!("Invalid input format. Please try again (e.g. R1-C1). {}", e)
            }
            GameEvent::Rejected(e) => format!("INCORRECT INPUT: {}.", e),
            GameEvent::Rolled { action, stopped_by, .. } => {
                let mut text = if action.location.is_corner() {
                    format!(
                        "The chosen box and any box on its path have been rolled {}.",
                        action.direction
                    )
                } else {
                    format!("The chosen box is automatically rolled {}.", action.direction)
                };
                if let Some(blocker) = stopped_by {
                    text.push_str(&format!("\nDomino effect stopped by FixedBox at {}", blocker));
                }
                text
            }
            GameEvent::TurnWasted(e) => self.alert(format!("TURN WASTED: {}", e)),
            GameEvent::ToolFound { location, tool } => format!(
                "Box at {} contained a SpecialTool: {} ({})",
                location,
                tool,
                tool.description()
            ),
            GameEvent::ToolApplied {
                tool,
                target,
                touched,
            } => format!("{} used on {}: {} box(es) affected.", tool, target, touched.len()),
            GameEvent::ToolFailed { tool, error } => {
                self.alert(format!("TURN WASTED: {} had no effect. {}", tool, error))
            }
        };
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    #[instrument(skip_all)]
    fn score(&mut self, summary: &GameSummary) -> Result<(), InteractionError> {
        writeln!(
            self.output,
            "\nTHE TOTAL NUMBER OF TARGET LETTER \"{}\"\nIN THE BOX GRID --> {}\nSUCCESS",
            summary.target(),
            summary.score()
        )?;
        self.output.flush()?;
        Ok(())
    }
}
