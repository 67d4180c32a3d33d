//! Plays sessions through the console prompter and renderer.

use std::io::Cursor;
use strictly_box_puzzle::{
    Direction, Driver, Faces, GameEvent, GameSetup, Grid, Letter, Location, PuzzleBox,
    Renderer, RollAction, Tool,
};
use strictly_boxes::{ConsolePrompter, ConsoleRenderer, cube_diagram, grid_table};

/// Top A, Bottom B, Front C, Back D, Left E, Right F.
fn faces() -> Faces {
    Faces::new([Letter::A, Letter::B, Letter::C, Letter::D, Letter::E, Letter::F])
}

fn plain_grid() -> Grid {
    Grid::from_fn(|_| PuzzleBox::regular(faces(), None))
}

#[test]
fn test_full_console_session() {
    let input = [
        // Turn 1: no view, corner roll to the right.
        "2", "R1-C1", "1", "R1-C3",
        // Turn 2: view a box, roll row 2, bad and unmoved answers before a valid one.
        "1", "R1-C1", "R2-C1", "x", "R3-C3", "R2-C2",
        // Turns 3 to 5: roll rows 3 to 5 from the left edge.
        "2", "R3-C1", "R3-C1",
        "2", "R4-C1", "r4-c1",
        "2", "5-1", "5-1",
    ]
    .join("\n")
        + "\n";

    let prompter = ConsolePrompter::new(Cursor::new(input.into_bytes()), Vec::new());
    let renderer = ConsoleRenderer::new(Vec::new(), false);
    let mut driver = Driver::new(prompter, renderer);

    let finished = driver
        .play(GameSetup::new(plain_grid(), Letter::E))
        .expect("input covers the session");
    // Rolling right brings Left (E) to the top of five full rows.
    assert_eq!(finished.score(), 40);

    let (prompter, renderer) = driver.into_parts();
    let prompts = String::from_utf8(prompter.into_output()).expect("utf8");
    let screen = String::from_utf8(renderer.into_output()).expect("utf8");

    assert!(
        prompts.contains("The chosen box can be rolled to either [1] right or [2] downwards: ")
    );
    assert!(prompts.contains("Do you want to view all surfaces of a box? [1] Yes or [2] No? "));

    assert!(screen.contains("Your goal is to maximize the letter \"E\""));
    assert!(screen.contains("The initial state of the box grid:"));
    assert!(screen.contains("===== > TURN 5:"));
    assert!(screen.contains("---> TURN 2 - SECOND STAGE:"));
    assert!(screen.contains("Box Surfaces for R1-C1:"));
    assert!(screen.contains("Invalid input format. Please try again (e.g. R1-C1)."));
    assert!(screen.contains(
        "INCORRECT INPUT: The box at R3-C3 was not rolled during the first stage."
    ));
    assert!(screen.contains("TURN WASTED: The box at R1-C3 is empty"));
    assert!(screen.contains("IN THE BOX GRID --> 40"));
    assert!(screen.trim_end().ends_with("SUCCESS"));
}

#[test]
fn test_closed_stdin_aborts_session() {
    let prompter = ConsolePrompter::new(Cursor::new(b"2\nR4-C4\n".to_vec()), Vec::new());
    let renderer = ConsoleRenderer::new(Vec::new(), false);
    let mut driver = Driver::new(prompter, renderer);

    let err = driver
        .play(GameSetup::new(plain_grid(), Letter::A))
        .expect_err("input ends mid-turn");
    assert!(err.to_string().contains("Input closed"));
}

#[test]
fn test_grid_table_layout() {
    let mut grid = plain_grid();
    let holder = PuzzleBox::regular(faces(), Some(Tool::BoxFixer));
    grid.replace(Location::new(0, 1).unwrap(), holder);
    grid.replace(Location::new(7, 7).unwrap(), PuzzleBox::fixed(faces()));
    let table = grid_table(&grid.snapshot(), |cell| {
        format!("{}-{}-{}", cell.kind_marker(), cell.top(), cell.status_marker())
    });

    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[0].contains("   C1    "));
    assert!(lines[0].trim_end().ends_with("C8"));
    // Boxes made without a tool are already empty.
    assert!(lines[2].starts_with("R1 | R-A-O | R-A-M | R-A-O "));
    assert!(lines[9].ends_with("| X-A-O |"));
}

#[test]
fn test_cube_diagram_layout() {
    let grid = plain_grid();
    let location = Location::new(1, 3).unwrap();
    let diagram = cube_diagram(&grid.faces_at(location));
    let expected = "\
Box Surfaces for R2-C4:
      -----
      | D |
      -----
----- ----- -----
| E | | A | | F |
----- ----- -----
      -----
      | C |
      -----
      -----
      | B |
      -----
";
    assert_eq!(diagram, expected);
}

#[test]
fn test_roll_message_depends_on_corner() {
    let mut renderer = ConsoleRenderer::new(Vec::new(), false);
    let corner = RollAction::new(Location::new(0, 0).unwrap(), Direction::Right);
    let side = RollAction::new(Location::new(3, 0).unwrap(), Direction::Right);

    for action in [corner, side] {
        // A single moved box must not change the wording.
        let event = GameEvent::Rolled {
            action,
            moved: vec![action.location],
            stopped_by: None,
        };
        renderer.event(&event).expect("vec output");
    }

    let screen = String::from_utf8(renderer.into_output()).expect("utf8");
    let lines: Vec<&str> = screen.lines().collect();
    assert_eq!(
        lines,
        [
            "The chosen box and any box on its path have been rolled right.",
            "The chosen box is automatically rolled right.",
        ]
    );
}
