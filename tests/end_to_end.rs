mod support;

use discolored_squares::color::SquareColor;
use discolored_squares::engine::{Phase, PressOutcome, PuzzleEngine};
use discolored_squares::transform::Instruction;

use support::{cell, rules_with_instruction_at, ScriptedRng};

// The worked scenario: the rules bind Rotate180 to cell 5 (B2), the
// player's first setup press lands there, and stage 1 activates cell 6
// (C2). With no collisions the required press resolving C2 is B3
// (cell 9), since a half turn sends col 2 / row 1 to col 1 / row 2.
#[test]
fn half_turn_bound_to_first_press_resolves_c2_to_b3() {
    let rules = rules_with_instruction_at(cell(5), Instruction::Rotate180);

    let rng = ScriptedRng::new()
        // Initial placements: first live hue (Red) on cell 5.
        .with_cell_order(vec![5, 0, 1, 2])
        // Stage 1 pool order: actives will be cells 6, 0, 1.
        .with_cell_order(vec![6, 0, 1])
        // Stage 1 take.
        .with_picks(&[3]);
    let mut engine = PuzzleEngine::new(rules, rng, 1);

    assert_eq!(engine.color_at(cell(5)), SquareColor::Red);
    for ix in [5, 0, 1, 2] {
        assert_eq!(engine.press(cell(ix)), PressOutcome::Accepted);
    }
    assert_eq!(engine.remembered_cells()[0], cell(5));
    assert_eq!(engine.phase(), Phase::Stage(1));

    // Active cells 6, 0, 1 in rank order (identity ranks) are 0, 1, 6;
    // their half-turn chains land on 15, 14, and 9, none colliding.
    for ix in [0, 1, 6] {
        assert_eq!(engine.color_at(cell(ix)), SquareColor::Red);
    }
    assert_eq!(engine.expected_presses(), &[cell(15), cell(14), cell(9)]);

    // The chain from the active cell 6 is completed by pressing 9.
    assert_eq!(engine.press(cell(15)), PressOutcome::Accepted);
    assert_eq!(engine.press(cell(14)), PressOutcome::Accepted);
    assert_eq!(engine.press(cell(9)), PressOutcome::Accepted);
    assert_eq!(engine.phase(), Phase::Stage(2));
}

// An active cell that is already the target of an earlier chain must be
// skipped without adding a duplicate required press.
#[test]
fn actives_inside_an_earlier_chain_are_skipped() {
    let rules = rules_with_instruction_at(cell(5), Instruction::MoveRight);

    let rng = ScriptedRng::new()
        .with_cell_order(vec![5, 0, 1, 2])
        // Adjacent actives 0 and 1, so the chain from 0 targets 1.
        .with_cell_order(vec![0, 1, 4])
        .with_picks(&[3]);
    let mut engine = PuzzleEngine::new(rules, rng, 1);
    for ix in [5, 0, 1, 2] {
        engine.press(cell(ix));
    }

    // Chain from 0 lands on 1. Active 1 is now already required, so it
    // is skipped entirely. Chain from 4 lands on 5.
    assert_eq!(engine.expected_presses(), &[cell(1), cell(5)]);
}
