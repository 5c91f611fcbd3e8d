//! Shared test helpers: a scripted attempt-randomness source and
//! pinned rule tables.

#![allow(dead_code)]

use std::collections::VecDeque;

use discolored_squares::color::SquareColor;
use discolored_squares::grid::{Cell, CELL_COUNT};
use discolored_squares::rng::AttemptRng;
use discolored_squares::rules::{RuleSet, STAGE_COUNT};
use discolored_squares::transform::Instruction;

/// An [`AttemptRng`] that replays scripted decisions.
///
/// Shuffles pop a "front order" (indices into the slice being shuffled,
/// brought to the front; the rest keep their relative order) or act as
/// the identity when the queue is empty. Picks pop a queued value or
/// fall back to the range minimum.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    pub cell_orders: VecDeque<Vec<usize>>,
    pub color_orders: VecDeque<Vec<usize>>,
    pub picks: VecDeque<usize>,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cell_order(mut self, front: Vec<usize>) -> Self {
        self.cell_orders.push_back(front);
        self
    }

    pub fn with_picks(mut self, picks: &[usize]) -> Self {
        self.picks.extend(picks.iter().copied());
        self
    }
}

fn bring_to_front<T: Copy>(slice: &mut [T], front: &[usize]) {
    let orig = slice.to_vec();
    let mut used = vec![false; orig.len()];
    let mut out = Vec::with_capacity(orig.len());
    for &ix in front {
        out.push(orig[ix]);
        used[ix] = true;
    }
    for (ix, &v) in orig.iter().enumerate() {
        if !used[ix] {
            out.push(v);
        }
    }
    slice.copy_from_slice(&out);
}

impl AttemptRng for ScriptedRng {
    fn shuffle_cells(&mut self, cells: &mut [Cell]) {
        if let Some(front) = self.cell_orders.pop_front() {
            bring_to_front(cells, &front);
        }
    }

    fn shuffle_colors(&mut self, colors: &mut [SquareColor]) {
        if let Some(front) = self.color_orders.pop_front() {
            bring_to_front(colors, &front);
        }
    }

    fn pick(&mut self, lo: usize, _hi: usize) -> usize {
        self.picks.pop_front().unwrap_or(lo)
    }
}

/// Ranks that order every stage's cells by plain index.
pub fn identity_ranks() -> [[u8; CELL_COUNT]; STAGE_COUNT] {
    [std::array::from_fn(|i| i as u8); STAGE_COUNT]
}

/// Rules with `Instruction::ALL` bound in order and identity ranks.
pub fn identity_rules() -> RuleSet {
    RuleSet::from_tables(Instruction::ALL, identity_ranks()).unwrap()
}

/// Identity rules, except `instruction` is bound at `cell` (swapped with
/// wherever it sat in `Instruction::ALL`, preserving the bijection).
pub fn rules_with_instruction_at(cell: Cell, instruction: Instruction) -> RuleSet {
    let mut table = Instruction::ALL;
    let from = table
        .iter()
        .position(|&i| i == instruction)
        .expect("instruction is in ALL");
    table.swap(cell.index(), from);
    RuleSet::from_tables(table, identity_ranks()).unwrap()
}

pub fn cell(ix: usize) -> Cell {
    Cell::new(ix).expect("test cell index in range")
}
