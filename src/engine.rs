//! The puzzle state machine.
//!
//! An attempt runs `Setup` (the player presses the four live hues in an
//! order of their choice), then stages 1..=4 (the engine replays those
//! choices against the seeded rules), then `Solved`. Any invalid press
//! is a strike and restarts the whole attempt with a fresh layout.
//!
//! The engine is synchronous: `press` commits its full transition before
//! returning. Everything the presentation layer needs comes out as
//! [`Event`]s; the reveal animation is the host's business and never
//! gates press acceptance.

use serde::{Deserialize, Serialize};

use crate::color::SquareColor;
use crate::grid::{Cell, CELL_COUNT};
use crate::rng::AttemptRng;
use crate::rules::{RuleSet, STAGE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where the attempt currently stands.
pub enum Phase {
    /// Stage 0: collecting the player's four color choices.
    Setup,
    /// Active play stage, 1..=4.
    Stage(u8),
    /// Terminal; all further presses are ignored.
    Solved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Committed engine outputs, drained by the presentation layer.
pub enum Event {
    /// A single cell's color was committed outside a full repaint.
    CellColor { cell: Cell, color: SquareColor },
    /// Authoritative colors after a stage setup or a repaint request.
    Snapshot { colors: [SquareColor; CELL_COUNT] },
    Strike,
    Solved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a single `press` call did.
pub enum PressOutcome {
    /// Re-press of an already cleared cell (or the puzzle is solved).
    Ignored,
    /// The press was correct; the attempt continues.
    Accepted,
    /// The press was wrong; the attempt was reset to `Setup`.
    Strike,
    /// The press completed the final stage.
    Solved,
}

/// The puzzle engine. Owns the one mutable [`PuzzleState`]-equivalent
/// and is driven exclusively through [`PuzzleEngine::press`].
///
/// `R` is the per-attempt randomness seam; hosts use `rand::thread_rng()`,
/// tests use a scripted source.
pub struct PuzzleEngine<R: AttemptRng> {
    rules: RuleSet,
    rng: R,
    /// Host-supplied identifier, used only in log lines.
    module_id: u32,
    phase: Phase,
    subprogress: usize,
    colors: [SquareColor; CELL_COUNT],
    remembered_colors: [SquareColor; STAGE_COUNT],
    remembered_cells: [Cell; STAGE_COUNT],
    neutral: SquareColor,
    expected: Vec<Cell>,
    events: Vec<Event>,
    colorblind: bool,
}

impl<R: AttemptRng> PuzzleEngine<R> {
    /// Build an engine and run the first `initialize`.
    pub fn new(rules: RuleSet, rng: R, module_id: u32) -> Self {
        let mut engine = Self {
            rules,
            rng,
            module_id,
            phase: Phase::Setup,
            subprogress: 0,
            colors: [SquareColor::Cleared; CELL_COUNT],
            remembered_colors: [SquareColor::Cleared; STAGE_COUNT],
            remembered_cells: [Cell::from_col_row(0, 0); STAGE_COUNT],
            neutral: SquareColor::Red,
            expected: Vec::new(),
            events: Vec::new(),
            colorblind: false,
        };
        engine.initialize();
        engine
    }

    /// Start a fresh attempt: re-randomize the neutral hue, the live
    /// hues and their placements, and repaint the grid.
    pub fn initialize(&mut self) {
        let mut hues = SquareColor::HUES;
        self.rng.shuffle_colors(&mut hues);
        let mut cells: Vec<Cell> = Cell::all().collect();
        self.rng.shuffle_cells(&mut cells);

        // Both arrays are re-populated in press order during Setup.
        for i in 0..STAGE_COUNT {
            self.remembered_colors[i] = hues[i];
            self.remembered_cells[i] = cells[i];
        }
        self.neutral = hues[STAGE_COUNT];
        self.phase = Phase::Setup;
        self.subprogress = 0;
        self.expected.clear();

        self.colors = [self.neutral; CELL_COUNT];
        for i in 0..STAGE_COUNT {
            self.colors[self.remembered_cells[i].index()] = self.remembered_colors[i];
        }

        let placed: Vec<String> = (0..STAGE_COUNT)
            .map(|i| format!("{} at {}", self.remembered_colors[i], self.remembered_cells[i]))
            .collect();
        log::info!(
            "[squares #{}] initial colors: {}",
            self.module_id,
            placed.join(", ")
        );

        self.push_snapshot();
    }

    /// Process one press. Commits the full transition before returning.
    pub fn press(&mut self, cell: Cell) -> PressOutcome {
        match self.phase {
            Phase::Solved => PressOutcome::Ignored,
            Phase::Setup => self.press_setup(cell),
            Phase::Stage(stage) => self.press_stage(stage, cell),
        }
    }

    fn press_setup(&mut self, cell: Cell) -> PressOutcome {
        let color = self.colors[cell.index()];
        if color == SquareColor::Cleared {
            return PressOutcome::Ignored;
        }
        if color == self.neutral {
            log::info!(
                "[squares #{}] setup: {} holds the neutral color. Strike.",
                self.module_id,
                cell
            );
            return self.strike();
        }

        self.remembered_colors[self.subprogress] = color;
        self.remembered_cells[self.subprogress] = cell;
        self.subprogress += 1;
        self.set_color(cell, SquareColor::Cleared);

        if self.subprogress == STAGE_COUNT {
            let order: Vec<String> = (0..STAGE_COUNT)
                .map(|i| format!("{} ({})", self.remembered_cells[i], self.remembered_colors[i]))
                .collect();
            log::info!(
                "[squares #{}] press order: {}",
                self.module_id,
                order.join(", ")
            );
            self.set_stage(1)
        } else {
            PressOutcome::Accepted
        }
    }

    fn press_stage(&mut self, stage: u8, cell: Cell) -> PressOutcome {
        if self.expected[self.subprogress] != cell {
            log::info!(
                "[squares #{}] stage {}: expected {}, got {}. Strike.",
                self.module_id,
                stage,
                self.expected[self.subprogress],
                cell
            );
            return self.strike();
        }

        self.subprogress += 1;
        self.set_color(cell, SquareColor::Cleared);
        log::debug!("[squares #{}] {} was correct", self.module_id, cell);

        if self.subprogress == self.expected.len() {
            self.set_stage(stage + 1)
        } else {
            PressOutcome::Accepted
        }
    }

    /// Both failure kinds end the same way: signal, then full reset.
    fn strike(&mut self) -> PressOutcome {
        self.events.push(Event::Strike);
        self.initialize();
        PressOutcome::Strike
    }

    fn set_stage(&mut self, stage: u8) -> PressOutcome {
        self.subprogress = 0;
        if stage as usize > STAGE_COUNT {
            self.phase = Phase::Solved;
            self.expected.clear();
            log::info!("[squares #{}] solved", self.module_id);
            self.events.push(Event::Solved);
            return PressOutcome::Solved;
        }
        self.phase = Phase::Stage(stage);
        let s = stage as usize - 1;

        // Candidate pool: every cell for stage 1, later stages only the
        // cells that have not been cleared yet.
        let mut pool: Vec<Cell> = Cell::all()
            .filter(|&c| stage == 1 || self.colors[c.index()] != SquareColor::Cleared)
            .collect();
        self.rng.shuffle_cells(&mut pool);

        let take = self.rng.pick(3, 6).min(pool.len());
        let active_color = self.remembered_colors[s];
        for &c in &pool[..take] {
            self.colors[c.index()] = active_color;
        }

        // Fillers may reuse the former neutral hue; only the stage's
        // active hue is excluded.
        let fillers: Vec<SquareColor> = SquareColor::HUES
            .iter()
            .copied()
            .filter(|&h| h != active_color)
            .collect();
        for &c in &pool[take..] {
            self.colors[c.index()] = fillers[self.rng.pick(0, fillers.len())];
        }

        let mut relevant: Vec<Cell> = pool[..take].to_vec();
        relevant.sort_by_key(|&c| self.rules.rank(s, c));

        let instruction = self.rules.instruction_at(self.remembered_cells[s]);
        let in_order: Vec<String> = relevant.iter().map(|c| c.to_string()).collect();
        log::info!(
            "[squares #{}] stage {}: {} cells in rank order: {}; instruction {:?}",
            self.module_id,
            stage,
            active_color,
            in_order.join(", "),
            instruction
        );

        self.expected.clear();
        for &active in &relevant {
            if self.expected.contains(&active) {
                // This cell is already the target of an earlier chain
                // and will be cleared before its own turn comes.
                log::debug!(
                    "[squares #{}] {} already expected, skipped",
                    self.module_id,
                    active
                );
                continue;
            }
            let mut target = active;
            loop {
                target = instruction.apply(target);
                if self.colors[target.index()] != SquareColor::Cleared
                    && !self.expected.contains(&target)
                {
                    break;
                }
            }
            log::debug!(
                "[squares #{}] {} resolves to {}",
                self.module_id,
                active,
                target
            );
            self.expected.push(target);
        }

        self.push_snapshot();
        PressOutcome::Accepted
    }

    /// Toggle the colorblind rendering mode.
    ///
    /// Render-only: no stored color, stage, or rule data changes. A
    /// change requests a full, non-animated repaint via a snapshot.
    pub fn set_colorblind(&mut self, on: bool) {
        if self.colorblind != on {
            self.colorblind = on;
            self.push_snapshot();
        }
    }

    /// Order in which the presentation layer should reveal the current
    /// colors; cleared cells are skipped. Colors are already committed
    /// when this is called, so a press may validly land on a cell whose
    /// reveal has not played yet.
    pub fn reveal_sequence(&mut self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = Cell::all()
            .filter(|&c| self.colors[c.index()] != SquareColor::Cleared)
            .collect();
        self.rng.shuffle_cells(&mut cells);
        cells
    }

    /// Drain the queued output events in commit order.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn subprogress(&self) -> usize {
        self.subprogress
    }

    #[inline]
    pub fn colors(&self) -> &[SquareColor; CELL_COUNT] {
        &self.colors
    }

    #[inline]
    pub fn color_at(&self, cell: Cell) -> SquareColor {
        self.colors[cell.index()]
    }

    #[inline]
    pub fn neutral_color(&self) -> SquareColor {
        self.neutral
    }

    /// The presses that complete the current stage, in order. Empty in
    /// `Setup` and `Solved`. Exposed for host diagnostics.
    #[inline]
    pub fn expected_presses(&self) -> &[Cell] {
        &self.expected
    }

    /// The live hues in the order the player pressed them during setup.
    #[inline]
    pub fn remembered_colors(&self) -> &[SquareColor; STAGE_COUNT] {
        &self.remembered_colors
    }

    /// The cells the player pressed during setup, in press order.
    #[inline]
    pub fn remembered_cells(&self) -> &[Cell; STAGE_COUNT] {
        &self.remembered_cells
    }

    #[inline]
    pub fn colorblind(&self) -> bool {
        self.colorblind
    }

    fn set_color(&mut self, cell: Cell, color: SquareColor) {
        self.colors[cell.index()] = color;
        self.events.push(Event::CellColor { cell, color });
    }

    fn push_snapshot(&mut self) {
        self.events.push(Event::Snapshot {
            colors: self.colors,
        });
    }
}
