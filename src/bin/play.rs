use std::io::{self, Write};

use discolored_squares::color::SquareColor;
use discolored_squares::command::{self, Command};
use discolored_squares::engine::{Event, Phase, PressOutcome, PuzzleEngine};
use discolored_squares::rules::RuleSet;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let seed: u64 = match args.get(1) {
        Some(v) => match v.parse() {
            Ok(s) => s,
            Err(e) => {
                eprintln!("invalid seed {v}: {e}");
                std::process::exit(2);
            }
        },
        None => rand::random(),
    };

    println!("rule seed: {seed}");
    let rules = RuleSet::generate(seed);
    let mut engine = PuzzleEngine::new(rules, rand::thread_rng(), 1);

    print_grid(&engine);
    println!("enter cells (e.g. \"a1 b3\"), \"colorblind\", or \"quit\"");

    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() || line.is_empty() {
            return;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") {
            return;
        }

        match command::parse(line) {
            Err(e) => {
                println!("rejected: {e}");
                continue;
            }
            Ok(Command::Colorblind) => {
                engine.set_colorblind(!engine.colorblind());
                println!("colorblind mode: {}", engine.colorblind());
            }
            Ok(Command::Presses(cells)) => {
                for cell in cells {
                    match engine.press(cell) {
                        PressOutcome::Ignored => println!("{cell}: no effect"),
                        PressOutcome::Accepted => println!("{cell}: ok"),
                        PressOutcome::Strike => {
                            println!("{cell}: strike! starting over");
                            break;
                        }
                        PressOutcome::Solved => {
                            println!("{cell}: solved!");
                            break;
                        }
                    }
                }
            }
        }

        for event in engine.drain_events() {
            match event {
                Event::Strike => println!("** strike **"),
                Event::Solved => println!("** solved **"),
                Event::CellColor { .. } | Event::Snapshot { .. } => {}
            }
        }

        print_grid(&engine);
        if engine.phase() == Phase::Solved {
            return;
        }
    }
}

fn print_grid<R: discolored_squares::rng::AttemptRng>(engine: &PuzzleEngine<R>) {
    println!("    A B C D");
    for row in 0..4u8 {
        print!("  {} ", row + 1);
        for col in 0..4u8 {
            let cell = discolored_squares::grid::Cell::from_col_row(col, row);
            print!("{} ", glyph(engine.color_at(cell)));
        }
        println!();
    }
    match engine.phase() {
        Phase::Setup => println!("  setup: press the four singular colors in any order"),
        Phase::Stage(k) => println!("  stage {k}"),
        Phase::Solved => println!("  solved"),
    }
}

fn glyph(color: SquareColor) -> char {
    match color {
        SquareColor::Cleared => '.',
        SquareColor::Red => 'R',
        SquareColor::Blue => 'B',
        SquareColor::Green => 'G',
        SquareColor::Yellow => 'Y',
        SquareColor::Magenta => 'M',
    }
}
