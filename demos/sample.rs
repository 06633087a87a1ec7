use std::env;

use log::LevelFilter;
use xwords_csp::{BacktrackingFiller, Crossword, FillConfig, Filler};

fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    let _ = builder.try_init();
}

fn main() -> Result<(), xwords_csp::Error> {
    init_logger(env::args().any(|arg| arg == "--debug"));

    let rows = ["    ", " ** ", "    "];
    let structure: Vec<Vec<bool>> = rows
        .iter()
        .map(|row| row.chars().map(|c| c != '*').collect())
        .collect();
    let words = [
        "ends", "exit", "tops", "spin", "tee", "ear", "sit", "sip", "rot", "tide", "stop",
    ];
    let crossword = Crossword::new(structure, words)?;

    for variable in crossword.variables() {
        println!("{}", variable);
    }

    let mut filler = BacktrackingFiller::new(FillConfig::default().with_progress_interval(100));
    match filler.fill(&crossword)? {
        Some(assignment) => {
            for row in crossword.letter_grid(&assignment) {
                let line: String = row.iter().map(|cell| cell.unwrap_or('█')).collect();
                println!("{}", line);
            }
        }
        None => println!("No solution."),
    }
    println!("{:?}", filler.stats());

    Ok(())
}
