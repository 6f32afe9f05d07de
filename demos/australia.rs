use clap::Parser;
use seco::error::Result;
use seco::problems::map::{map_colouring, AUSTRALIA_ADJACENCIES, AUSTRALIA_REGIONS};
use seco::solver::search::{BacktrackSearcher, SearchState};
use seco::solver::stats::render_stats_table;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of colours in the palette.
    #[arg(long, default_value_t = 3)]
    colours: i32,
}

fn colour_name(value: i32) -> String {
    match value {
        0 => "red".to_owned(),
        1 => "green".to_owned(),
        2 => "blue".to_owned(),
        other => format!("colour {other}"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let model = map_colouring(&AUSTRALIA_REGIONS, &AUSTRALIA_ADJACENCIES, args.colours)?;
    let mut searcher = BacktrackSearcher::new(model);
    let state = searcher.solve();

    println!("State: {state:?}");
    if state == SearchState::Satisfied {
        for (region, name) in AUSTRALIA_REGIONS.iter().enumerate() {
            if let Some(value) = searcher.model().variable(region).value() {
                println!("{name}: {}", colour_name(value));
            }
        }
    }
    println!("{}", render_stats_table(searcher.statistics()));
    Ok(())
}
