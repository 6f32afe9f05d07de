use clap::Parser;
use seco::error::Result;
use seco::problems::feature_model::phone_model;
use seco::solver::domain::ON;
use seco::solver::search::{BacktrackSearcher, SearchState};
use seco::solver::stats::render_model_table;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Put gps in the configuration.
    #[arg(long, default_value_t = false)]
    gps: bool,

    /// Put the basic screen in the configuration.
    #[arg(long, default_value_t = false)]
    basic_screen: bool,

    /// Put the camera in the configuration.
    #[arg(long, default_value_t = false)]
    camera: bool,
}

#[derive(Debug, Serialize)]
struct Feature {
    name: String,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    state: SearchState,
    features: Vec<Feature>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let (mut builder, features) = phone_model()?;
    builder.assign(features.phone, ON)?;
    if args.gps {
        builder.assign(features.gps, ON)?;
    }
    if args.basic_screen {
        builder.assign(features.basic_screen, ON)?;
    }
    if args.camera {
        builder.assign(features.camera, ON)?;
    }

    let mut searcher = BacktrackSearcher::new(builder.build());
    let state = searcher.solve();

    println!("{}", render_model_table(searcher.model()));

    let features = match state {
        SearchState::Satisfied => searcher
            .model()
            .variables()
            .iter()
            .map(|v| Feature {
                name: v.name().to_owned(),
                selected: v.value() == Some(ON),
            })
            .collect(),
        _ => Vec::new(),
    };
    let report = Report { state, features };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("report is serialisable")
    );
    Ok(())
}
