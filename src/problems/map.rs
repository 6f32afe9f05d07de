//! Map colouring: adjacent regions must not share a colour.

use crate::error::Result;
use crate::solver::model::{Model, ModelBuilder};
use crate::solver::variable::VariableId;

/// Builds a colouring model: one variable per region over the palette
/// `0..colours`, and one AllDifferent pair per adjacency. Variable ids
/// follow the region order, so `adjacencies` indexes double as ids.
pub fn map_colouring(
    regions: &[&str],
    adjacencies: &[(usize, usize)],
    colours: i32,
) -> Result<Model> {
    let mut builder = ModelBuilder::new();
    let palette = builder.create_domain(0..colours)?;
    let ids: Vec<VariableId> = regions
        .iter()
        .map(|name| builder.create_variable(*name, &palette))
        .collect();
    for &(a, b) in adjacencies {
        builder.create_all_different(&[ids[a], ids[b]])?;
    }
    Ok(builder.build())
}

/// Mainland regions, in id order. Tasmania borders nothing and is left out.
pub const AUSTRALIA_REGIONS: [&str; 6] = [
    "Western Australia",
    "Northern Territory",
    "South Australia",
    "Queensland",
    "New South Wales",
    "Victoria",
];

/// Land borders between the mainland regions, as indexes into
/// [`AUSTRALIA_REGIONS`].
pub const AUSTRALIA_ADJACENCIES: [(usize, usize); 8] = [
    (0, 1),
    (0, 2),
    (1, 2),
    (1, 3),
    (2, 3),
    (2, 4),
    (2, 5),
    (4, 5),
];

/// The classic three-colouring of mainland Australia.
pub fn australia() -> Result<Model> {
    map_colouring(&AUSTRALIA_REGIONS, &AUSTRALIA_ADJACENCIES, 3)
}
