//! Common test utilities for neat-polars tests

use polars::prelude::*;

/// A small structure table with an id, two metrics and a year
pub fn create_structures_df() -> DataFrame {
    DataFrame::new(vec![
        Series::new(PlSmallStr::from("pdb_id"), vec!["1ABC", "2XYZ", "3DEF", "4GHI"]).into(),
        Series::new(
            PlSmallStr::from("resolution"),
            vec![Some(1.5f64), None, Some(2.25), Some(f64::NAN)],
        )
        .into(),
        Series::new(PlSmallStr::from("clashscore"), vec![3.0f32, 4.5, 12.0, 0.5]).into(),
        Series::new(PlSmallStr::from("release_year"), vec![1999i32, 2005, 2015, 2023]).into(),
        Series::new(PlSmallStr::from("chains"), vec![1u32, 2, 2, 4]).into(),
    ])
    .unwrap()
}
