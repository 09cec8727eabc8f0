//! The True Fruits case study, once per output format.
//!
//! Each back end carries its own wording; the formats drifted apart while
//! being written and are kept as authored. Only the title block and the
//! scoring model are shared.

pub mod deck;
pub mod pdf;
pub mod word;

pub const TITLE: &str = "True Fruits: International Expansion";
pub const SUBTITLE: &str = "Case Study Analysis";

/// Criterion name and weight per column, then the weighted total.
pub const SCORE_HEADERS: [&str; 12] = [
    "Country", "GDP 15%", "Pop 10%", "Mkt 15%", "Prox 10%", "Cold 10%", "Retail 10%",
    "Health 10%", "Comp 5%", "Ease 10%", "Cult 5%", "Score",
];

#[rustfmt::skip]
pub const SCORE_ROWS: [[&str; 12]; 10] = [
    ["Netherlands", "5", "3", "4", "5", "5", "5", "5", "3", "5", "5", "4.50"],
    ["UK",          "4", "5", "5", "3", "5", "5", "5", "2", "4", "4", "4.30"],
    ["Denmark",     "5", "2", "3", "4", "5", "5", "5", "4", "5", "5", "4.20"],
    ["Sweden",      "4", "3", "3", "3", "5", "5", "5", "4", "5", "4", "4.05"],
    ["Belgium",     "4", "2", "3", "5", "5", "5", "4", "3", "5", "4", "3.95"],
    ["Norway",      "5", "2", "3", "3", "5", "5", "5", "4", "4", "4", "3.95"],
    ["Italy",       "3", "5", "4", "4", "4", "4", "4", "3", "3", "3", "3.70"],
    ["Canada",      "4", "4", "3", "1", "5", "5", "5", "3", "5", "3", "3.70"],
    ["Poland",      "2", "4", "3", "4", "3", "4", "3", "4", "4", "3", "3.30"],
    ["Japan",       "3", "5", "3", "1", "5", "5", "4", "3", "3", "2", "3.30"],
];
