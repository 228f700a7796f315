//! Domain types: bars and per-symbol series.

pub mod bar;
pub mod series;

pub use bar::Bar;
pub use series::BarSeries;
