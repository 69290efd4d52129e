pub mod csv;
pub mod table;

pub use csv::traces_to_csv;
pub use table::{render_summary, render_table, render_walkthrough};
