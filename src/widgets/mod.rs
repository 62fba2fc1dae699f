mod results_table_widget;
mod song_row_widget;

pub use results_table_widget::get_results_table_widget;
pub use song_row_widget::{get_header_row, get_song_row_widget};
