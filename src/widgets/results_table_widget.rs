use crate::Message;
use crate::managers::ResultsTable;
use crate::widgets::{get_header_row, get_song_row_widget};
use iced::widget::{Column, column, horizontal_rule};

pub fn get_results_table_widget<'a, F>(table: &'a ResultsTable, on_open: F) -> Column<'a, Message>
where
    F: Fn(String) -> Message + Clone + 'a,
{
    let body = table
        .rows()
        .iter()
        .fold(column![], |col, result| col.push(get_song_row_widget(result, on_open.clone())));

    column![get_header_row(), horizontal_rule(1), body].spacing(5)
}
