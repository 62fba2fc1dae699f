use crate::Message;
use crate::constants::{COLUMN_HEADERS, NO_RESULTS_TEXT, VIEW_LYRICS_LABEL};
use crate::managers::ResultRow;
use iced::widget::{Row, button, container, row, text};
use iced::{Element, Length};

const CELL_PORTIONS: [u16; 4] = [3, 2, 2, 1];

fn cell<'a>(content: impl Into<Element<'a, Message>>, portion: u16) -> Element<'a, Message> {
    container(content)
        .width(Length::FillPortion(portion))
        .padding(5)
        .into()
}

pub fn get_header_row<'a>() -> Row<'a, Message> {
    COLUMN_HEADERS
        .iter()
        .zip(CELL_PORTIONS)
        .fold(row![], |r, (header, portion)| {
            r.push(cell(text(*header).size(18), portion))
        })
}

/// Draws one body row. Backend strings go into plain text widgets only.
pub fn get_song_row_widget<'a, F>(result: &'a ResultRow, on_open: F) -> Row<'a, Message>
where
    F: Fn(String) -> Message + 'a,
{
    match result {
        ResultRow::Placeholder => row![cell(text(NO_RESULTS_TEXT), CELL_PORTIONS.iter().sum())],
        ResultRow::Song(song) => {
            let mut link = button(text(VIEW_LYRICS_LABEL)).style(button::text);
            if let Some(path) = result.link() {
                link = link.on_press(on_open(path));
            }

            row![
                cell(text(song.title.as_str()).shaping(text::Shaping::Advanced), CELL_PORTIONS[0]),
                cell(text(song.artist.as_str()).shaping(text::Shaping::Advanced), CELL_PORTIONS[1]),
                cell(text(song.album.as_str()).shaping(text::Shaping::Advanced), CELL_PORTIONS[2]),
                cell(link, CELL_PORTIONS[3]),
            ]
        }
    }
}
