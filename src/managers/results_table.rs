use crate::backend::lyrics_path;
use crate::constants::{COLUMN_HEADERS, NO_RESULTS_TEXT, VIEW_LYRICS_LABEL};
use crate::models::Song;
use crate::utilities::escape_html;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultRow {
    /// Single row spanning every column, shown for an empty result set.
    Placeholder,
    Song(Song),
}

impl ResultRow {
    /// Destination of the row's action link, if it has one.
    pub fn link(&self) -> Option<String> {
        match self {
            ResultRow::Placeholder => None,
            ResultRow::Song(song) => Some(lyrics_path(&song.id)),
        }
    }
}

/// Body of the results table. Every render replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsTable {
    rows: Vec<ResultRow>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn render(&mut self, songs: Vec<Song>) {
        self.rows.clear();
        if songs.is_empty() {
            self.rows.push(ResultRow::Placeholder);
            return;
        }
        self.rows.extend(songs.into_iter().map(ResultRow::Song));
    }

    /// Serialises the body as `<tr>` markup with every field escaped.
    pub fn to_html(&self) -> String {
        self.rows
            .iter()
            .map(|row| match row {
                ResultRow::Placeholder => format!(
                    "<tr><td colspan=\"{}\">{}</td></tr>",
                    COLUMN_HEADERS.len(),
                    NO_RESULTS_TEXT
                ),
                ResultRow::Song(song) => format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td><a href=\"{}\" class=\"action-button\">{}</a></td></tr>",
                    escape_html(&song.title),
                    escape_html(&song.artist),
                    escape_html(&song.album),
                    escape_html(&lyrics_path(&song.id)),
                    VIEW_LYRICS_LABEL
                ),
            })
            .collect()
    }
}
