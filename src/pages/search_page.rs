use crate::Message;
use crate::backend::{self, BackendClient};
use crate::config::AppSettings;
use crate::managers::{InputAction, SearchRequest, SearchSession};
use crate::models::Song;
use crate::utilities::open_in_browser;
use crate::widgets::get_results_table_widget;
use iced::task::Handle;
use iced::widget::{Scrollable, button, column, row, text_input};
use iced::{Length, Task};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub enum SearchPageMessage {
    InputChanged(String),
    Submit,
    DebounceElapsed(u64),
    SearchCompleted(u64, Vec<Song>),
    SearchFailed(u64, String),
    OpenLyrics(String),
    CopyTableHtml,
}

type Ms = SearchPageMessage;

pub struct SearchPage {
    backend: BackendClient,
    session: SearchSession,
    pending_timer: Option<Handle>,
    open_links_in_browser: bool,
}

impl SearchPage {
    pub fn new(backend: BackendClient, settings: &AppSettings) -> Self {
        Self {
            backend,
            session: SearchSession::new(settings.debounce()),
            pending_timer: None,
            open_links_in_browser: settings.open_links_in_browser,
        }
    }

    fn cancel_pending_timer(&mut self) {
        if let Some(handle) = self.pending_timer.take() {
            handle.abort();
        }
    }

    fn execute_search(&self, request: SearchRequest) -> Task<Message> {
        let backend = self.backend.clone();
        let SearchRequest { seq, query } = request;
        debug!("Searching for {:?} (request {})", query, seq);

        Task::perform(
            async move { backend.search_songs(&query).await },
            move |result| match result {
                Ok(songs) => Message::SearchPage(Ms::SearchCompleted(seq, songs)),
                Err(error) => Message::SearchPage(Ms::SearchFailed(seq, error.to_string())),
            },
        )
    }

    pub fn update(&mut self, message: SearchPageMessage) -> Task<Message> {
        match message {
            SearchPageMessage::InputChanged(value) => {
                self.cancel_pending_timer();
                match self.session.input_changed(value) {
                    InputAction::Cleared => Task::none(),
                    InputAction::Schedule(scheduled) => {
                        let token = scheduled.token;
                        let (task, handle) = Task::perform(
                            tokio::time::sleep(scheduled.delay),
                            move |_| Message::SearchPage(Ms::DebounceElapsed(token)),
                        )
                        .abortable();
                        self.pending_timer = Some(handle);
                        task
                    }
                }
            }
            SearchPageMessage::Submit => {
                self.cancel_pending_timer();
                match self.session.submit() {
                    Some(request) => self.execute_search(request),
                    None => Task::none(),
                }
            }
            SearchPageMessage::DebounceElapsed(token) => match self.session.timer_fired(token) {
                Some(request) => {
                    self.pending_timer = None;
                    self.execute_search(request)
                }
                None => Task::none(),
            },
            SearchPageMessage::SearchCompleted(seq, songs) => {
                let count = songs.len();
                if self.session.results_received(seq, songs) {
                    debug!("Rendered {} results for request {}", count, seq);
                }
                Task::none()
            }
            SearchPageMessage::SearchFailed(seq, error) => {
                self.session.search_failed(seq, &error);
                Task::none()
            }
            SearchPageMessage::OpenLyrics(path) => {
                match backend::resolve_link(self.backend.base(), &path) {
                    Ok(url) if self.open_links_in_browser => open_in_browser(&url),
                    Ok(url) => info!("Lyrics available at {}", url),
                    Err(e) => warn!("Invalid lyrics link {}: {}", path, e),
                }
                Task::none()
            }
            SearchPageMessage::CopyTableHtml => {
                debug!("Copying {} table rows as HTML", self.session.table().rows().len());
                iced::clipboard::write(self.session.table().to_html())
            }
        }
    }

    pub fn view(&self) -> iced::Element<'_, Message> {
        let results = get_results_table_widget(self.session.table(), |path| {
            Message::SearchPage(Ms::OpenLyrics(path))
        });

        column![
            row![
                text_input("Search lyrics...", self.session.input())
                    .on_input(|s| Message::SearchPage(Ms::InputChanged(s)))
                    .on_submit(Message::SearchPage(Ms::Submit))
                    .padding(8),
                button("Copy HTML").on_press(Message::SearchPage(Ms::CopyTableHtml)),
            ]
            .spacing(10),
            Scrollable::new(results)
                .height(Length::Fill)
                .width(Length::Fill),
        ]
        .spacing(10)
        .into()
    }
}
