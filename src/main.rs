use crate::backend::BackendClient;
use crate::pages::{SearchPage, SearchPageMessage};
use iced::widget::container;
use iced::{Length, Task};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    // RUST_LOG wins; otherwise only this crate's logs
    let default_filter = if cfg!(debug_assertions) {
        "lyrilingual=debug"
    } else {
        "lyrilingual=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let settings = config::load_settings();
    let base = match backend::backend_base(&settings.backend_url()).or_else(|e| {
        warn!(
            "Invalid backend URL {:?}: {}. Using {}",
            settings.backend_url(),
            e,
            constants::DEFAULT_BACKEND_URL
        );
        backend::backend_base(constants::DEFAULT_BACKEND_URL)
    }) {
        Ok(base) => base,
        Err(e) => {
            error!("No usable backend URL: {}", e);
            std::process::exit(1);
        }
    };
    info!("Using search backend at {}", base);

    iced::application("Lyri Lingual", LyriLingual::update, LyriLingual::view)
        .theme(|_| iced::Theme::CatppuccinMocha)
        .run_with(move || LyriLingual::new(settings, BackendClient::new(base)))
}

mod backend;
mod config;
mod constants;
mod managers;
mod models;
mod pages;
mod utilities;
mod widgets;

#[derive(Debug, Clone)]
enum Message {
    SearchPage(SearchPageMessage),
}

struct LyriLingual {
    search_page: SearchPage,
}

impl LyriLingual {
    fn new(settings: config::AppSettings, backend: BackendClient) -> (Self, Task<Message>) {
        (
            Self {
                search_page: SearchPage::new(backend, &settings),
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchPage(msg) => self.search_page.update(msg),
        }
    }

    fn view(&self) -> iced::Element<'_, Message> {
        container(self.search_page.view())
            .padding(10)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
