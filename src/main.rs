use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length, Size, Task, Theme};

mod config;
mod error;
mod player;
mod state;
mod thumbs;
mod ui;

use config::GalleryConfig;
use error::Result;
use player::Player;
use state::catalog::Catalog;
use state::gallery::Gallery;
use thumbs::{Ffmpeg, ThumbnailCache};

/// Main application state
struct VideoGallery {
    /// Catalog, cache and the page on screen
    gallery: Gallery<Ffmpeg>,
    /// Media player for opened videos
    player: Player,
    /// Grid columns
    columns: usize,
    /// Contents of the search box
    query: String,
    /// Path shown in the details popup, if open
    details: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User typed in the search box
    QueryChanged(String),
    /// User pressed Enter or clicked "Search"
    Search,
    /// User clicked a page button (zero-based)
    ChangePage(usize),
    /// Left click on a thumbnail
    OpenVideo(String),
    /// Right click on a thumbnail
    ShowDetails(String),
    /// Details popup dismissed
    CloseDetails,
}

impl VideoGallery {
    /// Create a new instance of the application
    fn new(gallery: Gallery<Ffmpeg>, config: &GalleryConfig) -> Self {
        VideoGallery {
            gallery,
            player: Player::new(config.player_program.clone()),
            columns: config.columns,
            query: String::new(),
            details: None,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
            }
            Message::Search => {
                if let Err(e) = self.gallery.search(&self.query) {
                    eprintln!("⚠️  Search failed: {}", e);
                }
            }
            Message::ChangePage(page) => {
                if let Err(e) = self.gallery.change_page(page) {
                    eprintln!("⚠️  {}", e);
                }
            }
            Message::OpenVideo(path) => {
                if let Err(e) = self.player.open(&path) {
                    eprintln!("⚠️  Could not launch {}: {}", self.player.program(), e);
                }
            }
            Message::ShowDetails(path) => {
                self.details = Some(path);
            }
            Message::CloseDetails => {
                self.details = None;
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let search_bar = row![
            text_input("Search videos...", &self.query)
                .on_input(Message::QueryChanged)
                .on_submit(Message::Search)
                .padding(6)
                .width(Length::Fixed(300.0)),
            button("Search").on_press(Message::Search).padding(6),
            text(self.status()).size(14),
        ]
        .spacing(10)
        .padding(5)
        .align_y(Alignment::Center);

        let pages = container(ui::grid::page_selector(
            self.gallery.page_count(),
            self.gallery.current_page(),
        ))
        .center_x(Length::Fill);

        let content: Element<'_, Message> = column![
            search_bar,
            ui::grid::thumbnail_grid(self.gallery.cells(), self.columns),
            pages,
        ]
        .spacing(5)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

        match &self.details {
            Some(path) => ui::details::details_modal(content, path),
            None => content,
        }
    }

    fn status(&self) -> String {
        let total = self.gallery.results().len();
        let pages = self.gallery.page_count();
        if pages == 0 {
            "No videos".to_string()
        } else {
            format!(
                "{} videos, page {} of {}",
                total,
                self.gallery.current_page() + 1,
                pages
            )
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Load settings, open and populate the catalog, and render the first page
fn load_gallery(config: &GalleryConfig) -> Result<Gallery<Ffmpeg>> {
    let mut catalog = Catalog::open(&config.database_path)?;
    catalog.initialize(&config.scan_root)?;

    println!(
        "🎬 Video gallery initialized with {} videos ({})",
        catalog.count()?,
        catalog.path().display()
    );

    let cache = ThumbnailCache::new(
        config.cache_capacity,
        Ffmpeg::new(config.ffmpeg_program.clone()),
    );
    Gallery::new(catalog, cache, config.page_size)
}

fn main() -> iced::Result {
    // The app cannot function without its settings and catalog
    let config = match GalleryConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load settings: {}", e);
            std::process::exit(1);
        }
    };

    let gallery = match load_gallery(&config) {
        Ok(gallery) => gallery,
        Err(e) => {
            eprintln!("❌ Failed to initialize catalog: {}", e);
            std::process::exit(1);
        }
    };

    iced::application(
        "Video Thumbnail Gallery",
        VideoGallery::update,
        VideoGallery::view,
    )
    .theme(VideoGallery::theme)
    .window_size(Size::new(1000.0, 800.0))
    .centered()
    .run_with(move || (VideoGallery::new(gallery, &config), Task::none()))
}
