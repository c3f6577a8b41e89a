mod app_footer;
mod app_header;
mod error_banner;
mod loading_screen;
mod task_card;
mod task_grid;
mod task_modal;

pub use app_footer::AppFooter;
pub use app_header::AppHeader;
pub use error_banner::ErrorBanner;
pub use loading_screen::LoadingScreen;
pub use task_card::TaskCard;
pub use task_grid::TaskGrid;
pub use task_modal::TaskModal;
