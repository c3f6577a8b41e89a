mod full_list;
mod home;
mod not_found;

pub use full_list::FullListPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
