pub mod home;
pub mod movie_card;
pub mod navbar;
pub mod search_box;
pub mod settings;
pub mod spinner;
pub mod trending_list;

pub use home::Home;
pub use movie_card::MovieCard;
pub use navbar::Navbar;
pub use search_box::SearchBox;
pub use settings::Settings;
pub use spinner::Spinner;
pub use trending_list::TrendingList;
