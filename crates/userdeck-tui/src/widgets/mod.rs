//! Custom widget components

mod detail;
mod header;
mod search_bar;
mod status_bar;
mod user_cards;
mod user_table;

pub use detail::UserDetail;
pub use header::Header;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use user_cards::UserCards;
pub use user_table::UserTable;
