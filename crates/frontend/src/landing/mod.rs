//! Landing page and its presentation pieces.

mod footer;
mod hero;
mod how_it_works;
mod navbar;
mod page;

pub use page::LandingPage;
