//! Blog section backed by the headless CMS.

pub mod api;
mod list;
mod post;

pub use list::BlogListPage;
pub use post::BlogPostPage;
