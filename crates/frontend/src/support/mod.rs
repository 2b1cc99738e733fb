//! Support/contact page.

mod copy;
mod page;

pub use copy::{reason_label, SupportCopy};
pub use page::SupportPage;
