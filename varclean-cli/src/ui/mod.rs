mod dir_list;
mod footer;
mod header;
mod layout;
mod status;
mod theme;

pub use dir_list::DirList;
pub use footer::Footer;
pub use header::Header;
pub use layout::AppLayout;
pub use status::StatusLine;
pub use theme::Theme;
