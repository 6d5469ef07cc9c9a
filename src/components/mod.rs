pub mod page_frame;
pub mod post_list;
pub mod site_title;

pub use page_frame::PageFrame;
pub use post_list::PostList;
pub use site_title::TitleMark;
