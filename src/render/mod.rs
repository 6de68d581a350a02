//! HTML rendering of the board.
//!
//! - `format`: price, time and memo formatting helpers
//! - `post_list`: the post list
//! - `comment_list`: one post's comment thread and its self-reloading frame
//! - `detail`: the detail panel
//! - `compose`: the new-post modal
//! - `page`: full page assembly

pub mod comment_list;
pub mod compose;
pub mod detail;
pub mod format;
pub mod page;
pub mod post_list;

pub use comment_list::{comments_for_post, render_comment_frame, render_comment_list};
pub use compose::render_compose;
pub use detail::{render_detail, DetailParams};
pub use format::{format_price, memo_preview, parse_timestamp, relative_time, split_location};
pub use page::{render_board_page, PAGE_TITLE};
pub use post_list::{render_post_list, sort_posts_newest_first};
