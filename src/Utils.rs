pub mod plots;
pub mod show_this_pic;
