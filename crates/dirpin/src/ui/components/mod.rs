pub mod footer_bar;
pub mod header_bar;
