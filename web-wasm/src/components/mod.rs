pub mod header;
pub mod menu_list;
pub mod tabs;
