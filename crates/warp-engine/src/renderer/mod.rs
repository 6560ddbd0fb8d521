pub mod surface;
pub mod draw_list;
