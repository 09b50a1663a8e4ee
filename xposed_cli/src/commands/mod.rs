mod check;
mod render;

pub use check::check_view;
pub use render::render_chips;
