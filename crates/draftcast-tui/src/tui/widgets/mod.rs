// Widget modules, one per screen zone.

pub mod board;
pub mod catalog;
pub mod quit_confirm;
pub mod results;
pub mod status_bar;
pub mod teams;
