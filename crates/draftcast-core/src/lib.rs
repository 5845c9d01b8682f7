// Draft board model, team rosters, champion catalog, prediction client and
// result presentation. No terminal or runtime concerns live here.

pub mod catalog;
pub mod config;
pub mod draft;
pub mod oracle;
pub mod render;
