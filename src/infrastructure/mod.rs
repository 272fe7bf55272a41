pub mod database;
pub mod record;
pub mod repositories;
pub mod util;
