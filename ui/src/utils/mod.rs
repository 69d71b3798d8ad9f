pub mod redirect;
pub mod time;
