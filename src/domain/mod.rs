pub mod errors;
pub mod slug;
