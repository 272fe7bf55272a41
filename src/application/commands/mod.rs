pub mod save;

pub use save::SluggedSaveService;
