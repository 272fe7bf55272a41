pub mod options;
pub mod record;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use options::{SlugOptions, SlugSource, SlugSourceFn};
pub use record::{PersistableRecord, SluggableRecord};
pub use repository::{SlugExistenceRepository, SlugLookup, SluggableWriteRepository};
pub use services::{SlugService, SlugTrigger};
pub use value_objects::{FieldValue, RecordKey, SlugCandidate, Translations};
