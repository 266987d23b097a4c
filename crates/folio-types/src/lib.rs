pub mod contact;
pub mod content;
pub mod error;
pub mod section;

pub use contact::ContactField;
pub use content::{NamedEntry, SectionContent, TagGroup};
pub use error::{Error, Result};
pub use section::Section;
