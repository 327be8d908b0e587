//! Use cases: orchestration of ports and domain logic.

pub mod actionize;
pub mod library;
pub mod poster;
pub mod settings_ops;
pub mod top10;

pub use actionize::{Actionize, GenerateTags, LookupMovie};
pub use library::{Library, NewSavedMovie};
pub use poster::{GeneratePoster, PosterError};
pub use settings_ops::{SettingsOps, SettingsView};
pub use top10::{Top10, Top10Listing};
