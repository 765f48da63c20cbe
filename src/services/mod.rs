// Service exports
pub mod directory;

pub use directory::{
    parse_json_records, to_profile, DirectoryDefaults, DirectoryError, MentorDirectory,
    PLACEHOLDER_RATING,
};
