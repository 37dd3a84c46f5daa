//! Logo encoding broken into focused submodules for easier testing.

mod data_uri;
mod identifier;
mod mime;
mod scanning;

pub use data_uri::{PayloadMode, compress_data_uri, data_uri, encode_value};
pub use identifier::{asset_identifier, camel_case, split_file_name};
pub use mime::{MIME_TYPES, mime_for_extension};
pub use scanning::encode_directory;
