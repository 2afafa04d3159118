//! Configuration loading for the record store.
//!
//! This module loads the store configuration from a YAML file: the
//! attachment key prefix, field length limits and the clock used for note
//! stamps and store-level filters.
//!
//! # Example
//!
//! ```no_run
//! use office_records::config::ConfigLoader;
//! use office_records::store::RecordStore;
//!
//! let config = ConfigLoader::load("./config/office.yaml").unwrap();
//! let store = RecordStore::new(config.into_config());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttachmentConfig, Clock, DEFAULT_MAX_NAME_LENGTH, DEFAULT_UPLOAD_TO, LimitsConfig,
    OfficeConfig,
};
