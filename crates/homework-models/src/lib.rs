//! Domain types for the homework status bot.
//!
//! This crate holds everything that does not touch the network:
//!
//! - **homework**: `HomeworkRecord` and the validated `StatusSnapshot`
//! - **status**: the closed `HomeworkStatus` set and its verdicts
//! - **message**: translation of a record into a notification text
//! - **error**: `SchemaError` and `UnknownStatusError`

pub mod error;
pub mod homework;
pub mod message;
pub mod status;

pub use error::{SchemaError, UnknownStatusError};
pub use homework::{HomeworkRecord, StatusSnapshot};
pub use status::{HomeworkStatus, NO_NEW_STATUSES};
