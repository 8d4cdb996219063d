//! School records and the rules a new record has to satisfy

pub mod model;
pub mod validate;

pub use model::{RankedSchool, School, SchoolDraft};
pub use validate::{parse_query, RawSchoolPayload, INVALID_QUERY_MESSAGE, QUERY_RANGE_MESSAGE};
