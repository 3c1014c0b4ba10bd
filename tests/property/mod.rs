//! Property tests over the full router

pub mod forms_proptest;
pub mod users_proptest;
