//! View models handed to whatever front end renders the panel.

pub mod admin;
