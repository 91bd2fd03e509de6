//! Headless administration panel for the users and recipes of a recipe
//! backend: loads both collections, tracks the active tab, and drives a
//! single create/edit dialog against the backend's REST routes.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
