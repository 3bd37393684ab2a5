//! UI module - reusable widgets drawn by the views

pub mod chart;
pub mod components;
