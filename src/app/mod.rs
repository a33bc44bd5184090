//! Core application logic: list models, the confirmation gate, and event dispatch.

pub mod action;
pub mod editor;
pub mod event;
pub mod gate;
pub mod handler;
pub mod item;
pub mod state;
