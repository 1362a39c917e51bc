//! Request handlers organized by domain

pub mod catalog;
pub mod health;
pub mod moderation;
pub mod proposals;
