//! Agents domain layer: entities

pub mod entities;
