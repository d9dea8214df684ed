//! UI layer - presentation of comparison reports

pub mod terminal;
pub mod theme;
