pub mod constraint;
pub mod constraints;
pub mod domain;
pub mod engine;
pub mod heuristics;
pub mod projection;
pub mod puzzle;
pub mod stats;
pub mod strategy;
pub mod variable;
