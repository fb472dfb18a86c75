pub mod refine;
pub mod search;
pub mod simulate;
