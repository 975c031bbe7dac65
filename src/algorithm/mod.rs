/// Cartesian enumeration, filtering and thumb composition
pub mod generator;
/// Accepted-state, proximity and pairing tables
pub mod rules;
/// Validity predicates for multi-links and add/abd links
pub mod validity;
