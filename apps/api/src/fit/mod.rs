// Skill fit: normalization, role profiles, the evaluator and its HTTP surface.
// The evaluator is pure; roles and advice are static configuration passed in.

pub mod advice;
pub mod evaluator;
pub mod handlers;
pub mod roles;
pub mod skill;
