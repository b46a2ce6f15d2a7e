// Skill-matching engine shared by resume evaluation, the job board, and skill-gap analysis.
// Pipeline: dictionary → extractor → matcher → recommendations. Pure and synchronous.

pub mod dictionary;
pub mod engine;
pub mod extractor;
pub mod handlers;
pub mod matcher;
pub mod recommendations;
pub mod skill_set;
