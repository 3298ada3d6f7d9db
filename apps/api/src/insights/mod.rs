// Insights: read-only queries over the optional skill frequency dataset.

pub mod dataset;
pub mod handlers;
