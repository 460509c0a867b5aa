// Match scoring: skill normalization, sub-scores, weighted aggregation,
// and ranking of postings for a candidate. Pure functions throughout;
// the MatchScorer trait wraps them so a semantic backend can be swapped in.

pub mod handlers;
pub mod ranker;
pub mod scoring;
pub mod skills;
