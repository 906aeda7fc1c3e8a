pub mod canonical_json;

pub use canonical_json::{compute_sorted_hash, to_canonical_json};
