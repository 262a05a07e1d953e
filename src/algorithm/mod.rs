/// Compact bitset marking colored pixels
pub mod bitset;
/// Region-by-region flood fill over the canvas
pub mod executor;
/// Uncolored pixel pool with constant-time removal and sampling
pub mod pool;
/// Weighted random selection and shuffling
pub mod selection;
