mod patterns;
mod statistics;
