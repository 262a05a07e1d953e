mod bitset;
mod pool;
