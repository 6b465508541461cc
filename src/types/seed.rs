pub type Seed = u64; // any value, reduced by the first advance
pub type State = u64; // 0x0 ~ 0x7fffffff once advanced
pub type Bound = i32;
pub type Span = i64; // (max - min) + 1, never overflows for Bound inputs
