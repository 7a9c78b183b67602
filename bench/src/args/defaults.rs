use nonzero_lit::u32;
use std::num::NonZeroU32;

pub const DEFAULT_NUMBER_OF_HAMMERS: NonZeroU32 = u32!(1);
pub const DEFAULT_NUMBER_OF_THROWS: NonZeroU32 = u32!(1);
pub const DEFAULT_VERBOSE: bool = false;
