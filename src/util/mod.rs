pub mod byte_hasher;
pub mod float_ext;
pub mod hint;
pub mod mods;
pub mod sorted_vec;
