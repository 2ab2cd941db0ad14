pub mod hasher;
pub mod multipart;
pub mod time;
