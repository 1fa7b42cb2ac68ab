pub mod playlist;
pub mod profile;
pub mod search;
pub mod video;
