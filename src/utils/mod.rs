pub mod crypto;
pub mod skills;
pub mod token;
pub mod upload;
