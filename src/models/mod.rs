pub mod credentials;
pub mod policy;
