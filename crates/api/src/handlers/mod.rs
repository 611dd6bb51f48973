pub mod demands;
pub mod info;
