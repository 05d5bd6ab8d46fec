pub mod capture;
pub mod thread;
