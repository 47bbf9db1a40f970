pub mod clock;
pub mod mount;
pub mod scheduler;
pub mod viewport;
