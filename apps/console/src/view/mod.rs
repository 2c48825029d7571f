pub mod entities;
pub mod relative_time;
