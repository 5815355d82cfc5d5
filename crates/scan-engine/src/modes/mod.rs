pub mod context;
pub mod numbered;
pub mod paragraph;
