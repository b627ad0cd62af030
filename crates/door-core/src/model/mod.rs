pub mod action;
pub mod observation;
pub mod state;
pub mod step;
