pub mod run;

pub use run::run_operation;
