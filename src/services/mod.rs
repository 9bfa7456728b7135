pub mod prompt;
pub mod providers;

pub use prompt::ContractPrompt;
