mod control;
mod logging;
mod prompt;

pub use control::ControlConfigSection;
pub use logging::LoggingConfigSection;
pub use prompt::PromptConfigSection;
