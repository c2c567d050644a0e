use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PromptConfigSection {
    pub text: Option<String>,
}
