/// Модели, которые можно выбрать в интерфейсе. Поддержку проверяет бэкенд.
pub const MODELS: &[&str] = &[
    "doubao-pro-32k-241215",
    "gpt-3.5-turbo",
    "gpt-4o",
    "gpt-4-turbo-preview",
    "claude-sonnet-4-20250514",
    "deepseek-r1",
    "gpt-4.5-preview",
];

pub fn default_model() -> &'static str {
    MODELS[0]
}
