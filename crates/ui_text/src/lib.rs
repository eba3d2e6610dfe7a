mod resolver;
mod text;

pub use resolver::TextResolver;
pub use text::UiText;
