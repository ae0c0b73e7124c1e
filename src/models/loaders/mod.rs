pub mod markdown_loader;
pub mod toml_loader;

pub use markdown_loader::load_markdown_documents;
pub use toml_loader::load_exam_plan;
