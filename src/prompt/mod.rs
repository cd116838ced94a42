pub mod chain;
pub mod refine;

pub use chain::{chain_prompts, ChainOptions};
pub use refine::{refine_prompt, RefineOptions};
