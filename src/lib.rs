pub mod case;
pub mod cli;
pub mod numeric;
pub mod prompt;

pub use case::{to_dot_case, to_lower_camel, tokenize};
pub use numeric::{add_numbers, InvalidArgument};
pub use prompt::{chain_prompts, refine_prompt, ChainOptions, RefineOptions};
