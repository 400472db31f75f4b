mod scanner;
mod helpers;
mod lisp_tokenizer;

pub use scanner::Scanner;
pub use lisp_tokenizer::{LispTokenizer, tokenize};

pub use helpers::parse_number;
