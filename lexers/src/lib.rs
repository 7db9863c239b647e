mod scanner;
mod char_scanner;
mod postfix_tokenizer;

pub use scanner::Scanner;
pub use postfix_tokenizer::{classify, PostfixToken, PostfixTokenizer, TokenKind};
