#![deny(warnings)]

use crate::scanner::Scanner;

static WHITE: &[char] = &[' ', '\n', '\r', '\t', '\x0b', '\x0c'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static ARITH_OPS: &[char] = &['+', '-', '*', '/'];
static WORD: &[char] = &['_',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'];

/*
 * Callers are expected to set the scanner up for a clean start (ie: call
 * scanner.ignore() first). On a failed scan the cursor is left where it was.
 */
impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    pub fn skip_whitespace(&mut self) -> bool {
        let skipped = self.skip_all(WHITE);
        self.ignore();
        skipped
    }

    // scan everything up to the next whitespace or EOF
    pub fn scan_lexeme(&mut self) -> Option<String> {
        if self.until_any(WHITE) {
            Some(self.extract_string())
        } else {
            None
        }
    }

    // scan numbers like -?([0-9]+(\.[0-9]*)?|[0-9]*\.[0-9]+)
    pub fn scan_postfix_number(&mut self) -> Option<String> {
        let backtrack = self.buffer_pos();
        self.accept(&'-');
        let integral = self.skip_all(DIGITS);
        let fractional = self.accept(&'.').is_some() && self.skip_all(DIGITS);
        // either side of the dot may be missing, not both
        if !integral && !fractional {
            self.set_buffer_pos(backtrack);
            return None;
        }
        Some(self.extract_string())
    }

    // scan function references like f_[a-zA-Z0-9_]+
    pub fn scan_function_name(&mut self) -> Option<String> {
        let backtrack = self.buffer_pos();
        self.accept(&'f')?;
        if self.accept(&'_').is_none() || !self.skip_all(WORD) {
            self.set_buffer_pos(backtrack);
            return None;
        }
        Some(self.extract_string())
    }

    // a single binary arithmetic operator
    pub fn scan_arith_op(&mut self) -> Option<String> {
        self.accept_any(ARITH_OPS)?;
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////
