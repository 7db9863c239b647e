use crate::decimals::DecimalMode;
use crate::observer::{EvalObserver, LogObserver};
use crate::registry::{Binder, FunctionSlots};
use lexers::{PostfixToken, PostfixTokenizer, TokenKind};
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum CalcErr {
    UnsupportedDecimalSelector(String),
    InsufficientArguments(String),
    InvalidToken(String),
    UnknownFunction(String),
    InvalidExpression(usize), // operands left on the stack
}

impl fmt::Display for CalcErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CalcErr::UnsupportedDecimalSelector(ref sel) => {
                write!(f, "Unsupported decimal selector: {}", sel)
            }
            CalcErr::InsufficientArguments(ref tok) => {
                write!(f, "Insufficient arguments for {}", tok)
            }
            CalcErr::InvalidToken(ref tok) => write!(f, "Invalid token {}", tok),
            CalcErr::UnknownFunction(ref name) => write!(f, "Unknown function {}", name),
            CalcErr::InvalidExpression(n) => {
                write!(f, "Invalid expression: {} operands left unconsumed", n)
            }
        }
    }
}

impl std::error::Error for CalcErr {}

// log a failure where it's raised and bail out
macro_rules! fail {
    ($err:expr) => {{
        let err = $err;
        log::error!("{}", err);
        return Err(err);
    }};
}

type RegistrationBlock = Box<dyn Fn(&mut Binder) -> Result<(), CalcErr> + Send>;

/// A postfix (RPN) calculator.
///
/// Configuration (decimal selector, registration block, observer) lives as
/// long as the calculator does; the value stack is reset on every `calc`.
pub struct Calculator {
    decimals: String,
    functions: Option<RegistrationBlock>,
    observer: Box<dyn EvalObserver>,
    stack: Vec<f64>,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new()
    }
}

impl Calculator {
    pub fn new() -> Calculator {
        Calculator {
            decimals: DecimalMode::Two.to_string(),
            functions: None,
            observer: Box::new(LogObserver),
            stack: Vec::new(),
        }
    }

    /// Build a calculator and hand it to `config` for setup.
    ///
    /// ```
    /// let mut pc = pcalc::Calculator::with_config(|pc| {
    ///     pc.decimal_selector("two").functions(|b| b.bind("f_x", |x| 1.0 / x));
    /// });
    /// assert_eq!(pc.calc("1 2 5 + * f_x"), Ok(Some(0.14)));
    /// ```
    pub fn with_config<F: FnOnce(&mut Calculator)>(config: F) -> Calculator {
        let mut pc = Calculator::new();
        config(&mut pc);
        pc
    }

    /// Select rounding by name (`zero`, `two`, `full` or `d_0`, `d_2`,
    /// `d_float`). Names aren't checked until the next `calc`.
    pub fn decimal_selector<S: Into<String>>(&mut self, selector: S) -> &mut Self {
        self.decimals = selector.into();
        self
    }

    pub fn decimals(&mut self, mode: DecimalMode) -> &mut Self {
        self.decimal_selector(mode.to_string())
    }

    /// Install the block that binds function tokens to transforms. It runs
    /// once per `calc`, after the expression has been scanned for function
    /// tokens. Replaces any previous block.
    pub fn functions<F>(&mut self, block: F) -> &mut Self
    where
        F: Fn(&mut Binder) -> Result<(), CalcErr> + Send + 'static,
    {
        self.functions = Some(Box::new(block));
        self
    }

    pub fn observer<O: EvalObserver + 'static>(&mut self, observer: O) -> &mut Self {
        self.observer = Box::new(observer);
        self
    }

    /// Evaluate a whitespace separated postfix expression.
    ///
    /// Returns `Ok(None)` when the expression holds no tokens at all.
    pub fn calc(&mut self, expr: &str) -> Result<Option<f64>, CalcErr> {
        self.stack.clear();
        let mode = match self.decimals.parse::<DecimalMode>() {
            Ok(mode) => mode,
            Err(e) => fail!(e),
        };
        log::info!("decimals: {}", mode);

        let tokens = PostfixTokenizer::from_str(expr).collect::<Vec<_>>();
        if tokens.is_empty() {
            log::info!("nothing to evaluate");
            return Ok(None);
        }
        let slots = self.prepare_functions(&tokens)?;

        for token in tokens.iter() {
            self.observer.token_classified(&token.lexeme, token.kind);
            match token.kind {
                TokenKind::Number => match token.lexeme.parse::<f64>() {
                    Ok(num) => self.stack.push(num),
                    Err(_) => fail!(CalcErr::InvalidToken(token.lexeme.clone())),
                },
                TokenKind::Operator => self.apply_operator(&token.lexeme)?,
                TokenKind::Function => self.apply_function(&token.lexeme, &slots)?,
                TokenKind::Invalid => fail!(CalcErr::InvalidToken(token.lexeme.clone())),
            }
        }

        if self.stack.len() > 1 {
            fail!(CalcErr::InvalidExpression(self.stack.len()));
        }
        let result = match self.stack.pop() {
            Some(value) => mode.round(value),
            None => fail!(CalcErr::InvalidExpression(0)),
        };
        self.observer.result(result);
        Ok(Some(result))
    }

    fn prepare_functions(&self, tokens: &[PostfixToken]) -> Result<FunctionSlots, CalcErr> {
        let mut slots = FunctionSlots::discover(tokens);
        log::debug!("prepared {} function slot(s)", slots.len());
        if let Some(ref block) = self.functions {
            if let Err(e) = block(&mut slots.binder()) {
                fail!(e);
            }
        }
        Ok(slots)
    }

    fn apply_operator(&mut self, op: &str) -> Result<(), CalcErr> {
        // the most recently pushed value is the right operand
        let (r, l) = match (self.stack.pop(), self.stack.pop()) {
            (Some(r), Some(l)) => (r, l),
            _ => fail!(CalcErr::InsufficientArguments(op.to_string())),
        };
        let result = match op {
            "+" => l + r,
            "-" => l - r,
            "*" => l * r,
            "/" => l / r,
            _ => fail!(CalcErr::InvalidToken(op.to_string())),
        };
        self.observer.operator_applied(op, l, r, result);
        self.stack.push(result);
        Ok(())
    }

    fn apply_function(&mut self, name: &str, slots: &FunctionSlots) -> Result<(), CalcErr> {
        let arg = match self.stack.pop() {
            Some(arg) => arg,
            None => fail!(CalcErr::InsufficientArguments(name.to_string())),
        };
        let result = match slots.apply(name, arg) {
            Some(result) => result,
            None => fail!(CalcErr::UnknownFunction(name.to_string())),
        };
        self.observer.function_applied(name, arg, result);
        self.stack.push(result);
        Ok(())
    }
}
