use lexers::TokenKind;

/// Hooks for watching an evaluation step by step. Every hook defaults to a
/// no-op, and nothing in the evaluator depends on what an observer does.
pub trait EvalObserver: Send {
    fn token_classified(&mut self, _lexeme: &str, _kind: TokenKind) {}
    fn operator_applied(&mut self, _op: &str, _left: f64, _right: f64, _result: f64) {}
    fn function_applied(&mut self, _name: &str, _arg: f64, _result: f64) {}
    fn result(&mut self, _value: f64) {}
}

/// Forwards evaluation events to the `log` facade.
pub struct LogObserver;

impl EvalObserver for LogObserver {
    fn token_classified(&mut self, lexeme: &str, kind: TokenKind) {
        log::debug!("{} -> {:?}", lexeme, kind);
    }

    fn operator_applied(&mut self, op: &str, left: f64, right: f64, result: f64) {
        log::debug!("{} = {} {} {}", result, left, op, right);
    }

    fn function_applied(&mut self, name: &str, arg: f64, result: f64) {
        log::debug!("{} = {}({})", result, name, arg);
    }

    fn result(&mut self, value: f64) {
        log::info!("result: {}", value);
    }
}

pub struct NoopObserver;

impl EvalObserver for NoopObserver {}
