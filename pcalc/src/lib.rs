extern crate lexers;

pub use lexers::TokenKind;

pub use self::decimals::DecimalMode;
pub use self::observer::{EvalObserver, LogObserver, NoopObserver};
pub use self::registry::Binder;
pub use self::rpneval::{CalcErr, Calculator};

mod decimals;
mod observer;
mod registry;
mod rpneval;
