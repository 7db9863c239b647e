use crate::rpneval::CalcErr;
use lexers::{PostfixToken, TokenKind};
use std::collections::HashMap;

pub type Transform = Box<dyn Fn(f64) -> f64>;

// Function slots for a single evaluation: one entry per distinct function
// token in the expression, empty until a registration block binds it.
#[derive(Default)]
pub(crate) struct FunctionSlots(HashMap<String, Option<Transform>>);

impl FunctionSlots {
    pub fn discover<'a, I>(tokens: I) -> FunctionSlots
    where
        I: IntoIterator<Item = &'a PostfixToken>,
    {
        let mut slots = FunctionSlots::default();
        for token in tokens {
            if token.kind == TokenKind::Function {
                slots.0.entry(token.lexeme.clone()).or_insert(None);
            }
        }
        slots
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn binder(&mut self) -> Binder<'_> {
        Binder { slots: self }
    }

    // None when the function was never bound
    pub fn apply(&self, name: &str, arg: f64) -> Option<f64> {
        match self.0.get(name) {
            Some(Some(transform)) => Some(transform(arg)),
            _ => None,
        }
    }
}

/// Handed to the registration block on every evaluation. Only functions
/// referenced by the expression being evaluated can be bound.
pub struct Binder<'a> {
    slots: &'a mut FunctionSlots,
}

impl Binder<'_> {
    /// Bind `transform` to the function token `name`, replacing an earlier
    /// binding made during this evaluation.
    ///
    /// Fails with `CalcErr::UnknownFunction` if `name` does not occur in the
    /// expression being evaluated.
    pub fn bind<F>(&mut self, name: &str, transform: F) -> Result<(), CalcErr>
    where
        F: Fn(f64) -> f64 + 'static,
    {
        match self.slots.0.get_mut(name) {
            Some(slot) => {
                log::debug!("  binding {}", name);
                *slot = Some(Box::new(transform));
                Ok(())
            }
            None => {
                log::debug!("  no slot for {}", name);
                Err(CalcErr::UnknownFunction(name.to_string()))
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::FunctionSlots;
    use crate::rpneval::CalcErr;
    use lexers::PostfixTokenizer;

    #[test]
    fn slots_follow_expression() {
        let tokens = PostfixTokenizer::from_str("1 f_x f_y 2 + f_x fake_f_z")
            .collect::<Vec<_>>();
        let slots = FunctionSlots::discover(&tokens);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots.apply("f_x", 1.0), None);
        assert_eq!(slots.apply("fake_f_z", 1.0), None);
    }

    #[test]
    fn bind_and_apply() {
        let tokens = PostfixTokenizer::from_str("4 f_x f_sq").collect::<Vec<_>>();
        let mut slots = FunctionSlots::discover(&tokens);
        {
            let mut binder = slots.binder();
            assert_eq!(binder.bind("f_x", |x| 1.0 / x), Ok(()));
            assert_eq!(binder.bind("f_sq", |x| x), Ok(()));
            // last binding wins
            assert_eq!(binder.bind("f_sq", |x| x * x), Ok(()));
        }
        assert_eq!(slots.apply("f_x", 4.0), Some(0.25));
        assert_eq!(slots.apply("f_sq", 3.0), Some(9.0));
    }

    #[test]
    fn bind_absent_function() {
        let tokens = PostfixTokenizer::from_str("1 2 + f_x").collect::<Vec<_>>();
        let mut slots = FunctionSlots::discover(&tokens);
        let bound = slots.binder().bind("f_my_function", |x| 0.99 + x);
        assert_eq!(bound, Err(CalcErr::UnknownFunction(format!("f_my_function"))));
        assert_eq!(slots.apply("f_my_function", 1.0), None);
        assert_eq!(slots.apply("f_x", 1.0), None);
    }
}
