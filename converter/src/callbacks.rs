//! Caller-supplied notification slots, and the events delivered to them.

use std::fmt;

/// One outward event produced by a converter.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// The rate of the selected currency.
    RateChange(f64),
    /// A converted value as a two-decimal string.
    Conversion(String),
    /// A validation message, or `""` when a previous error is cleared.
    Error(String),
}

/// The three optional callbacks a converter reports through.
///
/// An empty slot means "do not notify".
#[derive(Default)]
pub struct CallbackSlots {
    on_conversion: Option<Box<dyn FnMut(&str)>>,
    on_rate_change: Option<Box<dyn FnMut(f64)>>,
    on_error: Option<Box<dyn FnMut(&str)>>,
}

impl CallbackSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receives the converted value as a two-decimal string.
    pub fn on_conversion(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_conversion = Some(Box::new(f));
        self
    }

    /// Receives the rate of the selected currency.
    pub fn on_rate_change(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_rate_change = Some(Box::new(f));
        self
    }

    /// Receives a validation message, or `""` when a previous error is cleared.
    pub fn on_error(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    /// Hands `notification` to the matching slot, if it is set.
    pub fn dispatch(&mut self, notification: &Notification) {
        match notification {
            Notification::RateChange(rate) => {
                if let Some(f) = self.on_rate_change.as_mut() {
                    f(*rate);
                }
            }
            Notification::Conversion(value) => {
                if let Some(f) = self.on_conversion.as_mut() {
                    f(value);
                }
            }
            Notification::Error(message) => {
                if let Some(f) = self.on_error.as_mut() {
                    f(message);
                }
            }
        }
    }
}

impl fmt::Debug for CallbackSlots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSlots")
            .field("on_conversion", &self.on_conversion.is_some())
            .field("on_rate_change", &self.on_rate_change.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn dispatch_reaches_only_the_matching_slot() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let mut slots = CallbackSlots::new().on_error(move |m| log.borrow_mut().push(m.to_string()));

        slots.dispatch(&Notification::RateChange(0.5));
        slots.dispatch(&Notification::Conversion("1.00".into()));
        slots.dispatch(&Notification::Error("Enter Amount".into()));

        assert_eq!(*seen.borrow(), vec!["Enter Amount"]);
    }
}
