//! Wires a [`Converter`] into Dioxus signals.

use std::cell::RefCell;
use std::rc::Rc;

use converter::ConversionState;
use converter::Converter;
use converter::Notification;
use converter::RateTable;
use converter::StateUpdate;
use dioxus::prelude::*;

/// Reactive view of a converter owned by the calling component.
///
/// Each kind of notification writes into its own signal, so any component
/// that reads them re-renders when the converter reports.
#[derive(Clone)]
pub struct UseConverter {
    converter: Rc<RefCell<Converter>>,
    /// Latest reported rate.
    pub rate: Signal<Option<f64>>,
    /// Latest converted value.
    pub conversion: Signal<Option<String>>,
    /// Latest error message; empty when cleared.
    pub error: Signal<String>,
    /// Mirror of the converter state after the last update.
    pub state: Signal<ConversionState>,
}

impl UseConverter {
    pub fn update(&mut self, update: StateUpdate) {
        let (notes, state) = {
            let mut converter = self.converter.borrow_mut();
            let notes = converter.update_state(update);
            (notes, converter.state().clone())
        };
        self.state.set(state);
        self.apply(notes);
    }

    pub fn convert(&mut self) {
        let notes = self.converter.borrow().convert();
        self.apply(notes);
    }

    pub fn rates(&self) -> RateTable {
        self.converter.borrow().rates().clone()
    }

    pub fn label(&self) -> String {
        format!("Convert to {}", self.state.read().currency)
    }

    fn apply(&mut self, notes: Vec<Notification>) {
        for note in notes {
            match note {
                Notification::RateChange(rate) => self.rate.set(Some(rate)),
                Notification::Conversion(value) => self.conversion.set(Some(value)),
                Notification::Error(message) => self.error.set(message),
            }
        }
    }
}

pub fn use_converter(initial: ConversionState) -> UseConverter {
    let rate = use_signal(|| None);
    let conversion = use_signal(|| None);
    let error = use_signal(String::new);
    let state = use_signal(|| initial.clone());

    let converter = use_hook(move || {
        Rc::new(RefCell::new(
            Converter::new(RateTable::builtin()).with_state(initial),
        ))
    });

    let handle = UseConverter {
        converter,
        rate,
        conversion,
        error,
        state,
    };

    // report the initial rate once mounted, like the DOM widget does.
    use_effect({
        let mut handle = handle.clone();
        move || {
            let notes = handle.converter.borrow().notify_rate_change();
            handle.apply(notes);
        }
    });

    handle
}
