//! Binds a [`Converter`] to a single rendered button in a host document.

use std::cell::Cell;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::rc::Weak;

use dioxus_logger::tracing;

use crate::callbacks::CallbackSlots;
use crate::callbacks::Notification;
use crate::converter::Converter;
use crate::error::WidgetError;
use crate::host::ButtonStyle;
use crate::host::Container;
use crate::host::Control;
use crate::host::Document;
use crate::rate_table::RateTable;
use crate::state::ConversionState;
use crate::state::StateUpdate;

/// What [`WidgetHandle::initialize`] needs: where to mount and whom to notify.
#[derive(Debug)]
pub struct WidgetConfig {
    pub container_id: String,
    pub callbacks: CallbackSlots,
}

impl WidgetConfig {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            callbacks: CallbackSlots::default(),
        }
    }

    pub fn callbacks(mut self, callbacks: CallbackSlots) -> Self {
        self.callbacks = callbacks;
        self
    }
}

/// A converter plus the control it renders, if mounted.
#[derive(Debug)]
pub struct ConverterWidget<C> {
    converter: Converter,
    control: Option<C>,
    style: ButtonStyle,
}

impl<C: Control> ConverterWidget<C> {
    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    pub fn is_mounted(&self) -> bool {
        self.control.is_some()
    }

    fn refresh_label(&mut self) {
        let label = self.converter.button_label();
        if let Some(control) = self.control.as_mut() {
            control.set_label(&label);
        }
    }
}

/// Widget state plus everything needed to deliver notifications outside of it.
struct Shared<C> {
    widget: RefCell<ConverterWidget<C>>,
    callbacks: RefCell<CallbackSlots>,
    outbox: RefCell<VecDeque<Notification>>,
    dispatching: Cell<bool>,
}

/// A caller-owned converter widget.
///
/// Clones share the same widget. The bound click handler holds only a weak
/// reference; once every handle is dropped, clicks on the button are ignored.
///
/// Callbacks always run after the widget has been released, so they may read
/// the handle or update it again. Notifications raised from inside a callback
/// are queued and delivered in order once that callback returns.
pub struct WidgetHandle<C>(Rc<Shared<C>>);

impl<C> Clone for WidgetHandle<C> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<C: Control + 'static> WidgetHandle<C> {
    pub fn new() -> Self {
        Self::with_rates(RateTable::builtin())
    }

    pub fn with_rates(rates: RateTable) -> Self {
        Self::from_converter(Converter::new(rates))
    }

    pub fn with_state(rates: RateTable, state: ConversionState) -> Self {
        Self::from_converter(Converter::new(rates).with_state(state))
    }

    fn from_converter(converter: Converter) -> Self {
        Self(Rc::new(Shared {
            widget: RefCell::new(ConverterWidget {
                converter,
                control: None,
                style: ButtonStyle::DEFAULT,
            }),
            callbacks: RefCell::new(CallbackSlots::default()),
            outbox: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
        }))
    }

    /// Installs the callbacks, then renders the button into the configured container.
    ///
    /// A missing container is logged and returned as an error; the widget
    /// stays unmounted but keeps the new callbacks. On success the initial
    /// rate is reported through `on_rate_change`.
    pub fn initialize<D>(&self, config: WidgetConfig, document: &D) -> Result<(), WidgetError>
    where
        D: Document,
        D::Container: Container<Control = C>,
    {
        match self.0.callbacks.try_borrow_mut() {
            Ok(mut callbacks) => *callbacks = config.callbacks,
            Err(_) => tracing::warn!("initialize called from a callback; keeping current callbacks"),
        }

        let Some(mut container) = document.container(&config.container_id) else {
            let err = WidgetError::ContainerNotFound(config.container_id);
            tracing::error!("{}", err);
            return Err(err);
        };

        let notes = {
            let mut widget = self.0.widget.borrow_mut();
            container.clear();

            let label = widget.converter.button_label();
            let style = widget.style;
            let control = container.append_button(&label, &style, self.activation())?;
            widget.control = Some(control);
            tracing::info!("converter mounted into \"{}\"", config.container_id);

            widget.converter.notify_rate_change()
        };

        self.0.deliver(notes);
        Ok(())
    }

    /// Merges `update`, relabels the button, and re-converts if a currency was supplied.
    pub fn update_state(&self, update: StateUpdate) {
        let notes = {
            let mut widget = self.0.widget.borrow_mut();
            let notes = widget.converter.update_state(update);
            widget.refresh_label();
            notes
        };
        self.0.deliver(notes);
    }

    /// Runs a conversion, as a click on the button would.
    pub fn convert(&self) {
        self.0.convert();
    }

    pub fn is_mounted(&self) -> bool {
        self.0.widget.borrow().is_mounted()
    }

    pub fn state(&self) -> ConversionState {
        self.0.widget.borrow().converter.state().clone()
    }

    pub fn button_label(&self) -> String {
        self.0.widget.borrow().converter.button_label()
    }

    fn activation(&self) -> Box<dyn FnMut()> {
        let weak = Rc::downgrade(&self.0);
        Box::new(move || convert_weak(&weak))
    }
}

impl<C: Control + 'static> Default for WidgetHandle<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Shared<C> {
    fn convert(&self) {
        let notes = self.widget.borrow().converter.convert();
        self.deliver(notes);
    }

    /// Queues `notes` and, unless a delivery is already running further up
    /// the stack, drains the queue into the callbacks.
    fn deliver(&self, notes: Vec<Notification>) {
        self.outbox.borrow_mut().extend(notes);
        if self.dispatching.replace(true) {
            return;
        }
        loop {
            let next = self.outbox.borrow_mut().pop_front();
            let Some(note) = next else { break };
            self.callbacks.borrow_mut().dispatch(&note);
        }
        self.dispatching.set(false);
    }
}

fn convert_weak<C>(weak: &Weak<Shared<C>>) {
    let Some(shared) = weak.upgrade() else {
        tracing::warn!("converter dropped; ignoring activation");
        return;
    };
    shared.convert();
}
