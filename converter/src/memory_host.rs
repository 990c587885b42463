//! An in-memory host whose buttons can be clicked from code.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::WidgetError;
use crate::host::Activation;
use crate::host::ButtonStyle;
use crate::host::Container;
use crate::host::Control;
use crate::host::Document;

/// A flat set of named containers.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    containers: Rc<RefCell<HashMap<String, MemoryContainer>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(self, id: &str) -> Self {
        self.add_container(id);
        self
    }

    /// Adds an empty container, replacing any existing one with the same id.
    pub fn add_container(&self, id: &str) -> MemoryContainer {
        let container = MemoryContainer::default();
        self.containers
            .borrow_mut()
            .insert(id.to_string(), container.clone());
        container
    }

    /// The buttons currently inside a container.
    pub fn buttons(&self, id: &str) -> Vec<MemoryControl> {
        self.containers
            .borrow()
            .get(id)
            .map(|c| c.children.borrow().clone())
            .unwrap_or_default()
    }
}

impl Document for MemoryDocument {
    type Container = MemoryContainer;

    fn container(&self, id: &str) -> Option<MemoryContainer> {
        self.containers.borrow().get(id).cloned()
    }
}

#[derive(Clone, Default)]
pub struct MemoryContainer {
    children: Rc<RefCell<Vec<MemoryControl>>>,
}

impl MemoryContainer {
    pub fn len(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.borrow().is_empty()
    }

    /// Appends a button with no click handler, standing in for stale content.
    pub fn push_placeholder(&self, label: &str) {
        self.children.borrow_mut().push(MemoryControl::new(
            label,
            ButtonStyle::DEFAULT,
            Box::new(|| {}),
        ));
    }
}

impl Container for MemoryContainer {
    type Control = MemoryControl;

    fn clear(&mut self) {
        self.children.borrow_mut().clear();
    }

    fn append_button(
        &mut self,
        label: &str,
        style: &ButtonStyle,
        on_activate: Activation,
    ) -> Result<MemoryControl, WidgetError> {
        let control = MemoryControl::new(label, *style, on_activate);
        self.children.borrow_mut().push(control.clone());
        Ok(control)
    }
}

struct MemoryButton {
    label: RefCell<String>,
    style: ButtonStyle,
    on_activate: RefCell<Activation>,
}

/// A shared handle to an in-memory button.
#[derive(Clone)]
pub struct MemoryControl(Rc<MemoryButton>);

impl MemoryControl {
    fn new(label: &str, style: ButtonStyle, on_activate: Activation) -> Self {
        Self(Rc::new(MemoryButton {
            label: RefCell::new(label.to_string()),
            style,
            on_activate: RefCell::new(on_activate),
        }))
    }

    pub fn label(&self) -> String {
        self.0.label.borrow().clone()
    }

    pub fn style(&self) -> ButtonStyle {
        self.0.style
    }

    /// Runs the bound activation handler, as a user click would.
    pub fn click(&self) {
        let mut on_activate = self.0.on_activate.borrow_mut();
        (*on_activate)();
    }
}

impl Control for MemoryControl {
    fn set_label(&mut self, label: &str) {
        *self.0.label.borrow_mut() = label.to_string();
    }
}
