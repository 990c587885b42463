//! Traits a host environment implements so a widget can render into it.
//!
//! The widget only ever needs three things from its host: find an element
//! by id, put one button into it, and relabel that button later.

use crate::error::WidgetError;

/// Inline style applied to the converter button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub padding: &'static str,
    pub background_color: &'static str,
    pub color: &'static str,
    pub border: &'static str,
    pub border_radius: &'static str,
    pub cursor: &'static str,
}

impl ButtonStyle {
    pub const DEFAULT: Self = Self {
        padding: "10px 20px",
        background_color: "white",
        color: "#000",
        border: "2px solid black",
        border_radius: "50px",
        cursor: "pointer",
    };

    /// `(css property, value)` pairs, in declaration order.
    pub fn properties(&self) -> [(&'static str, &'static str); 6] {
        [
            ("padding", self.padding),
            ("background-color", self.background_color),
            ("color", self.color),
            ("border", self.border),
            ("border-radius", self.border_radius),
            ("cursor", self.cursor),
        ]
    }

    /// The style as an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        self.properties()
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Handler run when the user activates a rendered control.
pub type Activation = Box<dyn FnMut()>;

/// The host's element tree.
pub trait Document {
    type Container: Container;

    /// Finds the element with the given id.
    fn container(&self, id: &str) -> Option<Self::Container>;
}

/// An element the widget renders into.
pub trait Container {
    type Control: Control;

    /// Removes all existing children.
    fn clear(&mut self);

    /// Appends a labelled, styled button that runs `on_activate` when clicked.
    fn append_button(
        &mut self,
        label: &str,
        style: &ButtonStyle,
        on_activate: Activation,
    ) -> Result<Self::Control, WidgetError>;
}

/// A rendered control the widget keeps for later updates.
pub trait Control {
    fn set_label(&mut self, label: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_css() {
        assert_eq!(
            ButtonStyle::DEFAULT.to_css(),
            "padding: 10px 20px; background-color: white; color: #000; \
             border: 2px solid black; border-radius: 50px; cursor: pointer;"
        );
    }
}
