use super::image;
use crate::Symbol;
use egui::{Button, Response, Ui};

/// An icon-only button.
///
/// The action lives at the call site, immediate-mode style:
///
/// ```no_run
/// # fn demo(ui: &mut egui::Ui) {
/// if symbol::widget::button(ui, &symbol::STARRED).clicked() {
///     // tapped
/// }
/// # }
/// ```
pub fn button(ui: &mut Ui, symbol: &Symbol) -> Response {
    ui.add(Button::image(image(symbol)))
}
