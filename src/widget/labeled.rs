use super::image;
use crate::Symbol;
use egui::{InnerResponse, Ui, WidgetText};

/// An icon-and-title label with trailing content on the same row, for
/// settings-style forms ("Ratings ★ ........ 5").
pub fn labeled<R>(
    ui: &mut Ui,
    text: impl Into<WidgetText>,
    symbol: &Symbol,
    content: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    let text = text.into();

    ui.horizontal(|ui| {
        ui.add(image(symbol));
        ui.label(text);

        content(ui)
    })
}
