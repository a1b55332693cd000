use super::image;
use crate::Symbol;
use egui::{Response, Ui, WidgetText};

/// An icon-and-text row: the titled label form.
pub fn label(ui: &mut Ui, text: impl Into<WidgetText>, symbol: &Symbol) -> Response {
    let text = text.into();

    ui.horizontal(|ui| {
        let icon = ui.add(image(symbol));

        icon.union(ui.label(text))
    })
    .inner
}
