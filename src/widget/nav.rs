use super::image;
use crate::Symbol;
use egui::{Response, Ui, WidgetText};

/// An icon-and-link row. Navigation is the caller's move: switch screens when
/// the response reports a click.
pub fn nav_link(ui: &mut Ui, text: impl Into<WidgetText>, symbol: &Symbol) -> Response {
    let text = text.into();

    ui.horizontal(|ui| {
        let icon = ui.add(image(symbol));

        icon.union(ui.link(text))
    })
    .inner
}
