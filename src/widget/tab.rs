use super::image;
use crate::Symbol;
use egui::{Response, Ui, WidgetText};

/// A tab item: icon plus caption, highlighted while `current` equals `value`,
/// and writing `value` back through the binding when clicked.
pub fn tab_item<V: PartialEq>(
    ui: &mut Ui,
    current: &mut V,
    value: V,
    symbol: &Symbol,
    text: impl Into<WidgetText>,
) -> Response {
    let text = text.into();
    let selected = *current == value;

    let mut response = ui
        .horizontal(|ui| {
            let icon = ui.add(image(symbol));

            icon.union(ui.selectable_label(selected, text))
        })
        .inner;

    if response.clicked() && !selected {
        *current = value;
        response.mark_changed();
    }

    response
}
