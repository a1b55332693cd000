use super::image;
use crate::Symbol;
use egui::Ui;
use egui::WidgetText;
use egui::collapsing_header::CollapsingState;
use std::hash::Hash;

/// A disclosure group: an icon-and-title header over collapsible content,
/// with the expansion state kept in egui memory under `id_salt`.
///
/// Returns the body's value, or `None` while collapsed.
pub fn disclosure<R>(
    ui: &mut Ui,
    id_salt: impl Hash,
    text: impl Into<WidgetText>,
    symbol: &Symbol,
    content: impl FnOnce(&mut Ui) -> R,
) -> Option<R> {
    let id = ui.make_persistent_id(id_salt);
    let text = text.into();

    let (_toggle, _header, body) = CollapsingState::load_with_default_open(ui.ctx(), id, false)
        .show_header(ui, |ui| {
            ui.add(image(symbol));
            ui.label(text);
        })
        .body(content);

    body.map(|inner| inner.inner)
}

/// [`disclosure`] with the expansion state owned by the caller instead of
/// egui memory.
pub fn disclosure_with<R>(
    ui: &mut Ui,
    text: impl Into<WidgetText>,
    symbol: &Symbol,
    open: &mut bool,
    content: impl FnOnce(&mut Ui) -> R,
) -> Option<R> {
    let text = text.into();

    let header = ui
        .horizontal(|ui| {
            let icon = ui.add(image(symbol));

            icon.union(ui.selectable_label(*open, text))
        })
        .inner;

    if header.clicked() {
        *open = !*open;
    }

    if *open {
        Some(ui.indent(header.id, content).inner)
    } else {
        None
    }
}
