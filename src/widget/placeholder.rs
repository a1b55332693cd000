use super::image_sized;
use crate::Symbol;
use egui::{InnerResponse, RichText, Ui};

/// A centered empty-state placeholder: an oversized icon, a title, an
/// optional description, and whatever actions belong underneath.
pub fn content_unavailable<R>(
    ui: &mut Ui,
    title: impl Into<RichText>,
    symbol: &Symbol,
    description: Option<&str>,
    actions: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    let title = title.into();

    ui.vertical_centered(|ui| {
        ui.add_space(ui.spacing().item_spacing.y * 2.0);
        ui.add(image_sized(symbol, 3.0 * super::ICON_SIZE));
        ui.heading(title);

        if let Some(description) = description {
            ui.weak(description);
        }

        ui.add_space(ui.spacing().item_spacing.y);

        actions(ui)
    })
}
