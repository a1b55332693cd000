use super::image;
use crate::Symbol;
use egui::{InnerResponse, Ui};

/// A menu button labelled by the symbol instead of text.
///
/// `content` builds the opened menu, exactly as with
/// [`egui::Ui::menu_button`]; the return value is `None` while the menu is
/// closed.
pub fn menu_button<R>(
    ui: &mut Ui,
    symbol: &Symbol,
    content: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<Option<R>> {
    ui.menu_image_button(image(symbol), content)
}
