use crate::Symbol;
use egui::{Image, Vec2};

/// An [`egui::Image`] showing the symbol at the default widget size.
pub fn image(symbol: &Symbol) -> Image<'static> {
    image_sized(symbol, super::ICON_SIZE)
}

/// An [`egui::Image`] showing the symbol, fit inside a `size`×`size` box.
///
/// The file is re-located at the requested size, so themes carrying real
/// sized pixmaps contribute the right one instead of a rescale.
pub fn image_sized(symbol: &Symbol, size: f32) -> Image<'static> {
    let file = symbol.locate(size.round() as u32, 1);

    Image::from_uri(file.uri()).fit_to_exact_size(Vec2::splat(size))
}
