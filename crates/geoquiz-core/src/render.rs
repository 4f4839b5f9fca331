//! Seam to the projection/render layer.

use crate::country::Country;

/// Receives drawing and restyling requests from the session.
///
/// The session calls [`Renderer::draw`] once per country at start-up, in draw
/// order (largest first), and [`Renderer::restyle`] once after every state
/// transition.
pub trait Renderer {
    fn draw(&mut self, country: &Country) {
        self.restyle(country);
    }

    fn restyle(&mut self, country: &Country);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw(&mut self, country: &Country) {
        (**self).draw(country);
    }

    fn restyle(&mut self, country: &Country) {
        (**self).restyle(country);
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn draw(&mut self, country: &Country) {
        (**self).draw(country);
    }

    fn restyle(&mut self, country: &Country) {
        (**self).restyle(country);
    }
}

/// Discards every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn restyle(&mut self, _country: &Country) {}
}

/// Emits each restyle as a `tracing` event; used by headless front ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn draw(&mut self, country: &Country) {
        tracing::trace!(
            country = country.name(),
            polygons = country.shape().polygons.len(),
            "draw"
        );
        self.restyle(country);
    }

    fn restyle(&mut self, country: &Country) {
        let style = country.current_style();
        tracing::debug!(
            country = country.name(),
            state = %country.state(),
            outline = %style.outline,
            fill = %style.fill,
            "restyle"
        );
    }
}
