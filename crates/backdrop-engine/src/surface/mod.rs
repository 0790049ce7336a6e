//! Styleable output targets.
//!
//! A surface is anything that accepts named style property writes: a DOM
//! element behind a binding, an in-memory style sheet, or a text stream.
//! The animator only ever calls [`Surface::set_property`].

mod sheet;
mod writer;

pub use sheet::StyleSheet;
pub use writer::WriterSurface;

/// Opaque handle to a styleable element.
pub trait Surface {
    /// Writes `value` under the custom property `name`.
    ///
    /// Decorative output: implementations swallow (and may log) their own
    /// failures instead of reporting them.
    fn set_property(&mut self, name: &str, value: &str);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }
}

/// The two optional surfaces fed from one shared animation state.
pub struct SurfaceTargets<'a> {
    pub hero: Option<Box<dyn Surface + 'a>>,
    pub nav: Option<Box<dyn Surface + 'a>>,
}

impl<'a> SurfaceTargets<'a> {
    pub fn new(hero: Option<Box<dyn Surface + 'a>>, nav: Option<Box<dyn Surface + 'a>>) -> Self {
        Self { hero, nav }
    }

    pub fn none() -> Self {
        Self { hero: None, nav: None }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hero.is_none() && self.nav.is_none()
    }

    /// Writes `value` to every present surface under its own property name.
    pub fn apply(&mut self, hero_property: &str, nav_property: &str, value: &str) {
        if let Some(hero) = self.hero.as_mut() {
            hero.set_property(hero_property, value);
        }
        if let Some(nav) = self.nav.as_mut() {
            nav.set_property(nav_property, value);
        }
    }
}

impl Default for SurfaceTargets<'_> {
    fn default() -> Self {
        Self::none()
    }
}
