//! Immutable update plumbing for edit views.
//!
//! Edit views never touch the value they render. Every handler builds a complete replacement
//! value and hands it to an [`OnChange`] callback supplied by the host.

use std::fmt;
use std::rc::Rc;

/// A single-argument callback shared by the controls of one presentation tree.
pub type Handler<V> = Rc<dyn Fn(V)>;

/// Access to the more general layer embedded in a specialised payload.
///
/// A vertical CRS embeds a non-compound CRS, which embeds a CRS, which embeds the common entity
/// fields. Each step implements `Layered` so that a layer's edit builder can be driven by the
/// outer value's callback (see [`OnChange::lift`]).
pub trait Layered<B> {
    fn layer(&self) -> &B;

    /// Copy of `self` with the embedded layer replaced.
    #[must_use]
    fn with_layer(&self, layer: B) -> Self;
}

/// Receives the complete replacement value produced by an edit.
pub struct OnChange<T>(Rc<dyn Fn(T)>);

impl<T> Clone for OnChange<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for OnChange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnChange(..)")
    }
}

impl<T: 'static> OnChange<T> {
    pub fn new(callback: impl Fn(T) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    pub fn emit(&self, value: T) {
        (self.0)(value);
    }

    /// Callback for a different value type, converted before it reaches `self`.
    #[must_use]
    pub fn map<U>(&self, convert: impl Fn(U) -> T + 'static) -> OnChange<U> {
        let inner = self.clone();
        OnChange(Rc::new(move |value| inner.emit(convert(value))))
    }

    /// Callback for an embedded layer of `item`.
    ///
    /// The emitted layer is merged into `item` and the merged value is passed on, so the outer
    /// host always sees a complete payload of its own type.
    #[must_use]
    pub fn lift<B>(&self, item: Rc<T>) -> OnChange<B>
    where
        T: Layered<B>,
    {
        self.map(move |layer| item.with_layer(layer))
    }

    /// Handler for one field of `item`: `set` builds the replacement from the current value.
    pub fn field<V>(&self, item: &Rc<T>, set: impl Fn(&T, V) -> T + 'static) -> Handler<V> {
        let item = Rc::clone(item);
        let inner = self.clone();
        Rc::new(move |value| inner.emit(set(&item, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    struct Inner(u32);

    #[derive(Debug, Clone, PartialEq)]
    struct Outer {
        label: &'static str,
        inner: Inner,
    }

    impl Layered<Inner> for Outer {
        fn layer(&self) -> &Inner {
            &self.inner
        }

        fn with_layer(&self, inner: Inner) -> Self {
            Self { inner, ..self.clone() }
        }
    }

    #[test]
    fn lifted_callbacks_emit_the_outer_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let on_change = OnChange::new(move |outer: Outer| sink.borrow_mut().push(outer));

        let original = Rc::new(Outer { label: "outer", inner: Inner(1) });
        let lifted = on_change.lift(Rc::clone(&original));
        lifted.emit(Inner(7));

        assert_eq!(seen.borrow().as_slice(), &[Outer { label: "outer", inner: Inner(7) }]);
        assert_eq!(original.layer(), &Inner(1));
    }

    #[test]
    fn field_handlers_build_from_the_rendered_value() {
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let on_change = OnChange::new(move |value: Inner| *sink.borrow_mut() = Some(value));

        let handler = on_change.field(&Rc::new(Inner(2)), |current, add: u32| Inner(current.0 + add));
        handler(3);
        handler(5);

        assert_eq!(*seen.borrow(), Some(Inner(7)));
    }
}
