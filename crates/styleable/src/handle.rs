//! Shared handles to styleable elements.
//!
//! The styling core holds elements it does not own: the caller keeps them and
//! the core mutates them through short-lived borrows. A `StyleHandle` is the
//! only way in, so an element reference can never be dangling or null.

use core::cell::RefCell;
use core::fmt;
use std::rc::Rc;

use css_color::Rgba;

use crate::capability::Styleable;
use crate::geometry::{FloatRect, Vec2};
use crate::text_style::TextStyle;

/// Reference-counted, interior-mutable pointer to a styleable element.
///
/// Every forwarding method takes its borrow for the duration of the call only,
/// so a handle may be read again while another handle to a different element
/// is being written.
pub struct StyleHandle {
    inner: Rc<RefCell<dyn Styleable>>,
}

impl StyleHandle {
    /// Move a fresh element behind a handle.
    pub fn new<T: Styleable + 'static>(element: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(element)),
        }
    }

    /// Share an element the caller already keeps behind an `Rc<RefCell<_>>`.
    pub fn wrap<T: Styleable + 'static>(element: &Rc<RefCell<T>>) -> Self {
        let shared: Rc<RefCell<dyn Styleable>> = Rc::<RefCell<T>>::clone(element);
        Self { inner: shared }
    }

    /// True if both handles point at the same element.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Run `action` with shared access to the element.
    pub fn with<R>(&self, action: impl FnOnce(&dyn Styleable) -> R) -> R {
        action(&*self.inner.borrow())
    }

    /// Run `action` with exclusive access to the element.
    pub fn with_mut<R>(&self, action: impl FnOnce(&mut dyn Styleable) -> R) -> R {
        action(&mut *self.inner.borrow_mut())
    }

    pub fn position(&self) -> Vec2 {
        self.inner.borrow().position()
    }

    pub fn set_position(&self, position: Vec2) {
        self.inner.borrow_mut().set_position(position);
    }

    pub fn move_by(&self, delta: Vec2) {
        self.inner.borrow_mut().move_by(delta);
    }

    pub fn origin(&self) -> Vec2 {
        self.inner.borrow().origin()
    }

    pub fn set_origin(&self, origin: Vec2) {
        self.inner.borrow_mut().set_origin(origin);
    }

    pub fn scale(&self) -> Vec2 {
        self.inner.borrow().scale()
    }

    pub fn set_scale(&self, scale: Vec2) {
        self.inner.borrow_mut().set_scale(scale);
    }

    pub fn rotation(&self) -> f32 {
        self.inner.borrow().rotation()
    }

    pub fn set_rotation(&self, degrees: f32) {
        self.inner.borrow_mut().set_rotation(degrees);
    }

    pub fn size(&self) -> Vec2 {
        self.inner.borrow().size()
    }

    pub fn set_size(&self, size: Vec2) {
        self.inner.borrow_mut().set_size(size);
    }

    pub fn bounds(&self) -> FloatRect {
        self.inner.borrow().bounds()
    }

    pub fn fill_color(&self) -> Rgba {
        self.inner.borrow().fill_color()
    }

    pub fn set_fill_color(&self, color: Rgba) {
        self.inner.borrow_mut().set_fill_color(color);
    }

    pub fn outline_color(&self) -> Rgba {
        self.inner.borrow().outline_color()
    }

    pub fn set_outline_color(&self, color: Rgba) {
        self.inner.borrow_mut().set_outline_color(color);
    }

    pub fn set_outline_thickness(&self, thickness: f32) {
        self.inner.borrow_mut().set_outline_thickness(thickness);
    }

    pub fn set_character_size(&self, size: u32) {
        self.inner.borrow_mut().set_character_size(size);
    }

    pub fn set_letter_spacing(&self, factor: f32) {
        self.inner.borrow_mut().set_letter_spacing(factor);
    }

    pub fn set_line_spacing(&self, factor: f32) {
        self.inner.borrow_mut().set_line_spacing(factor);
    }

    pub fn set_text_style(&self, style: TextStyle) {
        self.inner.borrow_mut().set_text_style(style);
    }

    pub fn is_text(&self) -> bool {
        self.inner.borrow().is_text()
    }

    pub fn is_sprite(&self) -> bool {
        self.inner.borrow().is_sprite()
    }

    pub fn type_name(&self) -> &'static str {
        self.inner.borrow().type_name()
    }
}

impl Clone for StyleHandle {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for StyleHandle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(element) => formatter
                .debug_struct("StyleHandle")
                .field("kind", &element.type_name())
                .field("position", &element.position())
                .field("size", &element.size())
                .finish(),
            Err(_) => formatter.write_str("StyleHandle(<borrowed>)"),
        }
    }
}
