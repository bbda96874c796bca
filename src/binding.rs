//! Two-way binding to a value owned by the view's caller
//!
//! The view never owns its size. It reads and writes it through a [`Binding`],
//! which is either a shared cell or an explicit getter/setter pair.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Read/write handle to a caller-owned value
pub struct Binding<T> {
    get: Box<dyn Fn() -> T>,
    set: Box<dyn FnMut(T)>,
}

impl<T: Copy + 'static> Binding<T> {
    /// Bind to an explicit getter/setter pair
    pub fn new(get: impl Fn() -> T + 'static, set: impl FnMut(T) + 'static) -> Self {
        Self {
            get: Box::new(get),
            set: Box::new(set),
        }
    }

    /// Bind to a shared cell; the caller keeps its own clone of the `Rc`
    pub fn from_cell(cell: Rc<Cell<T>>) -> Self {
        let writer = Rc::clone(&cell);
        Self::new(move || cell.get(), move |value| writer.set(value))
    }

    pub fn get(&self) -> T {
        (self.get)()
    }

    pub fn set(&mut self, value: T) {
        (self.set)(value)
    }
}

impl<T: Copy + fmt::Debug + 'static> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_binding_writes_through() {
        let size = Rc::new(Cell::new(100.0_f32));
        let mut binding = Binding::from_cell(Rc::clone(&size));

        assert_eq!(binding.get(), 100.0);
        binding.set(240.0);
        assert_eq!(size.get(), 240.0);

        // Writes by the owner are visible through the binding
        size.set(12.0);
        assert_eq!(binding.get(), 12.0);
    }

    #[test]
    fn test_getter_setter_binding() {
        let store = Rc::new(Cell::new(0.0_f32));
        let reader = Rc::clone(&store);
        let writer = Rc::clone(&store);
        let mut binding = Binding::new(move || reader.get(), move |v| writer.set(v * 2.0));

        binding.set(5.0);
        assert_eq!(binding.get(), 10.0);
    }
}
