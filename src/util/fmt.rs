use std::fmt::{self, Debug, Formatter};

/// Debug output produced by a closure, for fields that have no Debug implementation of their own.
pub struct DebugRaw<F>(F);

impl<F> DebugRaw<F> {
    pub fn new(write: F) -> DebugRaw<F>
    where
        F: Fn(&mut Formatter<'_>) -> fmt::Result,
    {
        DebugRaw(write)
    }
}

impl<F: Fn(&mut Formatter<'_>) -> fmt::Result> Debug for DebugRaw<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}

/// Writes `items` in set literal form, `#{a, b, c}`, using `write_item` for each item.
pub fn write_set<I, W>(f: &mut Formatter<'_>, items: I, mut write_item: W) -> fmt::Result
where
    I: IntoIterator,
    W: FnMut(&mut Formatter<'_>, I::Item) -> fmt::Result,
{
    write!(f, "#{{")?;
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write_item(f, item)?;
    }
    write!(f, "}}")
}
