use crate::*;
use std::iter::Peekable;

/// Lazily pulled result items backed by a resource that must be released,
/// such as a network cursor.
pub trait ResultSource: Send {
    /// Next item, or `None` once the source is exhausted.
    fn next_item(&mut self) -> Result<Option<DataValue>>;

    /// True only when the source knows no further items remain. Sources that
    /// cannot tell without pulling keep the default.
    fn is_exhausted(&mut self) -> bool {
        false
    }

    /// Release the underlying resource. Called exactly once by [`take`].
    fn release(&mut self);
}

impl<T: ResultSource + ?Sized> ResultSource for Box<T> {
    fn next_item(&mut self) -> Result<Option<DataValue>> {
        (**self).next_item()
    }

    fn is_exhausted(&mut self) -> bool {
        (**self).is_exhausted()
    }

    fn release(&mut self) {
        (**self).release()
    }
}

/// Source over an in-memory iterator. Releasing drops the remaining items.
pub struct IterSource<I: Iterator> {
    items: Option<Peekable<I>>,
}

impl<I: Iterator<Item = DataValue>> IterSource<I> {
    pub fn new(items: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            items: Some(items.into_iter().peekable()),
        }
    }

    pub fn is_released(&self) -> bool {
        self.items.is_none()
    }
}

impl<I> ResultSource for IterSource<I>
where
    I: Iterator<Item = DataValue> + Send,
{
    fn next_item(&mut self) -> Result<Option<DataValue>> {
        match &mut self.items {
            Some(items) => Ok(items.next()),
            None => Err(Error::Internal("result source used after release".into())),
        }
    }

    fn is_exhausted(&mut self) -> bool {
        self.items.as_mut().is_none_or(|items| items.peek().is_none())
    }

    fn release(&mut self) {
        self.items = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_source_reports_exhaustion_before_release() -> Result {
        let mut source = IterSource::new(vec![DataValue::Int(1)]);
        assert!(!source.is_exhausted());
        assert_eq!(source.next_item()?, Some(DataValue::Int(1)));
        assert!(source.is_exhausted());
        assert_eq!(source.next_item()?, None);
        source.release();
        assert!(source.is_released());
        assert!(source.next_item().is_err());
        Ok(())
    }

    #[test]
    fn boxed_sources_delegate() -> Result {
        let mut source: Box<dyn ResultSource> = Box::new(IterSource::new(Vec::<DataValue>::new()));
        assert!(source.is_exhausted());
        assert_eq!(source.next_item()?, None);
        source.release();
        Ok(())
    }
}
