use crate::*;

/// Most items pulled from a streamed result.
pub const RESULT_CAP: usize = 100;

/// Items pulled from a [`ResultSource`] by [`take`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub items: Vec<DataValue>,
    /// More items may remain in the source.
    pub truncated: bool,
}

/// Pull at most `cap` items from `source`, then release it.
///
/// The source is released exactly once, also when pulling fails.
pub fn take(mut source: impl ResultSource, cap: usize) -> Result<Page> {
    let page = pull(&mut source, cap);
    source.release();
    let page = page?;
    trace!(
        "Materialized {} items (truncated: {})",
        page.items.len(),
        page.truncated
    );
    Ok(page)
}

/// Status line shown alongside a truncated result.
pub fn truncation_notice(cap: usize) -> String {
    format!("showing only first {cap} results")
}

fn pull(source: &mut impl ResultSource, cap: usize) -> Result<Page> {
    let mut items = Vec::with_capacity(cap.min(RESULT_CAP));
    while items.len() < cap {
        match source.next_item()? {
            Some(item) => items.push(item),
            None => {
                return Ok(Page {
                    items,
                    truncated: false,
                });
            }
        }
    }
    let truncated = !source.is_exhausted();
    Ok(Page { items, truncated })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::Ordering;

    #[test]
    fn caps_infinite_source_and_releases_once() -> Result {
        let source = CountingSource::new();
        let releases = source.releases_counter();
        let page = take(source, RESULT_CAP)?;
        assert_eq!(page.items.len(), 100);
        assert_eq!(page.items[0], DataValue::Int(0));
        assert_eq!(page.items[99], DataValue::Int(99));
        assert!(page.truncated);
        assert_eq!(releases.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[rstest]
    #[case(0, false)]
    #[case(3, false)]
    #[case(99, false)]
    #[case(100, false)]
    #[case(101, true)]
    fn short_sources_are_not_truncated(#[case] len: i64, #[case] truncated: bool) -> Result {
        let page = take(IterSource::new((0..len).map(DataValue::Int)), RESULT_CAP)?;
        assert_eq!(page.items.len() as i64, len.min(100));
        assert_eq!(page.truncated, truncated);
        Ok(())
    }

    #[test]
    fn releases_when_pulling_fails() {
        let source = CountingSource::failing_at(5);
        let releases = source.releases_counter();
        assert!(matches!(take(source, RESULT_CAP), Err(Error::Service(_))));
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn zero_cap_pulls_nothing() -> Result {
        let source = CountingSource::new();
        let releases = source.releases_counter();
        let page = take(source, 0)?;
        assert!(page.items.is_empty());
        assert!(page.truncated);
        assert_eq!(releases.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[test]
    fn notice_names_the_cap() {
        assert_eq!(truncation_notice(RESULT_CAP), "showing only first 100 results");
    }
}
