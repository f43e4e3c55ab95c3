#![cfg(test)]
crate::reexport!(fakes);
crate::reexport!(context);

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

mod fake_service_tests {
    use super::{super::*, *};

    #[test_context(WorkerContext)]
    #[tokio::test]
    async fn gate_holds_calls_until_opened(ctx: &mut WorkerContext) -> Result {
        ctx.worker.validate("1 + 1")?;
        tokio::task::yield_now().await;
        assert!(ctx.worker.try_next_event().is_none());
        ctx.open(1);
        let event = ctx.worker.next_event().await;
        assert!(matches!(event, Some(Event::Validated(v)) if v.ty == Some(TypeDescriptor::primitive(PrimitiveKind::Int))));
        Ok(())
    }

    #[tokio::test]
    async fn validation_reports_errors_for_bad_queries() -> Result {
        let service = FakeService::default();
        let validation = service.validate("select bad from").await?;
        assert!(!validation.is_valid());
        assert!(validation.ty.is_none());
        Ok(())
    }

    #[test]
    fn counting_source_fails_where_asked() -> Result {
        let mut source = CountingSource::failing_at(2);
        assert_eq!(source.next_item()?, Some(DataValue::Int(0)));
        assert_eq!(source.next_item()?, Some(DataValue::Int(1)));
        assert!(source.next_item().is_err());
        source.release();
        assert_eq!(source.releases(), 1);
        Ok(())
    }
}
