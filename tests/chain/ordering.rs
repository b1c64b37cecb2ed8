use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use marketdash::{FallbackChain, MdError, Source, SourceFuture};

#[derive(Clone)]
enum Outcome {
    Rows(Vec<u32>),
    Fail(&'static str),
}

struct Fixed {
    name: &'static str,
    outcome: Outcome,
    calls: Arc<AtomicUsize>,
}

impl Fixed {
    fn new(name: &'static str, outcome: Outcome) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                name,
                outcome,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl Source<Vec<u32>> for Fixed {
    fn name(&self) -> &str {
        self.name
    }

    fn fetch(&self) -> SourceFuture<'_, Vec<u32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self.outcome.clone();
        Box::pin(async move {
            match outcome {
                Outcome::Rows(rows) => Ok(rows),
                Outcome::Fail(msg) => Err(MdError::Data(msg.to_string())),
            }
        })
    }
}

#[tokio::test]
async fn first_source_with_data_wins() {
    let (primary, primary_calls) = Fixed::new("primary", Outcome::Rows(vec![1, 2]));
    let (secondary, secondary_calls) = Fixed::new("secondary", Outcome::Rows(vec![9]));

    let chain = FallbackChain::<Vec<u32>>::new("numbers").source(primary).source(secondary);
    assert_eq!(chain.source_names(), vec!["primary", "secondary"]);

    assert_eq!(chain.resolve().await.unwrap(), vec![1, 2]);
    assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
    assert_eq!(secondary_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failure_and_empty_results_fall_through() {
    let (primary, primary_calls) = Fixed::new("primary", Outcome::Fail("down"));
    let (empty, empty_calls) = Fixed::new("empty", Outcome::Rows(Vec::new()));
    let (last, _) = Fixed::new("last", Outcome::Rows(vec![7]));

    let chain = FallbackChain::<Vec<u32>>::new("numbers")
        .source(primary)
        .source(empty)
        .source(last);

    assert_eq!(chain.resolve().await.unwrap(), vec![7]);
    assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
    assert_eq!(empty_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn exhausted_chain_reports_last_error_or_uses_fallback() {
    let (a, _) = Fixed::new("a", Outcome::Fail("first"));
    let (b, _) = Fixed::new("b", Outcome::Fail("second"));
    let chain = FallbackChain::<Vec<u32>>::new("numbers").source(a).source(b);

    match chain.resolve().await {
        Err(MdError::Data(msg)) => assert_eq!(msg, "second"),
        other => panic!("expected last error, got {other:?}"),
    }
    assert_eq!(chain.resolve_or_else(|| vec![42]).await, vec![42]);
}

#[tokio::test]
async fn optional_sources_and_empty_chain() {
    let (a, a_calls) = Fixed::new("a", Outcome::Rows(vec![3]));
    let chain = FallbackChain::<Vec<u32>>::new("numbers").source_if(None::<Fixed>);
    assert!(chain.is_empty());
    assert!(matches!(chain.resolve().await, Err(MdError::Data(_))));

    let chain = FallbackChain::<Vec<u32>>::new("numbers").source_if(Some(a));
    assert_eq!(chain.len(), 1);
    assert_eq!(chain.resolve().await.unwrap(), vec![3]);
    assert_eq!(a_calls.load(Ordering::SeqCst), 1);
}
