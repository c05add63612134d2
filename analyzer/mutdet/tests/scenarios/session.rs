//! Session behaviour seen through the facade.

use std::sync::Arc;
use std::thread;

use mutdet::{AnalysisConfig, AnalysisSession, AllowedReason, Suppressed};
use pretty_assertions::assert_eq;

use crate::fixtures::{dotted, pool};

#[test]
fn repeated_queries_share_one_result() {
    let session = AnalysisSession::new(pool());
    let first = session.result_for(&dotted("com.acme.Roster")).unwrap();
    let second = session.result_for_name("com/acme/Roster").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn suppression_leaves_the_cached_result_alone() {
    let session = AnalysisSession::new(pool());
    let class = dotted("com.acme.ExposedCounter");
    let result = session.result_for(&class).unwrap();
    let view = Suppressed::new(&result, &[AllowedReason::allowing_non_final_fields()]);
    assert!(view.remaining().is_empty());

    let again = session.result_for(&class).unwrap();
    assert_eq!(again.findings().len(), 2);
    assert!(!again.is_immutable());
}

#[test]
fn two_sessions_agree() {
    let left = AnalysisSession::new(pool());
    let right = AnalysisSession::with_config(pool(), AnalysisConfig::new().with_parallel(false));
    for name in ["com.acme.Point", "com.acme.Roster", "com.acme.Bean"] {
        let class = dotted(name);
        assert_eq!(
            *left.result_for(&class).unwrap(),
            *right.result_for(&class).unwrap()
        );
    }
}

#[test]
fn concurrent_callers_observe_one_result() {
    let session = AnalysisSession::new(pool());
    let class = dotted("com.acme.Bean");
    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| scope.spawn(|| session.result_for(&class).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(results.iter().all(|r| Arc::ptr_eq(r, &results[0])));
    assert_eq!(session.analysed_classes(), vec![class]);
}

#[test]
fn batch_analysis_covers_the_pool() {
    let session = AnalysisSession::new(pool());
    let names: Vec<_> = [
        "com.acme.Point",
        "com.acme.ExposedCounter",
        "com.acme.Roster",
        "com.acme.SafeRoster",
        "com.acme.Bean",
    ]
    .into_iter()
    .map(dotted)
    .collect();
    let immutable: Vec<bool> = session
        .analyse_all(&names)
        .into_iter()
        .map(|r| r.unwrap().is_immutable())
        .collect();
    assert_eq!(immutable, vec![true, false, false, true, false]);
    assert_eq!(session.len(), 5);
}
