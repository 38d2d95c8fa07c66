//! Concurrency behavior of the resolution cache.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use bridge::{AdapterDescriptor, ResolutionCache, ResolutionError};

#[test]
fn concurrent_first_use_converges_on_one_outcome() {
    let cache = ResolutionCache::new();
    let attempts = AtomicUsize::new(0);

    let outcomes: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let cache = &cache;
                let attempts = &attempts;
                s.spawn(move || {
                    cache.resolve_with("entity_animation", || {
                        let attempt = attempts.fetch_add(1, Ordering::SeqCst);
                        // Each racer proposes a distinguishable shape.
                        Ok(AdapterDescriptor::new(format!("host.Anim{n}"), attempt))
                    })
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // Racers may redundantly compute, but everyone observes the same
    // durable descriptor.
    let first = outcomes[0].as_ref().as_ref().unwrap();
    for outcome in &outcomes {
        assert_eq!(outcome.as_ref().as_ref().unwrap(), first);
    }
    assert_eq!(cache.len(), 1);

    // Later callers see the durable outcome without running a resolver.
    let later = cache.resolve_with("entity_animation", || {
        panic!("resolver must not run after a durable outcome exists")
    });
    assert_eq!(later.as_ref().as_ref().unwrap(), first);
}

#[test]
fn concurrent_failures_converge_and_stay_failed() {
    let cache = ResolutionCache::new();

    thread::scope(|s| {
        for _ in 0..4 {
            let cache = &cache;
            s.spawn(move || {
                let outcome = cache.resolve_with("resource_pack_send", || {
                    Err(ResolutionError::new("host.ResourcePack", "missing on this platform"))
                });
                assert!(outcome.is_err());
            });
        }
    });

    // The failure is durable: no retry even with a resolver that would succeed.
    let outcome = cache.resolve_with("resource_pack_send", || {
        Ok(AdapterDescriptor::new("host.ResourcePack", 4))
    });
    assert!(outcome.is_err(), "cached failure must never be retried");
}

#[test]
fn independent_keys_resolve_in_parallel() {
    let cache = ResolutionCache::new();
    let keys = ["pkt_a", "pkt_b", "pkt_c", "pkt_d"];

    thread::scope(|s| {
        for key in keys {
            let cache = &cache;
            s.spawn(move || {
                cache.resolve_with(key, || Ok(AdapterDescriptor::new(format!("host.{key}"), 1)));
            });
        }
    });

    assert_eq!(cache.len(), keys.len());
    for key in keys {
        let outcome = cache.get(key).expect("every key resolved");
        assert_eq!(
            outcome.as_ref().as_ref().unwrap().host_type,
            format!("host.{key}")
        );
    }
}
