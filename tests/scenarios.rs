// ==============================================
// END-TO-END CACHE SCENARIOS (integration)
// ==============================================
//
// Caller-visible behavior exercised only through the public API.

use std::sync::{Arc, Mutex};

use pincache::traits::ObjectCache;
use pincache::{CacheBuilder, CacheError, CacheValue, PinnedCache};

mod eviction {
    use super::*;

    #[test]
    fn capacity_two_evicts_first_insert() {
        let cache = PinnedCache::new(2).unwrap();
        cache.put("a", 1i32, false).unwrap();
        cache.put("b", 2i32, false).unwrap();
        cache.put("c", 3i32, false).unwrap();

        assert_eq!(cache.get("a").unwrap_err(), CacheError::NotFound("a".into()));
        assert_eq!(*cache.get_as::<i32>("b").unwrap(), 2);
        assert_eq!(*cache.get_as::<i32>("c").unwrap(), 3);
    }

    #[test]
    fn get_saves_an_entry_from_eviction() {
        let cache = PinnedCache::new(3).unwrap();
        for (k, v) in [("a", 1), ("b", 2), ("c", 3)] {
            cache.put(k, v, false).unwrap();
        }
        cache.get("a").unwrap();
        cache.put("d", 4, false).unwrap();

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
    }

    #[test]
    fn len_never_exceeds_capacity() {
        let cache = PinnedCache::new(5).unwrap();
        for i in 0..200 {
            cache.put(&format!("k{}", i), i, i % 17 == 0).unwrap();
            let stats = cache.stats();
            assert!(stats.len <= stats.capacity, "{:?}", stats);
        }
    }
}

mod pinning {
    use super::*;

    #[test]
    fn all_pinned_capacity_grows_by_five() {
        let cache = PinnedCache::new(2).unwrap();
        cache.put("a", 1i32, true).unwrap();
        cache.put("b", 2i32, true).unwrap();
        assert_eq!(cache.pinned_count(), cache.capacity());

        cache.put("c", 3i32, false).unwrap();
        assert_eq!(cache.capacity(), 7);
        for (key, expected) in [("a", 1), ("b", 2), ("c", 3)] {
            assert_eq!(*cache.get_as::<i32>(key).unwrap(), expected);
        }
    }

    #[test]
    fn shrink_is_floored_at_initial_capacity() {
        let cache = CacheBuilder::new(2)
            .growth_step(5)
            .shrink_step(5)
            .try_build()
            .unwrap();
        for key in ["a", "b", "c"] {
            cache.put(key, 0u8, true).unwrap();
        }
        assert_eq!(cache.capacity(), 7);

        for key in ["a", "b", "c"] {
            cache.remove_permanent(key).unwrap();
            assert!(cache.capacity() >= 2);
        }
        assert_eq!(cache.capacity(), 2);
    }

    #[test]
    fn default_shrink_releases_one_slot_per_removal() {
        let cache = PinnedCache::new(2).unwrap();
        for key in ["a", "b", "c"] {
            cache.put(key, 0u8, true).unwrap();
        }
        assert_eq!(cache.capacity(), 7);

        let mut observed = Vec::new();
        for key in ["a", "b", "c"] {
            cache.remove_permanent(key).unwrap();
            observed.push(cache.capacity());
        }
        assert_eq!(observed, vec![6, 5, 4]);
    }

    #[test]
    fn pinned_app_state_is_shared_not_copied() {
        #[derive(Debug, Default)]
        struct AppState {
            open_documents: Vec<String>,
        }

        let cache = PinnedCache::new(4).unwrap();
        let state = Arc::new(Mutex::new(AppState::default()));
        cache.put_arc("app", Arc::clone(&state), true).unwrap();

        state.lock().unwrap().open_documents.push("notes.txt".into());

        let read = cache.get_as::<Mutex<AppState>>("app").unwrap();
        assert!(Arc::ptr_eq(&state, &read));
        assert_eq!(read.lock().unwrap().open_documents, vec!["notes.txt"]);

        let err = cache.put("app", String::from("oops"), true).unwrap_err();
        assert!(matches!(err, CacheError::PinnedTypeMismatch { .. }));
        assert!(cache.get_as::<Mutex<AppState>>("app").is_ok());
    }
}

mod invalid_input {
    use super::*;

    #[test]
    fn empty_key_and_missing_value_are_rejected() {
        let cache = PinnedCache::new(2).unwrap();
        cache.put("keep", 1u8, false).unwrap();
        let before = cache.keys_by_recency();

        assert!(matches!(
            cache.put("", String::from("x"), false),
            Err(CacheError::InvalidArgument(_))
        ));
        assert!(matches!(
            CacheValue::try_from_option::<String>(None)
                .and_then(|value| cache.put_value("k", value, false)),
            Err(CacheError::InvalidArgument(_))
        ));

        assert_eq!(cache.keys_by_recency(), before);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn zero_capacity_is_a_config_error() {
        assert!(PinnedCache::new(0).is_err());
    }
}

mod dependency_injection {
    use super::*;

    struct Repository<'a> {
        cache: &'a dyn ObjectCache,
        loads: usize,
    }

    impl Repository<'_> {
        fn find(&mut self, id: u32) -> Arc<String> {
            let key = format!("doc:{}", id);
            if let Ok(value) = self.cache.get(&key) {
                if let Some(doc) = value.downcast::<String>() {
                    return doc;
                }
            }
            self.loads += 1;
            let doc = Arc::new(format!("document {}", id));
            let _ = self
                .cache
                .put_value(&key, CacheValue::from_arc(Arc::clone(&doc)), false);
            doc
        }
    }

    #[test]
    fn independent_instances_per_consumer() {
        let first = PinnedCache::new(2).unwrap();
        let second = PinnedCache::new(2).unwrap();

        let mut repo = Repository { cache: &first, loads: 0 };
        repo.find(1);
        repo.find(1);
        repo.find(2);
        assert_eq!(repo.loads, 2);
        assert!(second.is_empty());

        repo.find(3);
        repo.find(1);
        assert_eq!(repo.loads, 4);
    }
}
