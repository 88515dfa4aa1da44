//! Walkthrough of pinned entries and adaptive capacity.
//!
//! Run with `RUST_LOG=pincache=debug` to see eviction and capacity events.

use std::sync::{Arc, Mutex};

use pincache::{CacheBuilder, CacheError, PinnedCache};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Session {
    user: String,
    open_tabs: Vec<String>,
}

fn load_profile(cache: &PinnedCache, id: u32) -> Arc<String> {
    let key = format!("profile:{}", id);
    match cache.get_as::<String>(&key) {
        Ok(profile) => profile,
        Err(CacheError::NotFound(_)) => {
            let profile = Arc::new(format!("profile #{}", id));
            if let Err(err) = cache.put_arc(&key, Arc::clone(&profile), false) {
                eprintln!("could not cache {}: {}", key, err);
            }
            profile
        },
        Err(err) => panic!("unexpected cache error: {}", err),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cache = CacheBuilder::new(3).growth_step(2).try_build().unwrap();

    let session = Arc::new(Mutex::new(Session {
        user: "ada".into(),
        ..Session::default()
    }));
    cache.put_arc("session", Arc::clone(&session), true).unwrap();

    for id in 0..6 {
        load_profile(&cache, id);
    }
    println!("after profile churn: {:?}", cache.keys_by_recency());

    session.lock().unwrap().open_tabs.push("inbox".into());
    let shared = cache.get_as::<Mutex<Session>>("session").unwrap();
    {
        let shared = shared.lock().unwrap();
        println!("session for {} sees tabs {:?}", shared.user, shared.open_tabs);
    }

    match cache.put("session", String::from("not a session"), true) {
        Err(err) => println!("rejected: {}", err),
        Ok(()) => println!("unexpectedly replaced pinned session"),
    }

    for name in ["theme", "locale", "plugins"] {
        cache.put(name, name.to_uppercase(), true).unwrap();
    }
    println!("pinned everything: {:?}", cache.stats());

    for name in ["theme", "locale", "plugins"] {
        cache.remove_permanent(name).unwrap();
    }
    println!("released pins: {:?}", cache.stats());
}
