pub mod pinned_lru;
