//! End-to-end scenarios against a real on-disk directory store.

mod directory;
