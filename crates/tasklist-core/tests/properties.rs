//! Property tests over arbitrary sequences of store operations.

use proptest::prelude::*;
use proptest::test_runner::Config;

use tasklist_core::domain::IdGenerator;
use tasklist_core::{Category, MemoryStorage, PersistenceAdapter, TaskListConfig, TaskStore};

#[derive(Debug, Clone)]
enum Op {
    Create(String, Category),
    Delete(usize),
    Toggle(usize),
    Update(usize, String),
}

fn category() -> impl Strategy<Value = Category> {
    prop_oneof![Just(Category::Work), Just(Category::Personal), Just(Category::Study)]
}

fn text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just("   ".to_string()), "[ a-z]{0,12}"]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (text(), category()).prop_map(|(t, c)| Op::Create(t, c)),
        (0usize..8).prop_map(Op::Delete),
        (0usize..8).prop_map(Op::Toggle),
        (0usize..8, text()).prop_map(|(i, t)| Op::Update(i, t)),
    ]
}

fn frozen_store() -> TaskStore<MemoryStorage> {
    let adapter = PersistenceAdapter::new(MemoryStorage::new(), &TaskListConfig::default());
    TaskStore::open(adapter).with_id_generator(IdGenerator::with_fixed_clock(1_700_000_000_000))
}

fn apply(store: &mut TaskStore<MemoryStorage>, op: &Op) {
    // Indexes past the end target ids that do not exist
    let id_at = |store: &TaskStore<MemoryStorage>, i: usize| {
        store.list().get(i).map(|t| t.id).unwrap_or(tasklist_core::TaskId(u64::MAX))
    };
    match op {
        Op::Create(text, category) => {
            store.create(text, *category);
        }
        Op::Delete(i) => {
            let id = id_at(&*store, *i);
            store.delete(id);
        }
        Op::Toggle(i) => {
            let id = id_at(&*store, *i);
            store.toggle(id);
        }
        Op::Update(i, text) => {
            let id = id_at(&*store, *i);
            store.update(id, text);
        }
    }
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn ids_stay_unique(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = frozen_store();
        for op in &ops {
            apply(&mut store, op);
            let mut ids: Vec<_> = store.list().iter().map(|t| t.id).collect();
            let len = ids.len();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), len);
        }
    }

    #[test]
    fn text_is_never_blank(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = frozen_store();
        for op in &ops {
            apply(&mut store, op);
        }
        for task in store.list() {
            prop_assert!(!task.text.trim().is_empty());
            prop_assert_eq!(task.text.trim(), task.text.as_str());
        }
    }

    #[test]
    fn persisted_blob_matches_memory(ops in prop::collection::vec(op(), 1..40)) {
        let mut store = frozen_store();
        for op in &ops {
            apply(&mut store, op);
            let reloaded = PersistenceAdapter::new(
                store.adapter().storage().clone(),
                &TaskListConfig::default(),
            )
            .load();
            // Nothing stored yet means nothing has ever been created
            if store.adapter().storage().writes() > 0 {
                prop_assert_eq!(reloaded.as_slice(), store.list());
            } else {
                prop_assert!(store.is_empty());
            }
        }
    }

    #[test]
    fn blank_create_never_grows(ws in "[ \t]{0,6}", c in category()) {
        let mut store = frozen_store();
        store.create("seed", Category::Work);
        prop_assert!(store.create(&ws, c).is_none());
        prop_assert_eq!(store.len(), 1);
    }
}
