use flash_core::ProducerRegistry;
use flash_core::model::{Card, CardAction, StatsAction, StatsKind, StatsStore, seed_cards};
use flash_core::{Reducer, StatsReducer};
use services::default_producers;
use storage::repository::{CardRepository, InMemoryRepository, StatsRepository, Storage};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

fn fresh_storage() -> Storage {
    Storage::from_key_value(InMemoryRepository::new())
}

#[tokio::test(flavor = "current_thread")]
async fn answering_view_smoke_renders_first_seed_card() {
    let mut harness = setup_view_harness(ViewKind::Answering).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("What is a linked list?"), "missing question in {html}");
    assert!(html.contains("Next or Skip"), "missing skip button in {html}");
    assert!(html.contains("Submit"), "missing submit in {html}");
    assert!(html.contains("Show Answer"), "missing reveal toggle in {html}");
    assert!(html.contains("Total Questions: 0"), "missing totals in {html}");
    assert!(!html.contains("The nodes hold data."), "answer shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answering_view_smoke_renders_stored_totals() {
    let storage = fresh_storage();
    let stats = [StatsKind::Right, StatsKind::Wrong, StatsKind::Right]
        .into_iter()
        .fold(StatsStore::new(), |state, kind| {
            StatsReducer.reduce(&state, StatsAction::new(kind, "What is a stack?"))
        });
    storage.stats.save_stats(&stats).await.unwrap();

    let mut harness = setup_view_harness_with_storage(
        ViewKind::Answering,
        storage,
        ProducerRegistry::new(),
        Vec::new(),
    )
    .await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Total Questions: 1"), "missing count in {html}");
    assert!(html.contains("Questions Right: 2"), "missing right in {html}");
    assert!(html.contains("Questions Wrong: 1"), "missing wrong in {html}");
    assert!(html.contains("Questions Skipped: 0"), "missing skip in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answering_view_smoke_renders_empty_selection() {
    let mut harness = setup_view_harness_with_storage(
        ViewKind::Answering,
        fresh_storage(),
        ProducerRegistry::new(),
        vec![CardAction::New],
    )
    .await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("No card selected."), "missing empty state in {html}");
    assert!(html.contains("Start"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn subject_menu_smoke_lists_subjects() {
    let storage = fresh_storage();
    let mut cards = seed_cards();
    cards.push(Card::new("1 + 1 = ?", "2", "Math"));
    storage.cards.save_cards(&cards).await.unwrap();

    let mut harness = setup_view_harness_with_storage(
        ViewKind::Subjects,
        storage,
        default_producers(),
        Vec::new(),
    )
    .await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("All subjects"), "missing show-all in {html}");
    assert!(html.contains("Linked List"), "missing subject in {html}");
    assert!(html.contains("Stack"), "missing subject in {html}");
    assert!(html.contains("(generated)"), "missing generated marker in {html}");
    assert!(!html.contains("What is a stack?"), "collapsed subject listed questions in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn subject_menu_smoke_expands_shown_subject() {
    let mut harness = setup_view_harness_with_storage(
        ViewKind::Subjects,
        fresh_storage(),
        ProducerRegistry::new(),
        vec![CardAction::show_add("Stack")],
    )
    .await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("What is a stack?"), "missing question in {html}");
    assert!(!html.contains("What is a linked list?"), "hidden subject expanded in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn writing_view_smoke_edits_current_card() {
    let mut harness = setup_view_harness(ViewKind::Writing).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Write Cards"), "missing title in {html}");
    assert!(html.contains("What is a linked list?"), "missing draft in {html}");
    assert!(html.contains("Delete"), "missing delete in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn writing_view_smoke_new_card_has_no_delete() {
    let mut harness = setup_view_harness_with_storage(
        ViewKind::Writing,
        fresh_storage(),
        ProducerRegistry::new(),
        vec![CardAction::New],
    )
    .await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("New Card"), "missing new button in {html}");
    assert!(html.contains("Save"), "missing save in {html}");
    assert!(!html.contains("Delete"), "delete shown for new card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn store_provider_smoke_loads_snapshots() {
    let mut harness = setup_view_harness(ViewKind::Provided).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("What is a linked list?"), "missing question in {html}");
    assert!(
        harness
            .storage
            .cards
            .load_cards()
            .await
            .unwrap()
            .is_some_and(|cards| cards.len() == 2)
    );
    assert_eq!(harness.services.cards().snapshot().await.cards().len(), 2);
}
