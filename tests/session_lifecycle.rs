use catalog_core::client::{DocumentPatch, EditForm, FetchError, MemoryCatalog};
use catalog_core::client::CatalogFetcher;
use catalog_core::config::ClientConfig;
use catalog_core::document::{DocumentId, DocumentRecord, RecordsVersion};
use catalog_core::session::{run_fetch, CatalogSession, FetchKind, FetchOutcome};
use catalog_core::types::SortKey;

fn make_record(id: i64, title: &str) -> DocumentRecord {
    DocumentRecord::new(id, title, "Autor")
}

#[test]
fn lifecycle_begin_and_complete_fetch() {
    let mut session = CatalogSession::new();
    assert!(!session.is_loading());
    assert!(session.loaded_at().is_none());

    let ticket = session.begin_fetch(FetchKind::Catalog);
    assert!(session.is_loading());

    let outcome = session.complete_fetch(&ticket, Ok(vec![make_record(1, "Uno")]));
    assert_eq!(outcome, FetchOutcome::Applied { changed: true });
    assert!(!session.is_loading());
    assert!(session.loaded_at().is_some());
    assert_eq!(session.records().len(), 1);
}

#[test]
fn lifecycle_last_write_wins() {
    let mut session = CatalogSession::new();

    let catalog = session.begin_fetch(FetchKind::Catalog);
    let search = session.begin_fetch(FetchKind::Search {
        query: "dos".into(),
    });
    assert!(search.generation > catalog.generation);

    // The newer fetch lands first; the older one must not overwrite it.
    let applied = session.complete_fetch(&search, Ok(vec![make_record(2, "Dos")]));
    assert_eq!(applied, FetchOutcome::Applied { changed: true });

    let stale = session.complete_fetch(&catalog, Ok(vec![make_record(1, "Uno"), make_record(2, "Dos")]));
    assert_eq!(stale, FetchOutcome::Superseded);
    assert_eq!(session.records(), &[make_record(2, "Dos")]);
}

#[test]
fn lifecycle_stale_result_leaves_loading_state() {
    let mut session = CatalogSession::new();
    let first = session.begin_fetch(FetchKind::Catalog);
    let second = session.begin_fetch(FetchKind::Catalog);

    assert_eq!(session.complete_fetch(&first, Ok(vec![])), FetchOutcome::Superseded);
    assert!(session.is_loading(), "the newer fetch is still pending");
    assert_eq!(session.pending().map(|t| t.generation), Some(second.generation));
}

#[test]
fn lifecycle_failure_keeps_last_known_good() {
    let mut session = CatalogSession::with_records(vec![make_record(1, "Uno")]);
    let version = session.version().clone();

    let ticket = session.begin_fetch(FetchKind::Catalog);
    let outcome = session.complete_fetch(
        &ticket,
        Err(FetchError::Status {
            status: 500,
            detail: "No se pudieron obtener los documentos".into(),
        }),
    );

    assert_eq!(
        outcome,
        FetchOutcome::Failed {
            message: "No se pudieron obtener los documentos".into()
        }
    );
    assert_eq!(session.records().len(), 1);
    assert_eq!(session.version(), &version);
    assert_eq!(session.last_error(), Some("No se pudieron obtener los documentos"));
    assert!(!session.is_loading());

    let retry = session.begin_fetch(FetchKind::Catalog);
    session.complete_fetch(&retry, Ok(vec![make_record(1, "Uno")]));
    assert_eq!(session.last_error(), None);
}

#[test]
fn lifecycle_identical_reload_reports_unchanged() {
    let mut session = CatalogSession::with_records(vec![make_record(1, "Uno")]);
    let ticket = session.begin_fetch(FetchKind::Catalog);
    let outcome = session.complete_fetch(&ticket, Ok(vec![make_record(1, "Uno")]));
    assert_eq!(outcome, FetchOutcome::Applied { changed: false });
    assert_eq!(
        session.version(),
        &RecordsVersion::from_records(&[make_record(1, "Uno")])
    );
}

#[test]
fn selection_toggles_and_survives_only_while_present() {
    let mut session = CatalogSession::with_records(vec![make_record(1, "Uno"), make_record(2, "Dos")]);

    session.toggle_selection(DocumentId::new(2));
    assert_eq!(session.selected_record().map(|r| r.title.as_str()), Some("Dos"));

    session.toggle_selection(DocumentId::new(2));
    assert_eq!(session.selected(), None);

    session.toggle_selection(DocumentId::new(1));
    let ticket = session.begin_fetch(FetchKind::Catalog);
    session.complete_fetch(&ticket, Ok(vec![make_record(2, "Dos")]));
    assert_eq!(session.selected(), None, "selection of a vanished record is cleared");
}

#[test]
fn replace_record_swaps_wholesale() {
    let mut session = CatalogSession::with_records(vec![make_record(1, "Uno"), make_record(2, "Dos")]);
    let before = session.version().clone();

    let updated = make_record(2, "Dos (revisado)").with_copies(4);
    assert!(session.replace_record(updated.clone()));
    assert_eq!(session.records()[1], updated);
    assert_ne!(session.version(), &before);

    assert!(!session.replace_record(make_record(99, "Fantasma")));
}

#[test]
fn cards_follow_visible_order_and_selection() {
    let mut session = CatalogSession::with_records(vec![make_record(1, "Zeta"), make_record(2, "Alfa")]);
    session.criteria_mut().sort_key = Some(SortKey::Title);
    session.toggle_selection(DocumentId::new(1));

    let cards = session.cards();
    let shown: Vec<(&str, bool)> = cards.iter().map(|c| (c.title, c.selected)).collect();
    assert_eq!(shown, vec![("Alfa", false), ("Zeta", true)]);

    session.clear_filters();
    assert!(session.criteria().is_default());
    assert_eq!(session.cards()[0].title, "Zeta");
}

#[tokio::test]
async fn run_fetch_feeds_session_from_memory_catalog() {
    let catalog = MemoryCatalog::new(vec![
        make_record(1, "Los Juegos del Hambre"),
        make_record(2, "Rayuela"),
    ]);
    let config = ClientConfig::with_base_url("http://unused");
    let mut session = CatalogSession::new();

    let ticket = session.begin_fetch(FetchKind::Search {
        query: "  juegos ".into(),
    });
    let result = run_fetch(&catalog, &config, &ticket.kind).await;
    session.complete_fetch(&ticket, result);
    assert_eq!(session.records().len(), 1);

    // Edit round-trip: the confirmed record replaces the local one.
    let mut form = EditForm::from_record(&session.records()[0]);
    form.quantity = "3".into();
    let confirmed = catalog
        .update_document(DocumentId::new(1), &DocumentPatch::from_form(&form))
        .await
        .unwrap();
    assert!(session.replace_record(confirmed));
    assert!(session.records()[0].is_available());

    let blank = session.begin_fetch(FetchKind::Search { query: "   ".into() });
    let result = run_fetch(&catalog, &config, &blank.kind).await;
    assert_eq!(
        session.complete_fetch(&blank, result),
        FetchOutcome::Failed {
            message: "Search query is empty".into()
        }
    );
    assert_eq!(session.records().len(), 1);
}
